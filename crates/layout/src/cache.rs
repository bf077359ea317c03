use crate::facet::Facet;
use crate::tree::NodeTree;
use layouter_types::{Extent, NodeId, Positioning};

/// State of one memo slot.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Slot<T> {
    #[default]
    Empty,
    /// Resolution has started and not finished; reading it again means a cycle.
    InProgress,
    Ready(T),
}

impl<T: Copy> Slot<T> {
    pub fn value(&self) -> Option<T> {
        match self {
            Slot::Ready(v) => Some(*v),
            _ => None,
        }
    }
}

/// Memoized facets of a single node for the current pass.
#[derive(Debug, Clone, Copy, Default)]
pub struct NodeLayout {
    extents: [Slot<Extent>; Facet::COUNT],
    positioning: Slot<Positioning>,
}

impl NodeLayout {
    pub fn is_clear(&self) -> bool {
        self.extents.iter().all(|s| matches!(s, Slot::Empty))
            && matches!(self.positioning, Slot::Empty)
    }
}

/// Typed access to a node's memo slots.
pub trait SlotAccess<T> {
    fn slot(&self, facet: Facet) -> Slot<T>;
    fn set_slot(&mut self, facet: Facet, slot: Slot<T>);
}

impl SlotAccess<Extent> for NodeLayout {
    fn slot(&self, facet: Facet) -> Slot<Extent> {
        self.extents[facet.index()]
    }

    fn set_slot(&mut self, facet: Facet, slot: Slot<Extent>) {
        self.extents[facet.index()] = slot;
    }
}

impl SlotAccess<Positioning> for NodeLayout {
    fn slot(&self, _facet: Facet) -> Slot<Positioning> {
        self.positioning
    }

    fn set_slot(&mut self, _facet: Facet, slot: Slot<Positioning>) {
        self.positioning = slot;
    }
}

/// Directions in which [`LayoutCache::invalidate`] clears memoized facets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Invalidation {
    /// Clear every ancestor: descendants' content feeds their required and balanced heights.
    pub upward: bool,
    /// Clear every descendant: resized ancestors invalidate all derived child facets.
    pub downward: bool,
}

impl Invalidation {
    pub const UP: Invalidation = Invalidation {
        upward: true,
        downward: false,
    };
    pub const DOWN: Invalidation = Invalidation {
        upward: false,
        downward: true,
    };
    pub const BOTH: Invalidation = Invalidation {
        upward: true,
        downward: true,
    };
}

/// Per-pass facet memo for every node of a tree.
#[derive(Debug, Clone, Default)]
pub struct LayoutCache {
    nodes: Vec<NodeLayout>,
}

impl LayoutCache {
    pub fn new(len: usize) -> Self {
        Self {
            nodes: vec![NodeLayout::default(); len],
        }
    }

    /// Grows the cache to cover nodes appended to the tree since it was created.
    pub fn ensure_len(&mut self, len: usize) {
        if self.nodes.len() < len {
            self.nodes.resize(len, NodeLayout::default());
        }
    }

    pub(crate) fn slot<T>(&self, node: NodeId, facet: Facet) -> Slot<T>
    where
        NodeLayout: SlotAccess<T>,
    {
        self.nodes
            .get(node.index())
            .map(|l| l.slot(facet))
            .unwrap_or(Slot::Empty)
    }

    pub(crate) fn set<T>(&mut self, node: NodeId, facet: Facet, slot: Slot<T>)
    where
        NodeLayout: SlotAccess<T>,
    {
        self.ensure_len(node.index() + 1);
        self.nodes[node.index()].set_slot(facet, slot);
    }

    /// The cached extent of `facet`, if it has been resolved this pass.
    pub fn cached(&self, node: NodeId, facet: Facet) -> Option<Extent> {
        self.slot::<Extent>(node, facet).value()
    }

    pub fn cached_positioning(&self, node: NodeId) -> Option<Positioning> {
        self.slot::<Positioning>(node, Facet::Positioning).value()
    }

    /// Clears `node` and, depending on `direction`, its ancestors and/or descendants.
    pub fn invalidate(&mut self, tree: &NodeTree, node: NodeId, direction: Invalidation) {
        self.clear_node(node);
        if direction.upward {
            for ancestor in tree.ancestors(node) {
                self.clear_node(ancestor);
            }
        }
        if direction.downward {
            for descendant in tree.descendants(node) {
                self.clear_node(descendant);
            }
        }
    }

    pub fn clear(&mut self) {
        self.nodes.iter_mut().for_each(|l| *l = NodeLayout::default());
    }

    pub fn is_clear(&self) -> bool {
        self.nodes.iter().all(NodeLayout::is_clear)
    }

    fn clear_node(&mut self, node: NodeId) {
        if let Some(layout) = self.nodes.get_mut(node.index()) {
            *layout = NodeLayout::default();
        }
    }
}
