//! The node tree: an arena of nodes linked by parent/child indices.
//!
//! Nodes are owned by the arena; parents and children refer to each other by [`NodeId`], which
//! keeps ownership acyclic and makes invalidation walks explicit.

use crate::LayoutError;
use crate::node_kind::NodeKind;
use layouter_types::{NodeConfig, NodeId, NodeMarkers, ProfileOverrides};
use std::cell::OnceCell;

/// A node as supplied by the tree builder: static markers, per-profile configuration and an
/// optional label for diagnostics.
#[derive(Debug, Clone, Default)]
pub struct NodeData {
    pub markers: NodeMarkers,
    pub config: NodeConfig,
    pub label: Option<String>,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    kind: OnceCell<NodeKind>,
}

impl NodeData {
    pub fn new(markers: NodeMarkers) -> Self {
        Self {
            markers,
            ..Default::default()
        }
    }

    pub fn with_config(mut self, config: NodeConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }
}

/// Which directions a [`NodeTree::find`] search walks, and whether it stops at the closest
/// match on each path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FindScope {
    /// Return every match instead of only the closest ones.
    pub deep: bool,
    pub up: bool,
    pub down: bool,
}

impl FindScope {
    pub const fn closest_below() -> Self {
        Self {
            deep: false,
            up: false,
            down: true,
        }
    }

    pub const fn all_below() -> Self {
        Self {
            deep: true,
            up: false,
            down: true,
        }
    }

    pub const fn closest_above() -> Self {
        Self {
            deep: false,
            up: true,
            down: false,
        }
    }
}

#[derive(Debug, Clone)]
pub struct NodeTree {
    nodes: Vec<NodeData>,
}

impl NodeTree {
    /// Creates a tree holding only `root`.
    pub fn new(root: NodeData) -> Self {
        let mut root = root;
        root.parent = None;
        root.children.clear();
        Self { nodes: vec![root] }
    }

    pub fn root(&self) -> NodeId {
        NodeId::new(0)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn contains(&self, id: NodeId) -> bool {
        id.index() < self.nodes.len()
    }

    /// Appends `data` as the last child of `parent`.
    ///
    /// Children must be attached before the parent is first classified; a node's kind is
    /// never re-evaluated.
    pub fn append(&mut self, parent: NodeId, data: NodeData) -> Result<NodeId, LayoutError> {
        if !self.contains(parent) {
            return Err(LayoutError::UnknownNode(parent));
        }
        let id = next_id(self.nodes.len())?;
        let mut data = data;
        data.parent = Some(parent);
        data.children.clear();
        data.kind = OnceCell::new();
        self.nodes.push(data);
        self.nodes[parent.index()].children.push(id);
        Ok(id)
    }

    pub fn node(&self, id: NodeId) -> Option<&NodeData> {
        self.nodes.get(id.index())
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).and_then(|n| n.parent)
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.node(id).map(|n| n.children.as_slice()).unwrap_or(&[])
    }

    pub fn markers(&self, id: NodeId) -> Option<&NodeMarkers> {
        self.node(id).map(|n| &n.markers)
    }

    pub fn label(&self, id: NodeId) -> Option<&str> {
        self.node(id).and_then(|n| n.label.as_deref())
    }

    /// The node's overrides for the named profile.
    pub fn overrides(&self, id: NodeId, profile: &str) -> Option<&ProfileOverrides> {
        self.node(id).and_then(|n| n.config.profile(profile))
    }

    /// The node's kind, classified on first query and cached for the node's lifetime.
    pub fn kind(&self, id: NodeId) -> Result<NodeKind, LayoutError> {
        let node = self.node(id).ok_or(LayoutError::UnknownNode(id))?;
        if let Some(kind) = node.kind.get() {
            return Ok(*kind);
        }
        let kind = NodeKind::classify(self, id)?;
        let _ = node.kind.set(kind);
        Ok(kind)
    }

    /// Ancestors of `id`, nearest first.
    pub fn ancestors(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        std::iter::successors(self.parent(id), move |&n| self.parent(n))
    }

    /// The topmost ancestor of `id`, or `id` itself when it has no parent.
    pub fn root_of(&self, id: NodeId) -> NodeId {
        self.ancestors(id).last().unwrap_or(id)
    }

    /// All descendants of `id` in pre-order, excluding `id` itself.
    pub fn descendants(&self, id: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack: Vec<NodeId> = self.children(id).iter().rev().copied().collect();
        while let Some(n) = stack.pop() {
            out.push(n);
            stack.extend(self.children(n).iter().rev().copied());
        }
        out
    }

    /// Searches the hierarchy around `start` (excluding `start` itself).
    ///
    /// Upward matches come first, nearest ancestor first; downward matches follow in pre-order.
    /// Unless `scope.deep` is set, a path stops at its first match.
    pub fn find(
        &self,
        start: NodeId,
        matcher: impl Fn(&NodeTree, NodeId) -> bool,
        scope: FindScope,
    ) -> Vec<NodeId> {
        let mut found = Vec::new();
        if scope.up {
            for ancestor in self.ancestors(start) {
                if matcher(self, ancestor) {
                    found.push(ancestor);
                    if !scope.deep {
                        break;
                    }
                }
            }
        }
        if scope.down {
            self.find_below(start, &matcher, scope.deep, &mut found);
        }
        found
    }

    fn find_below(
        &self,
        id: NodeId,
        matcher: &impl Fn(&NodeTree, NodeId) -> bool,
        deep: bool,
        found: &mut Vec<NodeId>,
    ) {
        for &child in self.children(id) {
            let hit = matcher(self, child);
            if hit {
                found.push(child);
            }
            if deep || !hit {
                self.find_below(child, matcher, deep, found);
            }
        }
    }

    /// Every node carrying `label`, in pre-order.
    pub fn find_by_label(&self, label: &str) -> Vec<NodeId> {
        let root = self.root();
        let mut found = Vec::new();
        if self.label(root) == Some(label) {
            found.push(root);
        }
        found.extend(self.find(root, |t, n| t.label(n) == Some(label), FindScope::all_below()));
        found
    }
}

fn next_id(len: usize) -> Result<NodeId, LayoutError> {
    u32::try_from(len)
        .map(NodeId::new)
        .map_err(|_| LayoutError::TreeFull { len })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> (NodeTree, [NodeId; 5]) {
        let mut tree = NodeTree::new(NodeData::new(NodeMarkers::table()).with_label("t"));
        let root = tree.root();
        let r1 = tree.append(root, NodeData::new(NodeMarkers::row()).with_label("r")).unwrap();
        let c1 = tree.append(r1, NodeData::new(NodeMarkers::column()).with_label("c")).unwrap();
        let inner = tree.append(c1, NodeData::new(NodeMarkers::row()).with_label("r")).unwrap();
        let c2 = tree.append(r1, NodeData::new(NodeMarkers::column()).with_label("c")).unwrap();
        (tree, [root, r1, c1, inner, c2])
    }

    #[test]
    fn links_are_index_based() {
        let (tree, [root, r1, c1, inner, c2]) = sample();
        assert_eq!(tree.len(), 5);
        assert!(!tree.is_empty());
        assert_eq!(tree.parent(root), None);
        assert_eq!(tree.parent(c1), Some(r1));
        assert_eq!(tree.children(r1), &[c1, c2]);
        assert_eq!(tree.ancestors(inner).collect::<Vec<_>>(), vec![c1, r1, root]);
        assert_eq!(tree.root_of(inner), root);
        assert_eq!(tree.descendants(root), vec![r1, c1, inner, c2]);
    }

    #[test]
    #[cfg(target_pointer_width = "64")]
    fn ids_stop_at_the_u32_range() {
        assert_eq!(next_id(7), Ok(NodeId::new(7)));
        assert_eq!(next_id(u32::MAX as usize), Ok(NodeId::new(u32::MAX)));
        let len = u32::MAX as usize + 1;
        assert_eq!(next_id(len), Err(LayoutError::TreeFull { len }));
    }

    #[test]
    fn append_rejects_unknown_parent() {
        let (mut tree, _) = sample();
        let ghost = NodeId::new(99);
        assert_eq!(
            tree.append(ghost, NodeData::default()),
            Err(LayoutError::UnknownNode(ghost))
        );
    }

    #[test]
    fn find_stops_at_closest_match_unless_deep() {
        let (tree, [root, r1, _c1, inner, _c2]) = sample();
        let is_row = |t: &NodeTree, n: NodeId| t.markers(n).is_some_and(|m| m.row);

        assert_eq!(tree.find(root, is_row, FindScope::closest_below()), vec![r1]);
        assert_eq!(tree.find(root, is_row, FindScope::all_below()), vec![r1, inner]);
        assert_eq!(tree.find(inner, is_row, FindScope::closest_above()), vec![r1]);
    }

    #[test]
    fn find_by_label_includes_root() {
        let (tree, [root, _r1, c1, _inner, c2]) = sample();
        assert_eq!(tree.find_by_label("t"), vec![root]);
        assert_eq!(tree.find_by_label("c"), vec![c1, c2]);
        assert!(tree.find_by_label("missing").is_empty());
    }

    #[test]
    fn kind_is_cached() {
        let (tree, [root, r1, c1, ..]) = sample();
        assert_eq!(tree.kind(root), Ok(NodeKind::Table));
        assert_eq!(tree.kind(c1), Ok(NodeKind::Compound));
        assert_eq!(tree.kind(r1), Ok(NodeKind::Row));
        assert_eq!(tree.kind(c1), Ok(NodeKind::Compound));
        assert_eq!(tree.kind(NodeId::new(42)), Err(LayoutError::UnknownNode(NodeId::new(42))));
    }
}
