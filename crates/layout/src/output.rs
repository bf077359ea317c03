//! Output types from the layout engine.
//!
//! A [`LaidOutTree`] holds one [`RenderBox`] per node, in pre-order, carrying everything a
//! renderer needs to apply the layout: final outer and inner extents, horizontal offsets and
//! the positioning scheme.

use crate::node_kind::NodeKind;
use crate::util::{extents_fuzzy_eq, floats_fuzzy_eq};
use layouter_types::{Extent, NodeId, Positioning};
use serde::Serialize;

/// Resolved geometry of a displayed node.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BoxGeometry {
    pub width: Extent,
    pub inner_width: Extent,
    pub height: Extent,
    pub inner_height: Extent,
    pub left: Extent,
    pub left_percent: Extent,
    pub positioning: Positioning,
    /// Offset that centers the content vertically, for nodes marked `align`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_top: Option<f64>,
}

impl BoxGeometry {
    /// Whether applying `self` over `previous` would visibly move or resize the box.
    pub fn differs_from(&self, previous: &BoxGeometry) -> bool {
        !(extents_fuzzy_eq(self.width, previous.width)
            && extents_fuzzy_eq(self.height, previous.height)
            && extents_fuzzy_eq(self.left, previous.left)
            && self.positioning == previous.positioning
            && floats_fuzzy_eq(self.content_top, previous.content_top))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderBox {
    pub id: NodeId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// `None` only for a hidden node that could not be classified.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<NodeKind>,
    /// The kind whose calculator sized the node; differs from `kind` in breaking mode.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub effective_kind: Option<NodeKind>,
    pub displayed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub geometry: Option<BoxGeometry>,
}

/// The result of one layout pass.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LaidOutTree {
    pub profile: String,
    pub breaking: bool,
    /// Hint for the renderer to animate the transition from the previous layout.
    pub animate: bool,
    pub boxes: Vec<RenderBox>,
}

impl LaidOutTree {
    pub fn get(&self, node: NodeId) -> Option<&RenderBox> {
        self.boxes.iter().find(|b| b.id == node)
    }

    pub fn geometry(&self, node: NodeId) -> Option<&BoxGeometry> {
        self.get(node).and_then(|b| b.geometry.as_ref())
    }

    /// Nodes whose geometry must be re-applied after `previous` was rendered.
    pub fn changed_since(&self, previous: &LaidOutTree) -> Vec<NodeId> {
        self.boxes
            .iter()
            .filter(|b| match (&b.geometry, previous.geometry(b.id)) {
                (Some(now), Some(before)) => now.differs_from(before),
                (None, None) => false,
                _ => true,
            })
            .map(|b| b.id)
            .collect()
    }

    /// Keeps only the boxes for `nodes`, in their laid-out order.
    pub fn retain(&mut self, nodes: &[NodeId]) {
        self.boxes.retain(|b| nodes.contains(&b.id));
    }
}
