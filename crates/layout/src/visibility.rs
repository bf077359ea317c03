//! Which nodes take part in weight, offset and balance calculations.
//!
//! A node is displayed when neither it nor any of its ancestors is hidden. Hidden siblings
//! contribute no weight and no offset.

use crate::tree::NodeTree;
use layouter_traits::DisplayState;
use layouter_types::NodeId;

pub fn is_displayed(tree: &NodeTree, display: &dyn DisplayState, node: NodeId) -> bool {
    tree.contains(node)
        && display.is_visually_displayed(node)
        && tree.ancestors(node).all(|a| display.is_visually_displayed(a))
}

/// Displayed children of `node`, in child order.
pub fn displayed_children(tree: &NodeTree, display: &dyn DisplayState, node: NodeId) -> Vec<NodeId> {
    if !is_displayed(tree, display, node) {
        return Vec::new();
    }
    tree.children(node)
        .iter()
        .copied()
        .filter(|&c| display.is_visually_displayed(c))
        .collect()
}

/// Displayed children of `node`'s parent, `node` included when it is displayed itself.
pub fn displayed_siblings(tree: &NodeTree, display: &dyn DisplayState, node: NodeId) -> Vec<NodeId> {
    match tree.parent(node) {
        Some(parent) => displayed_children(tree, display, parent),
        None if is_displayed(tree, display, node) => vec![node],
        None => Vec::new(),
    }
}
