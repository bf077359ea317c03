//! Collaborator contracts consumed by the layout engine.
//!
//! The engine never touches a visual representation directly. Box metrics, content
//! measurement and display state are supplied through these traits so the same engine can
//! drive a DOM, a terminal grid or a test fixture.

use layouter_types::{Axis, NodeId};
use thiserror::Error;

/// Error type for content measurement.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MeasureError {
    #[error("Cannot measure content of node {node}: {message}")]
    Failed { node: NodeId, message: String },
}

/// Outer-minus-inner extents (margins, borders and padding) of a node's visual box.
pub trait BoxMetrics {
    /// The difference between the outer and inner extent of `node` along `axis`.
    fn delta(&self, node: NodeId, axis: Axis) -> f64;

    /// The inner width the node's visual box currently has, used when no width is configured.
    fn current_width(&self, node: NodeId) -> f64;
}

/// Measures how tall a node's content renders.
pub trait ContentMeasurer {
    /// Height of the content of `node` when laid out at `width` (inner), or at its natural
    /// width when `width` is `None`. Empty content measures `0`.
    fn measure_content_height(&self, node: NodeId, width: Option<f64>) -> Result<f64, MeasureError>;
}

/// Reports whether a node's own visual representation currently occupies space.
///
/// Only the node itself is considered; ancestor propagation is done by the engine.
pub trait DisplayState {
    fn is_visually_displayed(&self, node: NodeId) -> bool;
}
