//! Composite-table layout: weighted rows and columns whose heights grow to fit their content.
//!
//! The algorithm lives in `layouter-layout`; this crate adds a JSON document format that
//! describes a tree together with its box metrics and content, and the `layouter` CLI.

pub mod document;
pub mod error;

pub use document::{LayoutDocument, LayoutOptions, NodeSpec, layout_document};
pub use error::PipelineError;

pub use layouter_layout::{
    BoxGeometry, CalculatorRegistry, CountingProbe, Facet, FindScope, Invalidation, LaidOutTree,
    LayoutConfig, LayoutEngine, LayoutEnvironment, LayoutError, LayoutPass, NodeData, NodeKind,
    NodeTree, RenderBox,
};
pub use layouter_traits::{BoxDelta, Content, StaticMetrics};
pub use layouter_types::{
    Axis, Extent, LayoutProfile, NodeConfig, NodeId, NodeMarkers, Positioning, ProfileOverrides,
};
