use thiserror::Error;

pub use self::facet::Facet;
pub use self::node_kind::NodeKind;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum LayoutError {
    #[error("No {facet} calculator for node {node} of type {kind}.")]
    Unresolved {
        node: NodeId,
        facet: Facet,
        kind: NodeKind,
    },
    #[error(
        "Invalid weights under node {parent}: configured factors sum to {configured_sum:.3}, \
         leaving nothing for {unconfigured} unconfigured sibling(s)."
    )]
    InvalidWeights {
        parent: NodeId,
        configured_sum: f64,
        unconfigured: usize,
    },
    #[error("Node {node} has an absolute weight of {value:.2} but its parent's inner extent is {extent:.2}.")]
    InvalidAbsoluteWeight { node: NodeId, value: f64, extent: f64 },
    #[error("Cycle detected while resolving {facet} of node {node}.")]
    Cycle { node: NodeId, facet: Facet },
    #[error("Node {node} is marked both cropped and compound.")]
    ConflictingMarkers { node: NodeId },
    #[error("Node {node} needs a parent to resolve {facet}.")]
    MissingParent { node: NodeId, facet: Facet },
    #[error("{facet} of node {node} resolved to auto where a length is required.")]
    AutoExtent { node: NodeId, facet: Facet },
    #[error("Table {node} has displayed rows but no row height in its config or profile.")]
    MissingRowHeight { node: NodeId },
    #[error("Unknown node {0}.")]
    UnknownNode(NodeId),
    #[error("Tree of {len} nodes cannot take another; ids are limited to u32.")]
    TreeFull { len: usize },
    #[error("Measurement failed for node {node}: {source}")]
    Measure {
        node: NodeId,
        #[source]
        source: MeasureError,
    },
}

pub mod cache;
pub mod calculators;
pub mod config;
pub mod engine;
pub mod facet;
pub mod interface;
pub mod node_kind;
pub mod output;
pub mod perf;
pub mod tree;
pub mod util;
pub mod visibility;
pub mod weights;

pub mod algorithms;

pub use self::cache::{Invalidation, LayoutCache};
pub use self::calculators::{Calculator, CalculatorRegistry};
pub use self::config::LayoutConfig;
pub use self::engine::LayoutEngine;
pub use self::interface::{LayoutEnvironment, LayoutPass};
pub use self::output::{BoxGeometry, LaidOutTree, RenderBox};
pub use self::perf::{CountingProbe, NoOpProbe, PassProbe};
pub use self::tree::{FindScope, NodeData, NodeTree};

// Re-export foundation types used throughout the public API
pub use layouter_traits::{
    BoxDelta, BoxMetrics, Content, ContentMeasurer, DisplayState, MeasureError, StaticMetrics,
};
pub use layouter_types::{
    Axis, Extent, LayoutProfile, NodeConfig, NodeId, NodeMarkers, Positioning, ProfileOverrides,
};

#[cfg(test)]
mod test_utils;
