pub mod config;
pub mod geometry;
pub mod ids;

pub use config::{LayoutProfile, NodeConfig, NodeMarkers, ProfileOverrides, Weight};
pub use geometry::{Axis, Extent, Positioning};
pub use ids::NodeId;
