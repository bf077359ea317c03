pub mod in_memory;
pub mod metrics;

pub use in_memory::{BoxDelta, Content, StaticMetrics};
pub use metrics::{BoxMetrics, ContentMeasurer, DisplayState, MeasureError};
