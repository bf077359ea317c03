//! An in-memory collaborator.
//!
//! Box metrics, current widths, content and visibility are pre-populated before a pass.
//! This is what the JSON document front end and the test suites lay out against.

use crate::metrics::{BoxMetrics, ContentMeasurer, DisplayState, MeasureError};
use layouter_types::{Axis, NodeId};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// Outer-minus-inner extents for both axes.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, Default, PartialEq)]
#[serde(default)]
pub struct BoxDelta {
    pub horizontal: f64,
    pub vertical: f64,
}

impl BoxDelta {
    pub fn uniform(value: f64) -> Self {
        Self {
            horizontal: value,
            vertical: value,
        }
    }
}

/// Description of a node's content, standing in for a real render-and-measure.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub enum Content {
    #[default]
    Empty,
    /// Content of a fixed height regardless of width.
    Fixed(f64),
    /// Content that reflows: its height is `area / width`, rounded up to whole pixels.
    #[serde(rename_all = "camelCase")]
    Flow { area: f64, natural_width: f64 },
}

#[derive(Debug, Default, Clone)]
pub struct StaticMetrics {
    deltas: HashMap<NodeId, BoxDelta>,
    widths: HashMap<NodeId, f64>,
    content: HashMap<NodeId, Content>,
    hidden: HashSet<NodeId>,
}

impl StaticMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_delta(&mut self, node: NodeId, delta: BoxDelta) -> &mut Self {
        self.deltas.insert(node, delta);
        self
    }

    pub fn set_current_width(&mut self, node: NodeId, width: f64) -> &mut Self {
        self.widths.insert(node, width);
        self
    }

    pub fn set_content(&mut self, node: NodeId, content: Content) -> &mut Self {
        self.content.insert(node, content);
        self
    }

    pub fn content(&self, node: NodeId) -> Content {
        self.content.get(&node).copied().unwrap_or_default()
    }

    pub fn hide(&mut self, node: NodeId) -> &mut Self {
        self.hidden.insert(node);
        self
    }

    pub fn show(&mut self, node: NodeId) -> &mut Self {
        self.hidden.remove(&node);
        self
    }
}

impl BoxMetrics for StaticMetrics {
    fn delta(&self, node: NodeId, axis: Axis) -> f64 {
        let delta = self.deltas.get(&node).copied().unwrap_or_default();
        match axis {
            Axis::Horizontal => delta.horizontal,
            Axis::Vertical => delta.vertical,
        }
    }

    fn current_width(&self, node: NodeId) -> f64 {
        self.widths.get(&node).copied().unwrap_or(0.0)
    }
}

impl ContentMeasurer for StaticMetrics {
    fn measure_content_height(&self, node: NodeId, width: Option<f64>) -> Result<f64, MeasureError> {
        match self.content(node) {
            Content::Empty => Ok(0.0),
            Content::Fixed(height) => Ok(height),
            Content::Flow { area, natural_width } => {
                let width = width.unwrap_or(natural_width);
                if width <= 0.0 {
                    return Err(MeasureError::Failed {
                        node,
                        message: format!("flowing content needs a positive width, got {width:.2}"),
                    });
                }
                Ok((area / width).ceil())
            }
        }
    }
}

impl DisplayState for StaticMetrics {
    fn is_visually_displayed(&self, node: NodeId) -> bool {
        !self.hidden.contains(&node)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flow_content_reflows_with_width() {
        let node = NodeId::new(3);
        let mut metrics = StaticMetrics::new();
        metrics.set_content(
            node,
            Content::Flow {
                area: 10_000.0,
                natural_width: 400.0,
            },
        );

        assert_eq!(metrics.measure_content_height(node, Some(100.0)), Ok(100.0));
        assert_eq!(metrics.measure_content_height(node, Some(300.0)), Ok(34.0));
        assert_eq!(metrics.measure_content_height(node, None), Ok(25.0));
        assert!(metrics.measure_content_height(node, Some(0.0)).is_err());
    }

    #[test]
    fn unknown_nodes_are_empty_and_displayed() {
        let metrics = StaticMetrics::new();
        let node = NodeId::new(7);
        assert_eq!(metrics.measure_content_height(node, Some(50.0)), Ok(0.0));
        assert_eq!(metrics.delta(node, Axis::Vertical), 0.0);
        assert!(metrics.is_visually_displayed(node));
    }

    #[test]
    fn hide_and_show_toggle_display() {
        let node = NodeId::new(1);
        let mut metrics = StaticMetrics::new();
        metrics.hide(node);
        assert!(!metrics.is_visually_displayed(node));
        metrics.show(node);
        assert!(metrics.is_visually_displayed(node));
    }

    #[test]
    fn content_deserializes_from_json() {
        let fixed: Content = serde_json::from_str(r#"{ "fixed": 42 }"#).unwrap();
        assert_eq!(fixed, Content::Fixed(42.0));
        let flow: Content =
            serde_json::from_str(r#"{ "flow": { "area": 900, "naturalWidth": 30 } }"#).unwrap();
        assert_eq!(
            flow,
            Content::Flow {
                area: 900.0,
                natural_width: 30.0
            }
        );
        let empty: Content = serde_json::from_str(r#""empty""#).unwrap();
        assert_eq!(empty, Content::Empty);
    }
}
