//! Layout profiles and per-node configuration.
//!
//! A *profile* is a named layout variant (e.g. "wide", "narrow") selected by the caller for
//! each pass. Nodes may carry overrides keyed by profile name.

use crate::geometry::Axis;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Per-node overrides for a single profile.
///
/// `width`/`height` are weights: values up to the absolute threshold (normally `1.0`) are
/// factors of the parent's inner extent, larger values are absolute lengths.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct ProfileOverrides {
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub row_height: Option<f64>,
}

impl ProfileOverrides {
    /// The configured weight along `axis`, if any.
    pub fn weight(&self, axis: Axis) -> Option<f64> {
        match axis {
            Axis::Horizontal => self.width,
            Axis::Vertical => self.height,
        }
    }
}

/// Mapping from profile name to that profile's overrides.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
#[serde(transparent)]
pub struct NodeConfig {
    profiles: BTreeMap<String, ProfileOverrides>,
}

impl NodeConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_profile(mut self, name: impl Into<String>, overrides: ProfileOverrides) -> Self {
        self.profiles.insert(name.into(), overrides);
        self
    }

    pub fn profile(&self, name: &str) -> Option<&ProfileOverrides> {
        self.profiles.get(name)
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}

/// The layout profile selected by the caller for a pass.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct LayoutProfile {
    pub name: String,
    /// Explicit table width, used when the table node has no width override.
    pub width: Option<f64>,
    /// Explicit table height, used when the table node has no height override.
    pub height: Option<f64>,
    pub row_height: Option<f64>,
    /// Stacked single-column flow instead of the positioned grid.
    #[serde(alias = "breakColumns")]
    pub breaking: bool,
    /// Hint for the renderer; the engine itself never animates.
    pub animate: bool,
}

impl LayoutProfile {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_row_height(mut self, row_height: f64) -> Self {
        self.row_height = Some(row_height);
        self
    }

    pub fn with_width(mut self, width: f64) -> Self {
        self.width = Some(width);
        self
    }

    pub fn with_height(mut self, height: f64) -> Self {
        self.height = Some(height);
        self
    }

    pub fn breaking(mut self, breaking: bool) -> Self {
        self.breaking = breaking;
        self
    }
}

/// A configured weight, classified against the absolute threshold.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Weight {
    /// Share of the parent's inner extent, in `(0, 1]`.
    Factor(f64),
    /// Absolute target length.
    Absolute(f64),
}

impl Weight {
    /// Classifies a raw configured value. Non-positive and non-finite values are not weights.
    pub fn classify(raw: f64, absolute_threshold: f64) -> Option<Weight> {
        if !raw.is_finite() || raw <= 0.0 {
            None
        } else if raw > absolute_threshold {
            Some(Weight::Absolute(raw))
        } else {
            Some(Weight::Factor(raw))
        }
    }
}

/// Static markers supplied by the tree builder; the classifier reads nothing else.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(default)]
pub struct NodeMarkers {
    pub table: bool,
    pub row: bool,
    pub column: bool,
    pub cropped: bool,
    /// Vertically center the node's content inside its final height.
    pub align: bool,
}

impl NodeMarkers {
    pub fn table() -> Self {
        Self {
            table: true,
            ..Default::default()
        }
    }

    pub fn row() -> Self {
        Self {
            row: true,
            ..Default::default()
        }
    }

    pub fn column() -> Self {
        Self {
            column: true,
            ..Default::default()
        }
    }

    pub fn cropped_column() -> Self {
        Self {
            column: true,
            cropped: true,
            ..Default::default()
        }
    }

    pub fn aligned(mut self) -> Self {
        self.align = true;
        self
    }
}
