//! Names of the memoized layout values ("facets") every node exposes.

use layouter_types::Axis;
use std::fmt;

/// A single memoized layout value of a node.
///
/// Every facet except [`Facet::Positioning`] resolves to an [`Extent`](layouter_types::Extent).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Facet {
    WidthFinal,
    WidthPercent,
    WidthFactor,
    WidthDelta,
    HeightDesired,
    HeightRequired,
    HeightBalanced,
    HeightFinal,
    HeightFactor,
    HeightDelta,
    Left,
    LeftPercent,
    Positioning,
}

impl Facet {
    pub const COUNT: usize = 13;

    pub const ALL: [Facet; Facet::COUNT] = [
        Facet::WidthFinal,
        Facet::WidthPercent,
        Facet::WidthFactor,
        Facet::WidthDelta,
        Facet::HeightDesired,
        Facet::HeightRequired,
        Facet::HeightBalanced,
        Facet::HeightFinal,
        Facet::HeightFactor,
        Facet::HeightDelta,
        Facet::Left,
        Facet::LeftPercent,
        Facet::Positioning,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    /// The axis whose inner/outer conversion applies to this facet, if any.
    pub fn axis(self) -> Option<Axis> {
        match self {
            Facet::WidthFinal | Facet::WidthPercent | Facet::WidthFactor | Facet::WidthDelta => {
                Some(Axis::Horizontal)
            }
            Facet::HeightDesired
            | Facet::HeightRequired
            | Facet::HeightBalanced
            | Facet::HeightFinal
            | Facet::HeightFactor
            | Facet::HeightDelta => Some(Axis::Vertical),
            Facet::Left | Facet::LeftPercent => Some(Axis::Horizontal),
            Facet::Positioning => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Facet::WidthFinal => "width.final",
            Facet::WidthPercent => "width.percent",
            Facet::WidthFactor => "width.factor",
            Facet::WidthDelta => "width.delta",
            Facet::HeightDesired => "height.desired",
            Facet::HeightRequired => "height.required",
            Facet::HeightBalanced => "height.balanced",
            Facet::HeightFinal => "height.final",
            Facet::HeightFactor => "height.factor",
            Facet::HeightDelta => "height.delta",
            Facet::Left => "position.left",
            Facet::LeftPercent => "position.left_percent",
            Facet::Positioning => "positioning",
        }
    }
}

impl fmt::Display for Facet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
