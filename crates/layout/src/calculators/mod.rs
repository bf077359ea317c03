//! Per-type calculator records.
//!
//! Each node kind is sized by a [`Calculator`]: a record of facet functions plus inner/outer
//! conversions. Records are composed from a shared skeleton (`BASE`) with named overrides and
//! resolved at compile time. A facet without a function is *unresolved*: reading it is an
//! error, never a silent zero.

pub mod base;
pub mod breaking;
pub mod column;
pub mod compound;
pub mod row;
pub mod table;

use crate::LayoutError;
use crate::facet::Facet;
use crate::interface::LayoutPass;
use crate::node_kind::NodeKind;
use layouter_types::{Extent, NodeId, Positioning};
use std::fmt;

/// Computes one facet of a node.
pub type ExtentFn = fn(&LayoutPass<'_>, NodeId) -> Result<Extent, LayoutError>;
/// Converts a length of a node between its outer and inner extent.
pub type ConvertFn = fn(&LayoutPass<'_>, NodeId, f64) -> Result<f64, LayoutError>;
pub type PositioningFn = fn(&LayoutPass<'_>, NodeId) -> Result<Positioning, LayoutError>;

#[derive(Clone, Copy)]
pub struct WidthCalculators {
    pub final_width: Option<ExtentFn>,
    pub percent: Option<ExtentFn>,
    pub factor: Option<ExtentFn>,
    pub delta: Option<ExtentFn>,
    pub inner: ConvertFn,
    pub outer: ConvertFn,
}

#[derive(Clone, Copy)]
pub struct HeightCalculators {
    pub desired: Option<ExtentFn>,
    pub required: Option<ExtentFn>,
    pub balanced: Option<ExtentFn>,
    pub final_height: Option<ExtentFn>,
    pub factor: Option<ExtentFn>,
    pub delta: Option<ExtentFn>,
    pub inner: ConvertFn,
    pub outer: ConvertFn,
}

#[derive(Clone, Copy)]
pub struct PositionCalculators {
    pub left: Option<ExtentFn>,
    pub left_percent: Option<ExtentFn>,
}

#[derive(Clone, Copy)]
pub struct Calculator {
    pub kind: NodeKind,
    pub width: WidthCalculators,
    pub height: HeightCalculators,
    pub position: PositionCalculators,
    pub positioning: Option<PositioningFn>,
}

impl Calculator {
    /// The function computing `facet`, if this calculator implements it.
    pub fn extent_fn(&self, facet: Facet) -> Option<ExtentFn> {
        match facet {
            Facet::WidthFinal => self.width.final_width,
            Facet::WidthPercent => self.width.percent,
            Facet::WidthFactor => self.width.factor,
            Facet::WidthDelta => self.width.delta,
            Facet::HeightDesired => self.height.desired,
            Facet::HeightRequired => self.height.required,
            Facet::HeightBalanced => self.height.balanced,
            Facet::HeightFinal => self.height.final_height,
            Facet::HeightFactor => self.height.factor,
            Facet::HeightDelta => self.height.delta,
            Facet::Left => self.position.left,
            Facet::LeftPercent => self.position.left_percent,
            Facet::Positioning => None,
        }
    }

    pub fn implements(&self, facet: Facet) -> bool {
        match facet {
            Facet::Positioning => self.positioning.is_some(),
            _ => self.extent_fn(facet).is_some(),
        }
    }
}

impl fmt::Debug for Calculator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let implemented: Vec<&str> = Facet::ALL
            .iter()
            .filter(|facet| self.implements(**facet))
            .map(Facet::as_str)
            .collect();
        f.debug_struct("Calculator")
            .field("kind", &self.kind)
            .field("implemented", &implemented)
            .finish()
    }
}

// --- Calculator records ---

/// The skeleton: box-metric deltas and conversions only; every sizing facet is unresolved.
pub const BASE: Calculator = Calculator {
    kind: NodeKind::Auto,
    width: WidthCalculators {
        final_width: None,
        percent: None,
        factor: None,
        delta: Some(base::width_delta as ExtentFn),
        inner: base::width_inner,
        outer: base::width_outer,
    },
    height: HeightCalculators {
        desired: None,
        required: None,
        balanced: None,
        final_height: None,
        factor: None,
        delta: Some(base::height_delta as ExtentFn),
        inner: base::height_inner,
        outer: base::height_outer,
    },
    position: PositionCalculators {
        left: None,
        left_percent: None,
    },
    positioning: None,
};

pub const ROW: Calculator = Calculator {
    kind: NodeKind::Row,
    width: WidthCalculators {
        final_width: Some(row::width_final as ExtentFn),
        percent: Some(base::full_percent as ExtentFn),
        ..BASE.width
    },
    height: HeightCalculators {
        desired: Some(row::height_desired as ExtentFn),
        required: Some(row::height_required as ExtentFn),
        final_height: Some(row::height_final as ExtentFn),
        factor: Some(row::height_factor as ExtentFn),
        ..BASE.height
    },
    position: PositionCalculators {
        left: Some(base::zero as ExtentFn),
        left_percent: Some(base::zero as ExtentFn),
    },
    positioning: Some(base::relative as PositioningFn),
};

pub const COLUMN: Calculator = Calculator {
    kind: NodeKind::Column,
    width: WidthCalculators {
        final_width: Some(column::width_final as ExtentFn),
        percent: Some(column::width_percent as ExtentFn),
        factor: Some(column::width_factor as ExtentFn),
        ..BASE.width
    },
    height: HeightCalculators {
        desired: Some(column::height_desired as ExtentFn),
        required: Some(column::height_required as ExtentFn),
        final_height: Some(column::height_final as ExtentFn),
        ..BASE.height
    },
    position: PositionCalculators {
        left: Some(column::left as ExtentFn),
        left_percent: Some(column::left_percent as ExtentFn),
    },
    positioning: Some(base::absolute as PositioningFn),
};

pub const CROPPED: Calculator = Calculator {
    kind: NodeKind::Cropped,
    height: HeightCalculators {
        required: Some(column::height_required_cropped as ExtentFn),
        ..COLUMN.height
    },
    ..COLUMN
};

pub const COMPOUND: Calculator = Calculator {
    kind: NodeKind::Compound,
    height: HeightCalculators {
        required: Some(compound::height_required as ExtentFn),
        balanced: Some(compound::height_balanced as ExtentFn),
        ..COLUMN.height
    },
    ..COLUMN
};

pub const TABLE: Calculator = Calculator {
    kind: NodeKind::Table,
    width: WidthCalculators {
        final_width: Some(table::width_final as ExtentFn),
        percent: Some(base::full_percent as ExtentFn),
        factor: Some(base::unit_factor as ExtentFn),
        ..COMPOUND.width
    },
    height: HeightCalculators {
        desired: Some(table::height_desired as ExtentFn),
        final_height: Some(table::height_final as ExtentFn),
        factor: Some(base::unit_factor as ExtentFn),
        ..COMPOUND.height
    },
    position: PositionCalculators {
        left: Some(base::zero as ExtentFn),
        left_percent: Some(base::zero as ExtentFn),
    },
    positioning: Some(base::fixed_static as PositioningFn),
};

pub const BREAKING_COLUMN: Calculator = Calculator {
    kind: NodeKind::BreakingColumn,
    width: WidthCalculators {
        final_width: Some(base::auto as ExtentFn),
        percent: Some(base::auto as ExtentFn),
        ..BASE.width
    },
    height: HeightCalculators {
        desired: Some(breaking::height_desired as ExtentFn),
        required: Some(breaking::height_required as ExtentFn),
        final_height: Some(breaking::height_final as ExtentFn),
        factor: Some(breaking::height_factor as ExtentFn),
        ..BASE.height
    },
    position: PositionCalculators {
        left: Some(base::zero as ExtentFn),
        left_percent: Some(base::zero as ExtentFn),
    },
    positioning: Some(base::fixed_static as PositioningFn),
};

pub const BREAKING_CROPPED: Calculator = Calculator {
    kind: NodeKind::BreakingCropped,
    height: HeightCalculators {
        final_height: Some(breaking::height_final_cropped as ExtentFn),
        ..BREAKING_COLUMN.height
    },
    ..BREAKING_COLUMN
};

/// Containers in breaking mode: the renderer sizes them.
pub const AUTO: Calculator = Calculator {
    kind: NodeKind::Auto,
    width: WidthCalculators {
        final_width: Some(base::auto as ExtentFn),
        ..BASE.width
    },
    height: HeightCalculators {
        final_height: Some(base::auto as ExtentFn),
        ..BASE.height
    },
    position: PositionCalculators {
        left: Some(base::zero as ExtentFn),
        left_percent: Some(base::zero as ExtentFn),
    },
    positioning: Some(base::fixed_static as PositioningFn),
};

/// Maps every [`NodeKind`] to its calculator.
#[derive(Debug, Clone)]
pub struct CalculatorRegistry {
    calculators: [Calculator; NodeKind::COUNT],
}

impl CalculatorRegistry {
    /// The built-in composite-table calculators.
    pub fn standard() -> Self {
        // Indexed by `NodeKind::index`.
        Self {
            calculators: [
                TABLE,
                ROW,
                COLUMN,
                CROPPED,
                COMPOUND,
                BREAKING_COLUMN,
                BREAKING_CROPPED,
                AUTO,
            ],
        }
    }

    pub fn get(&self, kind: NodeKind) -> &Calculator {
        &self.calculators[kind.index()]
    }

    /// Replaces the calculator registered for `calculator.kind`.
    pub fn with(mut self, calculator: Calculator) -> Self {
        self.calculators[calculator.kind.index()] = calculator;
        self
    }
}

impl Default for CalculatorRegistry {
    fn default() -> Self {
        Self::standard()
    }
}
