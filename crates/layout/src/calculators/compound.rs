//! Columns that hold nested rows, and the table root that shares their height logic.

use crate::LayoutError;
use crate::algorithms::balance::{self, RowShare};
use crate::facet::Facet;
use crate::interface::LayoutPass;
use layouter_types::{Extent, NodeId};

/// The desired height plus every displayed row's excess over its own desired height.
pub fn height_required(pass: &LayoutPass<'_>, node: NodeId) -> Result<Extent, LayoutError> {
    let mut required = pass.length(node, Facet::HeightDesired)?;
    for row in pass.displayed_children(node) {
        let row_required = pass.length(row, Facet::HeightRequired)?;
        let row_desired = pass.length(row, Facet::HeightDesired)?;
        if row_required > row_desired {
            required += row_required - row_desired;
        }
    }
    Ok(Extent::Px(required))
}

/// The reference height non-excessive rows take their share of.
pub fn height_balanced(pass: &LayoutPass<'_>, node: NodeId) -> Result<Extent, LayoutError> {
    let final_height = pass.length(node, Facet::HeightFinal)?;
    let rows = pass.displayed_children(node);
    if rows.len() <= 1 {
        return Ok(Extent::Px(final_height));
    }

    let shares = rows
        .iter()
        .map(|&row| {
            Ok(RowShare::new(
                pass.length(row, Facet::HeightDesired)?,
                pass.length(row, Facet::HeightRequired)?,
                pass.length(row, Facet::HeightFactor)?,
            ))
        })
        .collect::<Result<Vec<_>, LayoutError>>()?;

    let outcome = balance::balance(final_height, &shares, pass.config().weight_tolerance);
    if !outcome.steps.is_empty() {
        log::debug!(
            "Balanced {} from {:.2} to {:.2} after {} excessive row(s) (converged: {})",
            node,
            final_height,
            outcome.balanced,
            outcome.steps.len(),
            outcome.converged
        );
    }
    Ok(Extent::Px(outcome.balanced))
}
