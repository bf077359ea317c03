//! The table root: sized from configuration or the collaborator, statically positioned.

use crate::LayoutError;
use crate::facet::Facet;
use crate::interface::LayoutPass;
use layouter_types::{Axis, Extent, NodeId};

/// The configured or profile width, else the box's current width.
pub fn width_final(pass: &LayoutPass<'_>, node: NodeId) -> Result<Extent, LayoutError> {
    let width = pass
        .overrides(node)
        .and_then(|o| o.width)
        .or(pass.profile().width)
        .unwrap_or_else(|| pass.current_width(node));
    Ok(Extent::Px(pass.outer(node, Axis::Horizontal, width)?))
}

/// An explicit height, else one row height per displayed row.
pub fn height_desired(pass: &LayoutPass<'_>, node: NodeId) -> Result<Extent, LayoutError> {
    let overrides = pass.overrides(node);
    let explicit = overrides
        .and_then(|o| o.height)
        .or(pass.profile().height);
    if let Some(height) = explicit {
        return Ok(Extent::Px(pass.outer(node, Axis::Vertical, height)?));
    }

    let rows = pass.displayed_children(node).len();
    if rows == 0 {
        return Ok(Extent::Px(pass.outer(node, Axis::Vertical, 0.0)?));
    }
    let row_height = overrides
        .and_then(|o| o.row_height)
        .or(pass.profile().row_height)
        .ok_or(LayoutError::MissingRowHeight { node })?;
    Ok(Extent::Px(pass.outer(node, Axis::Vertical, row_height * rows as f64)?))
}

pub fn height_final(pass: &LayoutPass<'_>, node: NodeId) -> Result<Extent, LayoutError> {
    let desired = pass.length(node, Facet::HeightDesired)?;
    let required = pass.length(node, Facet::HeightRequired)?;
    Ok(Extent::Px(desired.max(required)))
}
