//! Rows stack vertically inside a table or compound column and span its full inner width.

use crate::LayoutError;
use crate::facet::Facet;
use crate::interface::LayoutPass;
use crate::weights;
use layouter_types::{Axis, Extent, NodeId};

pub fn width_final(pass: &LayoutPass<'_>, node: NodeId) -> Result<Extent, LayoutError> {
    let parent = pass.parent_for(node, Facet::WidthFinal)?;
    Ok(Extent::Px(pass.inner_length(parent, Facet::WidthFinal)?))
}

pub fn height_factor(pass: &LayoutPass<'_>, node: NodeId) -> Result<Extent, LayoutError> {
    Ok(Extent::Px(weights::resolve_factor(pass, node, Axis::Vertical)?))
}

/// The row's share of its parent's desired inner height.
pub fn height_desired(pass: &LayoutPass<'_>, node: NodeId) -> Result<Extent, LayoutError> {
    let parent = pass.parent_for(node, Facet::HeightDesired)?;
    let factor = pass.length(node, Facet::HeightFactor)?;
    Ok(Extent::Px(pass.inner_length(parent, Facet::HeightDesired)? * factor))
}

/// The desired height, grown to fit the tallest displayed column.
pub fn height_required(pass: &LayoutPass<'_>, node: NodeId) -> Result<Extent, LayoutError> {
    let mut required = pass.length(node, Facet::HeightDesired)?;
    for child in pass.displayed_children(node) {
        let child_required = pass.length(child, Facet::HeightRequired)?;
        if child_required > pass.inner(node, Axis::Vertical, required)? {
            required = pass.outer(node, Axis::Vertical, child_required)?;
        }
    }
    Ok(Extent::Px(required))
}

/// The balanced share of the parent, or the required height if larger.
pub fn height_final(pass: &LayoutPass<'_>, node: NodeId) -> Result<Extent, LayoutError> {
    let parent = pass.parent_for(node, Facet::HeightFinal)?;
    let factor = pass.length(node, Facet::HeightFactor)?;
    let balanced = pass.inner_length(parent, Facet::HeightBalanced)? * factor;
    let required = pass.length(node, Facet::HeightRequired)?;
    Ok(Extent::Px(required.max(balanced)))
}
