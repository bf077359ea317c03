//! Leaf and cropped columns, positioned side by side inside a row.

use crate::LayoutError;
use crate::facet::Facet;
use crate::interface::LayoutPass;
use crate::weights;
use layouter_types::{Axis, Extent, NodeId};

pub fn width_factor(pass: &LayoutPass<'_>, node: NodeId) -> Result<Extent, LayoutError> {
    Ok(Extent::Px(weights::resolve_factor(pass, node, Axis::Horizontal)?))
}

pub fn width_final(pass: &LayoutPass<'_>, node: NodeId) -> Result<Extent, LayoutError> {
    let parent = pass.parent_for(node, Facet::WidthFinal)?;
    let factor = pass.length(node, Facet::WidthFactor)?;
    Ok(Extent::Px(pass.inner_length(parent, Facet::WidthFinal)? * factor))
}

pub fn width_percent(pass: &LayoutPass<'_>, node: NodeId) -> Result<Extent, LayoutError> {
    Ok(Extent::Px(100.0 * pass.length(node, Facet::WidthFactor)?))
}

pub fn height_desired(pass: &LayoutPass<'_>, node: NodeId) -> Result<Extent, LayoutError> {
    let parent = pass.parent_for(node, Facet::HeightDesired)?;
    Ok(Extent::Px(pass.inner_length(parent, Facet::HeightDesired)?))
}

/// The content height measured at the column's inner width.
pub fn height_required(pass: &LayoutPass<'_>, node: NodeId) -> Result<Extent, LayoutError> {
    let width = pass.inner_length(node, Facet::WidthFinal)?;
    let content = pass.measure(node, Some(width))?;
    Ok(Extent::Px(pass.outer(node, Axis::Vertical, content)?))
}

/// Cropped columns never ask for more than their share; overflowing content is clipped.
pub fn height_required_cropped(pass: &LayoutPass<'_>, node: NodeId) -> Result<Extent, LayoutError> {
    pass.extent(node, Facet::HeightDesired)
}

pub fn height_final(pass: &LayoutPass<'_>, node: NodeId) -> Result<Extent, LayoutError> {
    let parent = pass.parent_for(node, Facet::HeightFinal)?;
    Ok(Extent::Px(pass.inner_length(parent, Facet::HeightFinal)?))
}

pub fn left(pass: &LayoutPass<'_>, node: NodeId) -> Result<Extent, LayoutError> {
    preceding_sum(pass, node, Facet::WidthFinal)
}

pub fn left_percent(pass: &LayoutPass<'_>, node: NodeId) -> Result<Extent, LayoutError> {
    preceding_sum(pass, node, Facet::WidthPercent)
}

/// Sum of `facet` over the displayed siblings before `node`.
fn preceding_sum(pass: &LayoutPass<'_>, node: NodeId, facet: Facet) -> Result<Extent, LayoutError> {
    let mut offset = 0.0;
    for sibling in pass.displayed_siblings(node) {
        if sibling == node {
            break;
        }
        offset += pass.length(sibling, facet)?;
    }
    Ok(Extent::Px(offset))
}
