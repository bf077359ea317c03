//! Stacked-layout columns used while breaking mode is active.
//!
//! Columns flow statically one below the other at their natural width; each is as tall as its
//! content, but at least one row height.

use crate::LayoutError;
use crate::facet::Facet;
use crate::interface::LayoutPass;
use layouter_types::{Axis, Extent, NodeId};

pub fn height_desired(pass: &LayoutPass<'_>, node: NodeId) -> Result<Extent, LayoutError> {
    let desired = pass
        .overrides(node)
        .and_then(|o| o.row_height)
        .or(pass.profile().row_height)
        .or(pass.profile().height)
        .unwrap_or(0.0);
    Ok(Extent::Px(desired))
}

pub fn height_required(pass: &LayoutPass<'_>, node: NodeId) -> Result<Extent, LayoutError> {
    let content = pass.measure(node, None)?;
    Ok(Extent::Px(pass.outer(node, Axis::Vertical, content)?))
}

pub fn height_final(pass: &LayoutPass<'_>, node: NodeId) -> Result<Extent, LayoutError> {
    let required = pass.length(node, Facet::HeightRequired)?;
    let desired = pass.length(node, Facet::HeightDesired)?;
    Ok(Extent::Px(required.max(desired)))
}

pub fn height_final_cropped(pass: &LayoutPass<'_>, node: NodeId) -> Result<Extent, LayoutError> {
    pass.extent(node, Facet::HeightDesired)
}

/// Stacked columns only keep a configured factor; there are no siblings to share with.
pub fn height_factor(pass: &LayoutPass<'_>, node: NodeId) -> Result<Extent, LayoutError> {
    let factor = pass
        .overrides(node)
        .and_then(|o| o.height)
        .filter(|&h| h > 0.0 && h <= pass.config().absolute_weight_threshold)
        .unwrap_or(1.0);
    Ok(Extent::Px(factor))
}
