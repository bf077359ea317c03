//! Facet functions shared by several calculators.

use crate::LayoutError;
use crate::facet::Facet;
use crate::interface::LayoutPass;
use layouter_types::{Axis, Extent, NodeId, Positioning};

pub fn width_delta(pass: &LayoutPass<'_>, node: NodeId) -> Result<Extent, LayoutError> {
    Ok(Extent::Px(pass.box_delta(node, Axis::Horizontal)))
}

pub fn height_delta(pass: &LayoutPass<'_>, node: NodeId) -> Result<Extent, LayoutError> {
    Ok(Extent::Px(pass.box_delta(node, Axis::Vertical)))
}

pub fn width_inner(pass: &LayoutPass<'_>, node: NodeId, width: f64) -> Result<f64, LayoutError> {
    Ok(width - pass.length(node, Facet::WidthDelta)?)
}

pub fn width_outer(pass: &LayoutPass<'_>, node: NodeId, width: f64) -> Result<f64, LayoutError> {
    Ok(width + pass.length(node, Facet::WidthDelta)?)
}

pub fn height_inner(pass: &LayoutPass<'_>, node: NodeId, height: f64) -> Result<f64, LayoutError> {
    Ok(height - pass.length(node, Facet::HeightDelta)?)
}

pub fn height_outer(pass: &LayoutPass<'_>, node: NodeId, height: f64) -> Result<f64, LayoutError> {
    Ok(height + pass.length(node, Facet::HeightDelta)?)
}

pub fn zero(_pass: &LayoutPass<'_>, _node: NodeId) -> Result<Extent, LayoutError> {
    Ok(Extent::Px(0.0))
}

pub fn full_percent(_pass: &LayoutPass<'_>, _node: NodeId) -> Result<Extent, LayoutError> {
    Ok(Extent::Px(100.0))
}

pub fn unit_factor(_pass: &LayoutPass<'_>, _node: NodeId) -> Result<Extent, LayoutError> {
    Ok(Extent::Px(1.0))
}

pub fn auto(_pass: &LayoutPass<'_>, _node: NodeId) -> Result<Extent, LayoutError> {
    Ok(Extent::Auto)
}

pub fn fixed_static(_pass: &LayoutPass<'_>, _node: NodeId) -> Result<Positioning, LayoutError> {
    Ok(Positioning::Static)
}

pub fn relative(_pass: &LayoutPass<'_>, _node: NodeId) -> Result<Positioning, LayoutError> {
    Ok(Positioning::Relative)
}

pub fn absolute(_pass: &LayoutPass<'_>, _node: NodeId) -> Result<Positioning, LayoutError> {
    Ok(Positioning::Absolute)
}
