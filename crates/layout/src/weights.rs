//! Proportional weight ("factor") resolution.
//!
//! A factor is the share of the parent's inner extent a node occupies along one axis. Siblings
//! with a configured weight keep it (absolute weights are converted against the parent's inner
//! extent); the remaining weight is split evenly among the unconfigured displayed siblings.

use crate::LayoutError;
use crate::facet::Facet;
use crate::interface::LayoutPass;
use layouter_types::{Axis, NodeId, Weight};

/// Resolves the factor of `node` along `axis` among its displayed siblings.
///
/// Hidden nodes have a factor of `0`.
pub fn resolve_factor(pass: &LayoutPass<'_>, node: NodeId, axis: Axis) -> Result<f64, LayoutError> {
    if !pass.is_displayed(node) {
        return Ok(0.0);
    }
    if let Some(factor) = configured_factor(pass, node, axis)? {
        return Ok(factor);
    }

    let siblings = pass.displayed_siblings(node);
    let mut configured_sum = 0.0;
    let mut configured = 0;
    for &sibling in &siblings {
        if let Some(factor) = configured_factor(pass, sibling, axis)? {
            configured_sum += factor;
            configured += 1;
        }
    }

    // `node` itself is displayed and unconfigured, so this is at least one.
    let unconfigured = siblings.len() - configured;
    let remaining = 1.0 - configured_sum;
    if remaining <= pass.config().weight_tolerance {
        return Err(LayoutError::InvalidWeights {
            parent: pass.tree().parent(node).unwrap_or(node),
            configured_sum,
            unconfigured,
        });
    }
    Ok(remaining / unconfigured as f64)
}

/// The factor `node` has from its own configuration for the active profile, if any.
pub fn configured_factor(
    pass: &LayoutPass<'_>,
    node: NodeId,
    axis: Axis,
) -> Result<Option<f64>, LayoutError> {
    let Some(raw) = pass.overrides(node).and_then(|o| o.weight(axis)) else {
        return Ok(None);
    };
    match Weight::classify(raw, pass.config().absolute_weight_threshold) {
        None => {
            log::warn!(
                "Ignoring non-positive {} weight {} on node {}",
                axis.as_str(),
                raw,
                node
            );
            Ok(None)
        }
        Some(Weight::Factor(factor)) => Ok(Some(factor)),
        Some(Weight::Absolute(value)) => {
            let facet = match axis {
                Axis::Horizontal => Facet::WidthFinal,
                Axis::Vertical => Facet::HeightDesired,
            };
            let parent = pass.parent_for(node, facet)?;
            let extent = pass.inner_length(parent, facet)?;
            if extent <= 0.0 {
                return Err(LayoutError::InvalidAbsoluteWeight {
                    node,
                    value,
                    extent,
                });
            }
            Ok(Some(value / extent))
        }
    }
}
