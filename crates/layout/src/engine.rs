use crate::LayoutError;
use crate::cache::{Invalidation, LayoutCache};
use crate::calculators::CalculatorRegistry;
use crate::config::LayoutConfig;
use crate::facet::Facet;
use crate::interface::{LayoutEnvironment, LayoutPass};
use crate::output::{BoxGeometry, LaidOutTree, RenderBox};
use crate::perf::{NoOpProbe, PassProbe};
use crate::tree::NodeTree;
use layouter_types::{Axis, Extent, LayoutProfile, NodeId};
use std::cell::{Ref, RefCell};
use std::sync::Arc;

/// Owns a node tree and the facet cache of its current layout pass.
pub struct LayoutEngine {
    tree: NodeTree,
    registry: CalculatorRegistry,
    config: LayoutConfig,
    cache: RefCell<LayoutCache>,
    filled_by: RefCell<Option<PassKey>>,
    probe: Arc<dyn PassProbe>,
}

/// Identifies the environment whose values currently sit in the cache.
#[derive(Debug, Clone, PartialEq)]
struct PassKey {
    profile: LayoutProfile,
    metrics: usize,
    measurer: usize,
    display: usize,
}

impl PassKey {
    fn of(env: &LayoutEnvironment<'_>) -> Self {
        Self {
            profile: env.profile.clone(),
            metrics: address(env.metrics),
            measurer: address(env.measurer),
            display: address(env.display),
        }
    }
}

fn address<T: ?Sized>(value: &T) -> usize {
    (value as *const T).cast::<()>() as usize
}

impl LayoutEngine {
    pub fn new(tree: NodeTree, config: LayoutConfig) -> Self {
        let cache = LayoutCache::new(tree.len());
        Self {
            tree,
            registry: CalculatorRegistry::standard(),
            config,
            cache: RefCell::new(cache),
            filled_by: RefCell::new(None),
            probe: Arc::new(NoOpProbe),
        }
    }

    pub fn with_registry(mut self, registry: CalculatorRegistry) -> Self {
        self.registry = registry;
        self.cache.get_mut().clear();
        *self.filled_by.get_mut() = None;
        self
    }

    /// Installs a probe that observes every facet evaluation and memo hit.
    pub fn with_probe(mut self, probe: Arc<dyn PassProbe>) -> Self {
        self.probe = probe;
        self
    }

    pub fn tree(&self) -> &NodeTree {
        &self.tree
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    pub fn cache(&self) -> Ref<'_, LayoutCache> {
        self.cache.borrow()
    }

    /// A pass that reuses whatever is still memoized from earlier resolutions.
    ///
    /// Memoized values from a different profile or different collaborators are discarded first.
    pub fn pass<'a>(&'a self, env: LayoutEnvironment<'a>) -> LayoutPass<'a> {
        let key = PassKey::of(&env);
        let stale = self.filled_by.borrow().as_ref() != Some(&key);
        if stale {
            log::debug!(
                "Environment changed to profile '{}', discarding memoized facets",
                env.profile.name
            );
            let mut cache = self.cache.borrow_mut();
            cache.ensure_len(self.tree.len());
            cache.clear();
            *self.filled_by.borrow_mut() = Some(key);
        }
        LayoutPass::new(
            &self.tree,
            &self.registry,
            &self.config,
            &self.cache,
            env,
            &*self.probe,
        )
    }

    /// A fresh pass: everything memoized so far is discarded first.
    pub fn begin_pass<'a>(&'a self, env: LayoutEnvironment<'a>) -> LayoutPass<'a> {
        {
            let mut cache = self.cache.borrow_mut();
            cache.ensure_len(self.tree.len());
            cache.invalidate(&self.tree, self.tree.root(), Invalidation::BOTH);
        }
        *self.filled_by.borrow_mut() = Some(PassKey::of(&env));
        log::debug!(
            "Starting layout pass for profile '{}' (breaking: {})",
            env.profile.name,
            env.profile.breaking
        );
        self.pass(env)
    }

    /// Clears memoized facets of `node` in the given directions.
    pub fn invalidate(&mut self, node: NodeId, direction: Invalidation) -> Result<(), LayoutError> {
        if !self.tree.contains(node) {
            return Err(LayoutError::UnknownNode(node));
        }
        log::debug!(
            "Invalidating {} (up: {}, down: {})",
            node,
            direction.upward,
            direction.downward
        );
        self.cache.get_mut().invalidate(&self.tree, node, direction);
        Ok(())
    }

    /// Clears everything that may depend on the content of `node`: the node and its ancestors,
    /// then every node below the topmost ancestor.
    pub fn content_changed(&mut self, node: NodeId) -> Result<(), LayoutError> {
        self.invalidate(node, Invalidation::UP)?;
        let top = self.tree.root_of(node);
        self.invalidate(top, Invalidation::DOWN)
    }

    /// Runs a full pass and collects the geometry of every node in pre-order.
    ///
    /// Hidden nodes are reported without geometry and their subtrees are skipped. A hidden node
    /// that cannot be classified is reported without a kind instead of failing the pass.
    pub fn layout(&self, env: LayoutEnvironment<'_>) -> Result<LaidOutTree, LayoutError> {
        let pass = self.begin_pass(env);
        let mut boxes = Vec::with_capacity(self.tree.len());
        let mut stack = vec![self.tree.root()];

        while let Some(node) = stack.pop() {
            let displayed = pass.is_displayed(node);
            let (kind, effective_kind, geometry) = if displayed {
                (
                    Some(pass.kind(node)?),
                    Some(pass.calculator_kind(node)?),
                    Some(geometry(&pass, node)?),
                )
            } else {
                (pass.kind(node).ok(), pass.calculator_kind(node).ok(), None)
            };
            boxes.push(RenderBox {
                id: node,
                label: self.tree.label(node).map(str::to_owned),
                kind,
                effective_kind,
                displayed,
                geometry,
            });
            if displayed {
                stack.extend(self.tree.children(node).iter().rev().copied());
            }
        }

        log::debug!(
            "Laid out {} node(s) for profile '{}'",
            boxes.len(),
            env.profile.name
        );
        Ok(LaidOutTree {
            profile: env.profile.name.clone(),
            breaking: env.profile.breaking,
            animate: env.profile.animate,
            boxes,
        })
    }
}

fn geometry(pass: &LayoutPass<'_>, node: NodeId) -> Result<BoxGeometry, LayoutError> {
    let width = pass.extent(node, Facet::WidthFinal)?;
    let height = pass.extent(node, Facet::HeightFinal)?;
    Ok(BoxGeometry {
        width,
        inner_width: inner_extent(pass, node, Axis::Horizontal, width)?,
        height,
        inner_height: inner_extent(pass, node, Axis::Vertical, height)?,
        left: pass.extent(node, Facet::Left)?,
        left_percent: pass.extent(node, Facet::LeftPercent)?,
        positioning: pass.positioning(node)?,
        content_top: content_top(pass, node, height)?,
    })
}

fn inner_extent(
    pass: &LayoutPass<'_>,
    node: NodeId,
    axis: Axis,
    extent: Extent,
) -> Result<Extent, LayoutError> {
    match extent {
        Extent::Auto => Ok(Extent::Auto),
        Extent::Px(value) => Ok(Extent::Px(pass.inner(node, axis, value)?)),
    }
}

/// Half the slack between the final and required inner heights of an `align` node.
fn content_top(
    pass: &LayoutPass<'_>,
    node: NodeId,
    height: Extent,
) -> Result<Option<f64>, LayoutError> {
    let aligned = pass.tree().markers(node).is_some_and(|m| m.align);
    let Extent::Px(final_height) = height else {
        return Ok(None);
    };
    if !aligned || !pass.calculator(node)?.implements(Facet::HeightRequired) {
        return Ok(None);
    }
    let required = pass.length(node, Facet::HeightRequired)?;
    let slack = pass.inner(node, Axis::Vertical, final_height)?
        - pass.inner(node, Axis::Vertical, required)?;
    Ok(Some((slack / 2.0).max(0.0)))
}
