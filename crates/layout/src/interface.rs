use crate::LayoutError;
use crate::cache::{LayoutCache, NodeLayout, Slot, SlotAccess};
use crate::calculators::{Calculator, CalculatorRegistry};
use crate::config::LayoutConfig;
use crate::facet::Facet;
use crate::node_kind::NodeKind;
use crate::perf::PassProbe;
use crate::tree::NodeTree;
use crate::visibility;
use layouter_traits::{BoxMetrics, ContentMeasurer, DisplayState};
use layouter_types::{Axis, Extent, LayoutProfile, NodeId, Positioning, ProfileOverrides};
use std::cell::RefCell;
use std::fmt::Debug;

// --- Context and Environment ---

/// Read-only inputs of a pass: the selected profile and the external collaborators.
#[derive(Clone, Copy)]
pub struct LayoutEnvironment<'a> {
    pub profile: &'a LayoutProfile,
    pub metrics: &'a dyn BoxMetrics,
    pub measurer: &'a dyn ContentMeasurer,
    pub display: &'a dyn DisplayState,
}

impl<'a> LayoutEnvironment<'a> {
    /// Uses one collaborator for box metrics, measurement and display state.
    pub fn new<C>(profile: &'a LayoutProfile, collaborator: &'a C) -> Self
    where
        C: BoxMetrics + ContentMeasurer + DisplayState,
    {
        Self {
            profile,
            metrics: collaborator,
            measurer: collaborator,
            display: collaborator,
        }
    }
}

/// A single layout pass over a tree.
///
/// Facets are resolved lazily on first access and memoized in the engine's cache; a facet's
/// calculator may read facets of the node's parent, children or siblings, which resolves them
/// recursively. Re-entering a facet that is still being resolved is reported as a cycle.
pub struct LayoutPass<'a> {
    tree: &'a NodeTree,
    registry: &'a CalculatorRegistry,
    config: &'a LayoutConfig,
    cache: &'a RefCell<LayoutCache>,
    env: LayoutEnvironment<'a>,
    probe: &'a dyn PassProbe,
}

impl<'a> LayoutPass<'a> {
    pub(crate) fn new(
        tree: &'a NodeTree,
        registry: &'a CalculatorRegistry,
        config: &'a LayoutConfig,
        cache: &'a RefCell<LayoutCache>,
        env: LayoutEnvironment<'a>,
        probe: &'a dyn PassProbe,
    ) -> Self {
        Self {
            tree,
            registry,
            config,
            cache,
            env,
            probe,
        }
    }

    pub fn tree(&self) -> &'a NodeTree {
        self.tree
    }

    pub fn profile(&self) -> &'a LayoutProfile {
        self.env.profile
    }

    pub fn config(&self) -> &'a LayoutConfig {
        self.config
    }

    pub fn is_breaking(&self) -> bool {
        self.env.profile.breaking
    }

    /// The node's overrides for the active profile.
    pub fn overrides(&self, node: NodeId) -> Option<&'a ProfileOverrides> {
        self.tree.overrides(node, &self.env.profile.name)
    }

    pub fn kind(&self, node: NodeId) -> Result<NodeKind, LayoutError> {
        self.tree.kind(node)
    }

    /// The kind whose calculator applies to `node` under the active breaking flag.
    pub fn calculator_kind(&self, node: NodeId) -> Result<NodeKind, LayoutError> {
        Ok(self.kind(node)?.calculator_kind(self.is_breaking()))
    }

    pub fn calculator(&self, node: NodeId) -> Result<&'a Calculator, LayoutError> {
        Ok(self.registry.get(self.calculator_kind(node)?))
    }

    /// Resolves `facet` of `node`, memoized for the rest of the pass.
    pub fn extent(&self, node: NodeId, facet: Facet) -> Result<Extent, LayoutError> {
        let calculator = self.calculator(node)?;
        let formula = calculator.extent_fn(facet).ok_or(LayoutError::Unresolved {
            node,
            facet,
            kind: calculator.kind,
        })?;
        self.memoize(node, facet, || formula(self, node))
    }

    /// Resolves `facet` of `node` as a concrete length.
    pub fn length(&self, node: NodeId, facet: Facet) -> Result<f64, LayoutError> {
        self.extent(node, facet)?
            .px()
            .ok_or(LayoutError::AutoExtent { node, facet })
    }

    /// Resolves `facet` of `node` and converts it to the node's inner extent.
    pub fn inner_length(&self, node: NodeId, facet: Facet) -> Result<f64, LayoutError> {
        let value = self.length(node, facet)?;
        self.inner(node, facet.axis().unwrap_or(Axis::Vertical), value)
    }

    pub fn positioning(&self, node: NodeId) -> Result<Positioning, LayoutError> {
        let calculator = self.calculator(node)?;
        let formula = calculator.positioning.ok_or(LayoutError::Unresolved {
            node,
            facet: Facet::Positioning,
            kind: calculator.kind,
        })?;
        self.memoize(node, Facet::Positioning, || formula(self, node))
    }

    /// Converts an outer length of `node` to its inner length along `axis`.
    pub fn inner(&self, node: NodeId, axis: Axis, value: f64) -> Result<f64, LayoutError> {
        let calculator = self.calculator(node)?;
        match axis {
            Axis::Horizontal => (calculator.width.inner)(self, node, value),
            Axis::Vertical => (calculator.height.inner)(self, node, value),
        }
    }

    /// Converts an inner length of `node` to its outer length along `axis`.
    pub fn outer(&self, node: NodeId, axis: Axis, value: f64) -> Result<f64, LayoutError> {
        let calculator = self.calculator(node)?;
        match axis {
            Axis::Horizontal => (calculator.width.outer)(self, node, value),
            Axis::Vertical => (calculator.height.outer)(self, node, value),
        }
    }

    /// The parent of `node`, which `facet` needs in order to resolve.
    pub fn parent_for(&self, node: NodeId, facet: Facet) -> Result<NodeId, LayoutError> {
        self.tree
            .parent(node)
            .ok_or(LayoutError::MissingParent { node, facet })
    }

    pub fn is_displayed(&self, node: NodeId) -> bool {
        visibility::is_displayed(self.tree, self.env.display, node)
    }

    pub fn displayed_children(&self, node: NodeId) -> Vec<NodeId> {
        visibility::displayed_children(self.tree, self.env.display, node)
    }

    pub fn displayed_siblings(&self, node: NodeId) -> Vec<NodeId> {
        visibility::displayed_siblings(self.tree, self.env.display, node)
    }

    /// The collaborator's outer-minus-inner extent of `node`.
    pub fn box_delta(&self, node: NodeId, axis: Axis) -> f64 {
        self.env.metrics.delta(node, axis)
    }

    /// The collaborator's current inner width of `node`.
    pub fn current_width(&self, node: NodeId) -> f64 {
        self.env.metrics.current_width(node)
    }

    /// Content height of `node` rendered at the given inner width (`None` for natural width).
    pub fn measure(&self, node: NodeId, width: Option<f64>) -> Result<f64, LayoutError> {
        self.env
            .measurer
            .measure_content_height(node, width)
            .map_err(|source| LayoutError::Measure { node, source })
    }

    fn memoize<T>(
        &self,
        node: NodeId,
        facet: Facet,
        compute: impl FnOnce() -> Result<T, LayoutError>,
    ) -> Result<T, LayoutError>
    where
        T: Copy + Debug,
        NodeLayout: SlotAccess<T>,
    {
        let slot = self.cache.borrow().slot::<T>(node, facet);
        match slot {
            Slot::Ready(value) => {
                self.probe.count_hit();
                return Ok(value);
            }
            Slot::InProgress => return Err(LayoutError::Cycle { node, facet }),
            Slot::Empty => {}
        }

        self.cache.borrow_mut().set::<T>(node, facet, Slot::InProgress);
        self.probe.record_evaluation(node, facet);
        let result = compute();

        let mut cache = self.cache.borrow_mut();
        match result {
            Ok(value) => {
                log::trace!("{} {} = {:?}", node, facet, value);
                cache.set(node, facet, Slot::Ready(value));
                Ok(value)
            }
            Err(e) => {
                cache.set::<T>(node, facet, Slot::Empty);
                Err(e)
            }
        }
    }
}
