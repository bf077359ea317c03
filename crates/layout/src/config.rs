#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutConfig {
    /// Configured weights above this value are absolute lengths rather than factors.
    ///
    /// Defaults to `1.0`.
    pub absolute_weight_threshold: f64,
    /// Remaining weight at or below this value counts as exhausted when unconfigured siblings
    /// still need a share.
    ///
    /// Defaults to `1e-9`.
    pub weight_tolerance: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            absolute_weight_threshold: 1.0,
            weight_tolerance: 1e-9,
        }
    }
}
