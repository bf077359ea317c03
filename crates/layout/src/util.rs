use layouter_types::Extent;

/// Tolerance below which two lengths are considered equal.
pub const LENGTH_EPSILON: f64 = 0.01;

/// Robust floating point comparison for laid-out lengths.
/// Handles `Option<f64>` so that a missing value only equals another missing value.
pub fn floats_fuzzy_eq(a: Option<f64>, b: Option<f64>) -> bool {
    match (a, b) {
        (Some(va), Some(vb)) => (va - vb).abs() < LENGTH_EPSILON,
        (None, None) => true,
        _ => false,
    }
}

/// `auto` only equals `auto`; lengths are compared with [`floats_fuzzy_eq`].
pub fn extents_fuzzy_eq(a: Extent, b: Extent) -> bool {
    match (a, b) {
        (Extent::Auto, Extent::Auto) => true,
        (Extent::Px(va), Extent::Px(vb)) => floats_fuzzy_eq(Some(va), Some(vb)),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lengths_within_epsilon_are_equal() {
        assert!(floats_fuzzy_eq(Some(100.0), Some(100.004)));
        assert!(!floats_fuzzy_eq(Some(100.0), Some(100.5)));
        assert!(floats_fuzzy_eq(None, None));
        assert!(!floats_fuzzy_eq(Some(0.0), None));
    }

    #[test]
    fn auto_never_equals_a_length() {
        assert!(extents_fuzzy_eq(Extent::Auto, Extent::Auto));
        assert!(!extents_fuzzy_eq(Extent::Auto, Extent::Px(0.0)));
        assert!(extents_fuzzy_eq(Extent::Px(3.0), Extent::Px(3.001)));
    }
}
