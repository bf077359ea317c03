pub mod fixtures;

use layouter::{LaidOutTree, LayoutDocument, LayoutOptions, NodeId, PipelineError, layout_document};
use serde_json::Value;

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Lays out a document given as JSON with default options.
pub fn layout_json(document: &Value) -> Result<LaidOutTree, PipelineError> {
    layout_json_with(document, &LayoutOptions::default())
}

pub fn layout_json_with(
    document: &Value,
    options: &LayoutOptions,
) -> Result<LaidOutTree, PipelineError> {
    let document: LayoutDocument = serde_json::from_value(document.clone())?;
    layout_document(&document, options)
}

/// The id of the only node labelled `label`.
pub fn labelled(laid_out: &LaidOutTree, label: &str) -> NodeId {
    let matches: Vec<NodeId> = laid_out
        .boxes
        .iter()
        .filter(|b| b.label.as_deref() == Some(label))
        .map(|b| b.id)
        .collect();
    assert_eq!(matches.len(), 1, "expected exactly one node labelled '{label}'");
    matches[0]
}

#[track_caller]
pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-6,
        "expected {expected}, got {actual}"
    );
}

#[macro_export]
macro_rules! assert_box_px {
    ($laid_out:expr, $label:expr, $field:ident, $expected:expr) => {{
        let id = common::labelled(&$laid_out, $label);
        let geometry = $laid_out
            .geometry(id)
            .unwrap_or_else(|| panic!("node '{}' has no geometry", $label));
        match geometry.$field.px() {
            Some(value) => common::assert_close(value, $expected),
            None => panic!("{} of '{}' is auto", stringify!($field), $label),
        }
    }};
}
