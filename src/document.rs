//! JSON documents: a node tree together with the box metrics, content and visibility the
//! engine measures it against.
//!
//! ```json
//! {
//!   "profiles": [{ "name": "wide", "width": 600, "rowHeight": 40 }],
//!   "root": {
//!     "table": true,
//!     "children": [
//!       { "row": true, "children": [
//!         { "column": true, "label": "name", "config": { "wide": { "width": 0.25 } } },
//!         { "column": true, "content": { "fixed": 120 } }
//!       ]}
//!     ]
//!   }
//! }
//! ```

use crate::error::PipelineError;
use layouter_layout::{LaidOutTree, LayoutConfig, LayoutEngine, LayoutEnvironment, NodeData, NodeTree};
use layouter_traits::{BoxDelta, Content, StaticMetrics};
use layouter_types::{LayoutProfile, NodeConfig, NodeId, NodeMarkers};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// One node of a document, with everything the in-memory collaborator reports for it.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct NodeSpec {
    pub label: Option<String>,
    #[serde(flatten)]
    pub markers: NodeMarkers,
    #[serde(skip_serializing_if = "NodeConfig::is_empty")]
    pub config: NodeConfig,
    pub content: Content,
    pub delta: BoxDelta,
    pub current_width: Option<f64>,
    pub hidden: bool,
    pub children: Vec<NodeSpec>,
}

#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct LayoutDocument {
    pub profiles: Vec<LayoutProfile>,
    pub root: NodeSpec,
}

/// How a document is laid out.
#[derive(Debug, Clone, Default)]
pub struct LayoutOptions {
    /// Profile to apply; the first profile of the document when unset.
    pub profile: Option<String>,
    /// Forces breaking mode regardless of the profile.
    pub breaking: bool,
    /// Restricts the output to nodes carrying this label.
    pub select: Option<String>,
}

impl LayoutDocument {
    pub fn from_json(json: &str) -> Result<Self, PipelineError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, PipelineError> {
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// The named profile, or the first one listed. A document without profiles lays out
    /// against an unnamed default profile.
    pub fn profile(&self, name: Option<&str>) -> Result<LayoutProfile, PipelineError> {
        match name {
            Some(name) => self
                .profiles
                .iter()
                .find(|p| p.name == name)
                .cloned()
                .ok_or_else(|| PipelineError::UnknownProfile(name.to_string())),
            None => Ok(self.profiles.first().cloned().unwrap_or_default()),
        }
    }

    /// Builds the node tree and the collaborator describing its boxes.
    pub fn build(&self) -> Result<(NodeTree, StaticMetrics), PipelineError> {
        let mut tree = NodeTree::new(node_data(&self.root));
        let mut metrics = StaticMetrics::new();
        let root = tree.root();
        describe(&mut metrics, root, &self.root);
        attach_children(&mut tree, &mut metrics, root, &self.root)?;
        log::debug!("Built a tree of {} node(s)", tree.len());
        Ok((tree, metrics))
    }
}

fn node_data(spec: &NodeSpec) -> NodeData {
    let data = NodeData::new(spec.markers).with_config(spec.config.clone());
    match &spec.label {
        Some(label) => data.with_label(label.clone()),
        None => data,
    }
}

fn describe(metrics: &mut StaticMetrics, id: NodeId, spec: &NodeSpec) {
    metrics.set_delta(id, spec.delta).set_content(id, spec.content);
    if let Some(width) = spec.current_width {
        metrics.set_current_width(id, width);
    }
    if spec.hidden {
        metrics.hide(id);
    }
}

fn attach_children(
    tree: &mut NodeTree,
    metrics: &mut StaticMetrics,
    parent: NodeId,
    spec: &NodeSpec,
) -> Result<(), PipelineError> {
    for child in &spec.children {
        let id = tree.append(parent, node_data(child))?;
        describe(metrics, id, child);
        attach_children(tree, metrics, id, child)?;
    }
    Ok(())
}

/// Lays out `document` in a single pass.
pub fn layout_document(
    document: &LayoutDocument,
    options: &LayoutOptions,
) -> Result<LaidOutTree, PipelineError> {
    let mut profile = document.profile(options.profile.as_deref())?;
    if options.breaking {
        profile.breaking = true;
    }

    let (tree, metrics) = document.build()?;
    let selected = match &options.select {
        Some(label) => {
            let found = tree.find_by_label(label);
            if found.is_empty() {
                return Err(PipelineError::UnknownLabel(label.clone()));
            }
            Some(found)
        }
        None => None,
    };

    let engine = LayoutEngine::new(tree, LayoutConfig::default());
    let mut laid_out = engine.layout(LayoutEnvironment::new(&profile, &metrics))?;
    if let Some(nodes) = selected {
        laid_out.retain(&nodes);
    }
    Ok(laid_out)
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOCUMENT: &str = r#"{
        "profiles": [
            { "name": "wide", "width": 300, "rowHeight": 40 },
            { "name": "narrow", "rowHeight": 40, "breakColumns": true }
        ],
        "root": {
            "table": true,
            "label": "table",
            "children": [{
                "row": true,
                "children": [
                    { "column": true, "label": "cell", "config": { "wide": { "width": 0.5 } } },
                    { "column": true, "label": "cell", "content": { "fixed": 70 } },
                    { "column": true, "hidden": true }
                ]
            }]
        }
    }"#;

    #[test]
    fn documents_build_trees_and_collaborators() {
        let document = LayoutDocument::from_json(DOCUMENT).unwrap();
        let (tree, metrics) = document.build().unwrap();

        assert_eq!(tree.len(), 5);
        assert_eq!(tree.find_by_label("cell").len(), 2);
        assert!(tree.markers(NodeId::new(0)).unwrap().table);
        assert_eq!(metrics.content(NodeId::new(3)), Content::Fixed(70.0));
        assert_eq!(
            tree.overrides(NodeId::new(2), "wide").and_then(|o| o.width),
            Some(0.5)
        );
    }

    #[test]
    fn profiles_are_selected_by_name() {
        let document = LayoutDocument::from_json(DOCUMENT).unwrap();
        assert_eq!(document.profile(None).unwrap().name, "wide");
        assert!(document.profile(Some("narrow")).unwrap().breaking);
        assert!(matches!(
            document.profile(Some("tall")),
            Err(PipelineError::UnknownProfile(name)) if name == "tall"
        ));
    }

    #[test]
    fn selection_keeps_only_labelled_boxes() {
        let document = LayoutDocument::from_json(DOCUMENT).unwrap();
        let options = LayoutOptions {
            select: Some("cell".to_string()),
            ..Default::default()
        };
        let laid_out = layout_document(&document, &options).unwrap();

        assert_eq!(laid_out.boxes.len(), 2);
        assert!(laid_out.boxes.iter().all(|b| b.label.as_deref() == Some("cell")));

        let missing = LayoutOptions {
            select: Some("nothing".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            layout_document(&document, &missing),
            Err(PipelineError::UnknownLabel(_))
        ));
    }

    #[test]
    fn empty_configs_are_left_out_when_written_back() {
        let document = LayoutDocument::from_json(DOCUMENT).unwrap();
        let value = serde_json::to_value(&document).unwrap();
        let cells = &value["root"]["children"][0]["children"];

        assert_eq!(cells[0]["config"]["wide"]["width"], serde_json::json!(0.5));
        assert!(cells[1].get("config").is_none());
        assert!(cells[2].get("config").is_none());
    }
}
