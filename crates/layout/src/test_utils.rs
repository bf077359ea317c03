use crate::engine::LayoutEngine;
use crate::interface::LayoutEnvironment;
use crate::output::LaidOutTree;
use crate::tree::{NodeData, NodeTree};
use crate::{LayoutConfig, LayoutError};
use layouter_traits::StaticMetrics;
use layouter_types::{Extent, LayoutProfile, NodeConfig, NodeId, NodeMarkers, ProfileOverrides};

/// Name of the profile every fixture configures its overrides for.
pub const PROFILE: &str = "wide";

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn profile() -> LayoutProfile {
    LayoutProfile::new(PROFILE)
}

/// A node carrying width/height weights for [`PROFILE`].
pub fn weighted(markers: NodeMarkers, width: Option<f64>, height: Option<f64>) -> NodeData {
    NodeData::new(markers).with_config(NodeConfig::new().with_profile(
        PROFILE,
        ProfileOverrides {
            width,
            height,
            row_height: None,
        },
    ))
}

pub fn table() -> NodeData {
    NodeData::new(NodeMarkers::table())
}

pub fn row() -> NodeData {
    NodeData::new(NodeMarkers::row())
}

pub fn column() -> NodeData {
    NodeData::new(NodeMarkers::column())
}

/// A table of `rows` rows, each holding `columns` unconfigured columns.
pub struct Grid {
    pub tree: NodeTree,
    pub rows: Vec<NodeId>,
    pub columns: Vec<Vec<NodeId>>,
}

pub fn grid(rows: usize, columns: usize) -> Grid {
    let mut tree = NodeTree::new(table().with_label("table"));
    let root = tree.root();
    let mut row_ids = Vec::new();
    let mut column_ids = Vec::new();
    for r in 0..rows {
        let row_id = tree
            .append(root, row().with_label(format!("row-{r}")))
            .unwrap();
        let cells: Vec<NodeId> = (0..columns)
            .map(|c| {
                tree.append(row_id, column().with_label(format!("cell-{r}-{c}")))
                    .unwrap()
            })
            .collect();
        row_ids.push(row_id);
        column_ids.push(cells);
    }
    Grid {
        tree,
        rows: row_ids,
        columns: column_ids,
    }
}

pub fn engine(tree: NodeTree) -> LayoutEngine {
    LayoutEngine::new(tree, LayoutConfig::default())
}

pub fn layout(
    engine: &LayoutEngine,
    metrics: &StaticMetrics,
    profile: &LayoutProfile,
) -> Result<LaidOutTree, LayoutError> {
    engine.layout(LayoutEnvironment::new(profile, metrics))
}

#[track_caller]
pub fn assert_px(extent: Extent, expected: f64) {
    match extent {
        Extent::Px(value) => assert!(
            (value - expected).abs() < 1e-6,
            "expected {expected}, got {value}"
        ),
        Extent::Auto => panic!("expected {expected}, got auto"),
    }
}
