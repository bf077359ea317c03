use crate::LayoutError;
use crate::tree::NodeTree;
use layouter_types::NodeId;
use serde::Serialize;
use std::fmt;

/// Represents the type of a layout node, selecting the calculator that sizes it.
///
/// The classifier only ever assigns the first five kinds. The breaking variants and `Auto`
/// are calculator kinds substituted while breaking mode is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum NodeKind {
    Table,
    Row,
    Column,
    Cropped,
    Compound,
    BreakingColumn,
    BreakingCropped,
    Auto,
}

/// A static predicate over a node's markers and structure.
pub type Matcher = fn(&NodeTree, NodeId) -> bool;

/// Ordered classification rules; the first match wins and a leaf column is the fallback.
pub const CLASSIFICATION_RULES: [(NodeKind, Matcher); 5] = [
    (NodeKind::Table, is_table),
    (NodeKind::Row, is_row),
    (NodeKind::Compound, is_compound),
    (NodeKind::Cropped, is_cropped),
    (NodeKind::Column, is_column),
];

/// Kinds swapped for stacked-layout calculators while breaking mode is active.
const BREAKING_VARIANTS: [(NodeKind, NodeKind); 5] = [
    (NodeKind::Table, NodeKind::Auto),
    (NodeKind::Row, NodeKind::Auto),
    (NodeKind::Compound, NodeKind::Auto),
    (NodeKind::Column, NodeKind::BreakingColumn),
    (NodeKind::Cropped, NodeKind::BreakingCropped),
];

fn is_table(tree: &NodeTree, id: NodeId) -> bool {
    tree.markers(id).is_some_and(|m| m.table)
}

fn is_row(tree: &NodeTree, id: NodeId) -> bool {
    tree.markers(id).is_some_and(|m| m.row)
}

fn is_column(tree: &NodeTree, id: NodeId) -> bool {
    tree.markers(id).is_some_and(|m| m.column)
}

fn is_cropped(tree: &NodeTree, id: NodeId) -> bool {
    is_column(tree, id) && tree.markers(id).is_some_and(|m| m.cropped)
}

fn is_compound(tree: &NodeTree, id: NodeId) -> bool {
    is_column(tree, id) && tree.children(id).iter().any(|&child| is_row(tree, child))
}

impl NodeKind {
    pub const COUNT: usize = 8;

    pub const ALL: [NodeKind; NodeKind::COUNT] = [
        NodeKind::Table,
        NodeKind::Row,
        NodeKind::Column,
        NodeKind::Cropped,
        NodeKind::Compound,
        NodeKind::BreakingColumn,
        NodeKind::BreakingCropped,
        NodeKind::Auto,
    ];

    /// Determines the `NodeKind` of a node from its static markers.
    ///
    /// A column that is both cropped and holds nested rows is rejected: the two kinds disagree
    /// on how its required height is derived.
    pub fn classify(tree: &NodeTree, id: NodeId) -> Result<Self, LayoutError> {
        if !tree.contains(id) {
            return Err(LayoutError::UnknownNode(id));
        }
        if is_cropped(tree, id) && is_compound(tree, id) {
            return Err(LayoutError::ConflictingMarkers { node: id });
        }
        let kind = CLASSIFICATION_RULES
            .iter()
            .find(|(_, matches)| matches(tree, id))
            .map(|(kind, _)| *kind)
            .unwrap_or(NodeKind::Column);
        Ok(kind)
    }

    /// The kind whose calculator sizes a node of this kind.
    pub fn calculator_kind(self, breaking: bool) -> NodeKind {
        if !breaking {
            return self;
        }
        BREAKING_VARIANTS
            .iter()
            .find(|(from, _)| *from == self)
            .map(|(_, to)| *to)
            .unwrap_or(self)
    }

    pub fn index(self) -> usize {
        self as usize
    }

    /// Returns a string representation, primarily for debugging or error messages.
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeKind::Table => "Table",
            NodeKind::Row => "Row",
            NodeKind::Column => "Column",
            NodeKind::Cropped => "Cropped",
            NodeKind::Compound => "Compound",
            NodeKind::BreakingColumn => "BreakingColumn",
            NodeKind::BreakingCropped => "BreakingCropped",
            NodeKind::Auto => "Auto",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::NodeData;
    use layouter_types::NodeMarkers;

    #[test]
    fn rules_are_applied_in_order() {
        let mut tree = NodeTree::new(NodeData::new(NodeMarkers::table()));
        let root = tree.root();
        let row = tree.append(root, NodeData::new(NodeMarkers::row())).unwrap();
        let leaf = tree.append(row, NodeData::new(NodeMarkers::column())).unwrap();
        let cropped = tree.append(row, NodeData::new(NodeMarkers::cropped_column())).unwrap();
        let compound = tree.append(row, NodeData::new(NodeMarkers::column())).unwrap();
        tree.append(compound, NodeData::new(NodeMarkers::row())).unwrap();
        let unmarked = tree.append(row, NodeData::new(NodeMarkers::default())).unwrap();

        assert_eq!(NodeKind::classify(&tree, root), Ok(NodeKind::Table));
        assert_eq!(NodeKind::classify(&tree, row), Ok(NodeKind::Row));
        assert_eq!(NodeKind::classify(&tree, leaf), Ok(NodeKind::Column));
        assert_eq!(NodeKind::classify(&tree, cropped), Ok(NodeKind::Cropped));
        assert_eq!(NodeKind::classify(&tree, compound), Ok(NodeKind::Compound));
        assert_eq!(NodeKind::classify(&tree, unmarked), Ok(NodeKind::Column));
    }

    #[test]
    fn table_marker_wins_over_row_marker() {
        let markers = NodeMarkers {
            table: true,
            row: true,
            ..Default::default()
        };
        let tree = NodeTree::new(NodeData::new(markers));
        assert_eq!(NodeKind::classify(&tree, tree.root()), Ok(NodeKind::Table));
    }

    #[test]
    fn cropped_compound_is_rejected() {
        let mut tree = NodeTree::new(NodeData::new(NodeMarkers::table()));
        let row = tree.append(tree.root(), NodeData::new(NodeMarkers::row())).unwrap();
        let both = tree.append(row, NodeData::new(NodeMarkers::cropped_column())).unwrap();
        tree.append(both, NodeData::new(NodeMarkers::row())).unwrap();

        assert_eq!(
            NodeKind::classify(&tree, both),
            Err(LayoutError::ConflictingMarkers { node: both })
        );
    }

    #[test]
    fn breaking_mode_is_a_lookup() {
        assert_eq!(NodeKind::Column.calculator_kind(true), NodeKind::BreakingColumn);
        assert_eq!(NodeKind::Cropped.calculator_kind(true), NodeKind::BreakingCropped);
        assert_eq!(NodeKind::Compound.calculator_kind(true), NodeKind::Auto);
        assert_eq!(NodeKind::Table.calculator_kind(true), NodeKind::Auto);
        assert_eq!(NodeKind::Row.calculator_kind(true), NodeKind::Auto);
        for kind in NodeKind::ALL {
            assert_eq!(kind.calculator_kind(false), kind);
        }
    }
}
