//! Newtype wrapper for node identity.
//!
//! Nodes live in an arena owned by the tree; a `NodeId` is the index of a node in that arena
//! and stays stable for the lifetime of the tree.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifies a node within its owning tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(u32);

impl NodeId {
    /// Creates a NodeId from a raw arena index
    pub fn new(index: u32) -> Self {
        Self(index)
    }

    /// Returns the arena index of this node
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl From<u32> for NodeId {
    fn from(index: u32) -> Self {
        Self(index)
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}
