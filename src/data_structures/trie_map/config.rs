//! Configuration for the trie map.

use serde::{Deserialize, Serialize};

/// Default maximum key length accepted by the trie map.
pub const DEFAULT_MAX_DEPTH: usize = 1024;

/// Default number of node slots reserved up front.
pub const DEFAULT_INITIAL_NODE_CAPACITY: usize = 16;

/// Configuration options for a [`TrieMap`](super::TrieMap).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrieMapConfig {
    /// Maximum number of elements a key may have
    pub max_depth: usize,

    /// Number of node slots to reserve when the map is created
    pub initial_node_capacity: usize,
}

impl TrieMapConfig {
    /// Create a new default configuration.
    pub fn new() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            initial_node_capacity: DEFAULT_INITIAL_NODE_CAPACITY,
        }
    }

    /// Set the maximum key length.
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Set how many node slots are reserved up front.
    pub fn with_initial_node_capacity(mut self, capacity: usize) -> Self {
        self.initial_node_capacity = capacity;
        self
    }
}

impl Default for TrieMapConfig {
    fn default() -> Self {
        Self::new()
    }
}
