//! Container data structures.
//!
//! This module contains the generic containers provided by kukui:
//! - [`trie_map`]: a map from element sequences to values, stored as a
//!   prefix tree with pluggable per-node branch storage
//! - [`worklists`]: stack and queue containers for pending work

pub mod trie_map;
pub mod worklists;

// Re-export common data structures
pub use trie_map::{
    BTreeTrieMap, HashTrieMap, SequenceKey, TrieMap, TrieMapConfig, TrieMapError, TrieMapResult,
};
pub use worklists::{
    ArrayStack, CircularArrayFifoQueue, FixedSizeWorkList, ListFifoQueue, WorkList,
    WorkListConfig, WorkListError, WorkListResult,
};
