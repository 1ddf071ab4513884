//! Error types for the trie map.
//!
//! This module defines the error types that can occur during trie map operations.

/// Errors that can occur in trie map operations.
#[derive(Debug, thiserror::Error, PartialEq, Eq, Clone)]
pub enum TrieMapError {
    /// The key is not an acceptable argument: it is deeper than the trie allows.
    #[error("Key of length {length} exceeds maximum trie depth of {max_depth}")]
    KeyTooLong {
        /// Number of elements in the rejected key.
        length: usize,
        /// The maximum allowed depth.
        max_depth: usize,
    },
}

/// Result type for trie map operations
pub type TrieMapResult<T> = Result<T, TrieMapError>;
