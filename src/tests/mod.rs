//! Test modules for kukui.
//!
//! This module contains cross-component testing infrastructure:
//! - Property-based tests for the trie map and worklist contracts
//! - Parameterized tests shared across worklist implementations
//! - Configuration and error reporting tests
//! - Test fixtures and utilities

pub mod config_tests;
pub mod test_utils;

// Re-export commonly used testing tools to simplify imports in test modules
pub use test_utils::{key_strategy, keys_strategy, TestFixture};
