//! Configuration for worklists.

use serde::{Deserialize, Serialize};

/// Starting capacity of an [`ArrayStack`](super::ArrayStack).
pub const DEFAULT_STACK_INITIAL_CAPACITY: usize = 10;

/// Capacity used for fixed-size queues built from configuration.
pub const DEFAULT_FIFO_CAPACITY: usize = 1024;

/// Configuration for the worklist containers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkListConfig {
    /// Backing capacity an array stack starts with before doubling
    pub stack_initial_capacity: usize,

    /// Capacity of a circular-array FIFO queue built from this configuration
    pub fifo_capacity: usize,
}

impl WorkListConfig {
    /// Create a new default configuration.
    pub fn new() -> Self {
        Self {
            stack_initial_capacity: DEFAULT_STACK_INITIAL_CAPACITY,
            fifo_capacity: DEFAULT_FIFO_CAPACITY,
        }
    }

    /// Set the starting capacity for array stacks.
    pub fn with_stack_initial_capacity(mut self, capacity: usize) -> Self {
        self.stack_initial_capacity = capacity;
        self
    }

    /// Set the capacity for circular-array FIFO queues.
    pub fn with_fifo_capacity(mut self, capacity: usize) -> Self {
        self.fifo_capacity = capacity;
        self
    }
}

impl Default for WorkListConfig {
    fn default() -> Self {
        Self::new()
    }
}
