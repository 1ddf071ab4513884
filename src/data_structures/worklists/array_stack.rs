//! Array-backed LIFO worklist.

use tracing::debug;

use super::config::WorkListConfig;
use super::error::{WorkListError, WorkListResult};
use super::WorkList;

/// A LIFO worklist backed by a contiguous array.
///
/// The backing array starts at a small fixed capacity and doubles whenever an
/// add finds it full. Clearing keeps the capacity.
#[derive(Debug, Clone)]
pub struct ArrayStack<E> {
    /// Pending work, top of the stack last
    items: Vec<E>,
}

impl<E> ArrayStack<E> {
    /// Creates an empty stack with the default starting capacity.
    pub fn new() -> Self {
        Self::with_config(&WorkListConfig::default())
    }

    /// Creates an empty stack with the configured starting capacity.
    pub fn with_config(config: &WorkListConfig) -> Self {
        Self {
            items: Vec::with_capacity(config.stack_initial_capacity.max(1)),
        }
    }

    /// Current capacity of the backing array.
    pub fn capacity(&self) -> usize {
        self.items.capacity()
    }
}

impl<E> Default for ArrayStack<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> WorkList<E> for ArrayStack<E> {
    fn add(&mut self, work: E) -> WorkListResult<()> {
        if self.items.len() == self.items.capacity() {
            let capacity = self.items.capacity();
            self.items.reserve_exact(capacity);
            debug!(from = capacity, to = self.items.capacity(), "array stack grew");
        }
        self.items.push(work);
        Ok(())
    }

    fn peek(&self) -> WorkListResult<&E> {
        self.items.last().ok_or(WorkListError::NoWork)
    }

    fn next(&mut self) -> WorkListResult<E> {
        self.items.pop().ok_or(WorkListError::NoWork)
    }

    fn size(&self) -> usize {
        self.items.len()
    }

    fn clear(&mut self) {
        self.items.clear();
    }
}
