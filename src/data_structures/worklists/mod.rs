//! Worklist containers.
//!
//! A worklist holds pending items and hands them back one at a time. The
//! ordering policy is what distinguishes the implementations:
//!
//! * [`ArrayStack`] - LIFO over an array that doubles when full
//! * [`CircularArrayFifoQueue`] - FIFO over a fixed-capacity ring buffer,
//!   with random access to pending items
//! * [`ListFifoQueue`] - unbounded FIFO over a singly linked list
//!
//! # Example
//!
//! ```
//! use kukui_lib::data_structures::worklists::{ArrayStack, ListFifoQueue, WorkList};
//!
//! let mut stack = ArrayStack::new();
//! let mut queue = ListFifoQueue::new();
//! for i in 0..3 {
//!     stack.add(i).unwrap();
//!     queue.add(i).unwrap();
//! }
//!
//! assert_eq!(stack.next().unwrap(), 2);
//! assert_eq!(queue.next().unwrap(), 0);
//! ```

mod array_stack;
mod circular_array_fifo_queue;
mod config;
mod error;
mod list_fifo_queue;

pub use array_stack::ArrayStack;
pub use circular_array_fifo_queue::CircularArrayFifoQueue;
pub use config::WorkListConfig;
pub use error::{WorkListError, WorkListResult};
pub use list_fifo_queue::{ListFifoIter, ListFifoQueue};

/// A container of pending work.
pub trait WorkList<E> {
    /// Adds a piece of work.
    ///
    /// # Returns
    ///
    /// * `Ok(())` - The work was accepted.
    /// * `Err(WorkListError::AtCapacity)` - A fixed-size worklist is full.
    fn add(&mut self, work: E) -> WorkListResult<()>;

    /// Returns the item that [`next`](WorkList::next) would remove.
    fn peek(&self) -> WorkListResult<&E>;

    /// Removes and returns the next item to work on.
    fn next(&mut self) -> WorkListResult<E>;

    /// Number of pending items.
    fn size(&self) -> usize;

    /// Returns `true` if any work is pending.
    fn has_work(&self) -> bool {
        self.size() > 0
    }

    /// Discards all pending work.
    fn clear(&mut self);
}

/// A worklist with a fixed capacity and indexed access to pending items.
///
/// Index 0 is the item [`next`](WorkList::next) would return.
pub trait FixedSizeWorkList<E>: WorkList<E> {
    /// Maximum number of pending items.
    fn capacity(&self) -> usize;

    /// Returns `true` if no more work can be added.
    fn is_full(&self) -> bool {
        self.size() >= self.capacity()
    }

    /// Returns the `i`-th pending item.
    fn peek_at(&self, i: usize) -> WorkListResult<&E>;

    /// Replaces the `i`-th pending item in place.
    fn update(&mut self, i: usize, value: E) -> WorkListResult<()>;
}
