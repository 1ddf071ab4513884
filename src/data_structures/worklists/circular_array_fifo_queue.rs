//! Fixed-capacity FIFO worklist over a ring buffer.

use std::fmt;

use super::config::WorkListConfig;
use super::error::{WorkListError, WorkListResult};
use super::{FixedSizeWorkList, WorkList};

/// A FIFO worklist with a fixed capacity, backed by a circular array.
///
/// The capacity is set at construction and never changes. Logical position
/// `i` (0 being the front) lives at physical slot `(first + i) % capacity`.
///
/// # Examples
///
/// ```
/// use kukui_lib::data_structures::worklists::{
///     CircularArrayFifoQueue, FixedSizeWorkList, WorkList, WorkListError,
/// };
///
/// let mut queue = CircularArrayFifoQueue::new(2);
/// queue.add('a').unwrap();
/// queue.add('b').unwrap();
/// assert_eq!(queue.add('c'), Err(WorkListError::AtCapacity { capacity: 2 }));
///
/// queue.update(1, 'z').unwrap();
/// assert_eq!(queue.next(), Ok('a'));
/// assert_eq!(queue.peek_at(0), Ok(&'z'));
/// ```
pub struct CircularArrayFifoQueue<E> {
    /// Ring buffer; occupied slots hold `Some`
    slots: Box<[Option<E>]>,

    /// Physical index of the front item
    first: usize,

    /// Physical index the next added item goes to
    last: usize,

    /// Number of pending items
    size: usize,
}

impl<E> CircularArrayFifoQueue<E> {
    /// Creates an empty queue that holds at most `capacity` items.
    pub fn new(capacity: usize) -> Self {
        Self {
            slots: (0..capacity).map(|_| None).collect(),
            first: 0,
            last: 0,
            size: 0,
        }
    }

    /// Creates an empty queue with the configured FIFO capacity.
    pub fn with_config(config: &WorkListConfig) -> Self {
        Self::new(config.fifo_capacity)
    }

    /// Maps a logical position to its physical slot, checking bounds.
    fn slot_index(&self, i: usize) -> WorkListResult<usize> {
        if i >= self.size {
            return Err(WorkListError::IndexOutOfBounds {
                index: i,
                size: self.size,
            });
        }
        Ok((self.first + i) % self.slots.len())
    }
}

impl<E> WorkList<E> for CircularArrayFifoQueue<E> {
    fn add(&mut self, work: E) -> WorkListResult<()> {
        if self.is_full() {
            return Err(WorkListError::AtCapacity {
                capacity: self.capacity(),
            });
        }
        self.slots[self.last] = Some(work);
        self.last = (self.last + 1) % self.slots.len();
        self.size += 1;
        Ok(())
    }

    fn peek(&self) -> WorkListResult<&E> {
        if self.size == 0 {
            return Err(WorkListError::NoWork);
        }
        self.slots[self.first].as_ref().ok_or(WorkListError::NoWork)
    }

    fn next(&mut self) -> WorkListResult<E> {
        if self.size == 0 {
            return Err(WorkListError::NoWork);
        }
        let work = self.slots[self.first].take().ok_or(WorkListError::NoWork)?;
        self.first = (self.first + 1) % self.slots.len();
        self.size -= 1;
        Ok(work)
    }

    fn size(&self) -> usize {
        self.size
    }

    fn clear(&mut self) {
        self.slots.iter_mut().for_each(|slot| *slot = None);
        self.first = 0;
        self.last = 0;
        self.size = 0;
    }
}

impl<E> FixedSizeWorkList<E> for CircularArrayFifoQueue<E> {
    fn capacity(&self) -> usize {
        self.slots.len()
    }

    fn peek_at(&self, i: usize) -> WorkListResult<&E> {
        let index = self.slot_index(i)?;
        self.slots[index].as_ref().ok_or(WorkListError::NoWork)
    }

    fn update(&mut self, i: usize, value: E) -> WorkListResult<()> {
        let index = self.slot_index(i)?;
        self.slots[index] = Some(value);
        Ok(())
    }
}

impl<E: fmt::Debug> fmt::Debug for CircularArrayFifoQueue<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let pending: Vec<_> = (0..self.size)
            .filter_map(|i| self.peek_at(i).ok())
            .collect();
        f.debug_struct("CircularArrayFifoQueue")
            .field("capacity", &self.slots.len())
            .field("pending", &pending)
            .finish()
    }
}
