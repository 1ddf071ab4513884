//! Unbounded FIFO worklist over a singly linked list.

use std::fmt;
use std::marker::PhantomData;
use std::ptr;

use super::error::{WorkListError, WorkListResult};
use super::WorkList;

/// A node in the list queue.
struct ListNode<E> {
    work: E,
    next: *mut ListNode<E>,
}

/// An unbounded FIFO worklist backed by a singly linked list.
///
/// Work is appended behind `last` and taken from `first`. Both are null
/// exactly when the queue is empty, and `last.next` is always null.
pub struct ListFifoQueue<E> {
    /// Front node, taken by `next`
    first: *mut ListNode<E>,

    /// Back node, extended by `add`
    last: *mut ListNode<E>,

    /// Number of pending items
    size: usize,

    _owns: PhantomData<Box<ListNode<E>>>,
}

impl<E> ListFifoQueue<E> {
    /// Creates an empty queue.
    pub fn new() -> Self {
        Self {
            first: ptr::null_mut(),
            last: ptr::null_mut(),
            size: 0,
            _owns: PhantomData,
        }
    }

    /// Iterates over pending work, front to back.
    pub fn iter(&self) -> ListFifoIter<'_, E> {
        ListFifoIter {
            current: self.first,
            _queue: PhantomData,
        }
    }
}

impl<E> Default for ListFifoQueue<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> WorkList<E> for ListFifoQueue<E> {
    fn add(&mut self, work: E) -> WorkListResult<()> {
        let node = Box::into_raw(Box::new(ListNode {
            work,
            next: ptr::null_mut(),
        }));

        if self.last.is_null() {
            self.first = node;
        } else {
            // SAFETY: `last` is non-null, so it points at a live node this
            // queue allocated and still owns.
            unsafe {
                (*self.last).next = node;
            }
        }
        self.last = node;
        self.size += 1;
        Ok(())
    }

    fn peek(&self) -> WorkListResult<&E> {
        if self.first.is_null() {
            return Err(WorkListError::NoWork);
        }
        // SAFETY: `first` is non-null and owned by this queue; the returned
        // reference borrows `self`, so the node cannot be freed meanwhile.
        Ok(unsafe { &(*self.first).work })
    }

    fn next(&mut self) -> WorkListResult<E> {
        if self.first.is_null() {
            return Err(WorkListError::NoWork);
        }
        // SAFETY: `first` is non-null and was created by `Box::into_raw` in
        // `add`. Unlinking it here transfers ownership back to the Box.
        let node = unsafe { Box::from_raw(self.first) };
        self.first = node.next;
        if self.first.is_null() {
            self.last = ptr::null_mut();
        }
        self.size -= 1;
        Ok(node.work)
    }

    fn size(&self) -> usize {
        self.size
    }

    fn clear(&mut self) {
        while !self.first.is_null() {
            // SAFETY: same ownership transfer as in `next`.
            let node = unsafe { Box::from_raw(self.first) };
            self.first = node.next;
        }
        self.last = ptr::null_mut();
        self.size = 0;
    }
}

impl<E> Drop for ListFifoQueue<E> {
    fn drop(&mut self) {
        self.clear();
    }
}

// SAFETY: the queue exclusively owns its nodes; moving it between threads
// moves the work items with it.
unsafe impl<E: Send> Send for ListFifoQueue<E> {}

impl<E: fmt::Debug> fmt::Debug for ListFifoQueue<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Front-to-back iterator over a [`ListFifoQueue`].
pub struct ListFifoIter<'a, E> {
    current: *const ListNode<E>,
    _queue: PhantomData<&'a ListFifoQueue<E>>,
}

impl<'a, E> Iterator for ListFifoIter<'a, E> {
    type Item = &'a E;

    fn next(&mut self) -> Option<Self::Item> {
        if self.current.is_null() {
            return None;
        }
        // SAFETY: nodes stay alive while the queue is borrowed for `'a`.
        let node = unsafe { &*self.current };
        self.current = node.next;
        Some(&node.work)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;

    #[test]
    fn test_queue_basic_operations() {
        let mut queue = ListFifoQueue::new();
        assert!(!queue.has_work());

        queue.add(1).unwrap();
        queue.add(2).unwrap();
        queue.add(3).unwrap();
        assert_eq!(queue.size(), 3);
        assert_eq!(queue.peek(), Ok(&1));

        assert_eq!(queue.next(), Ok(1));
        assert_eq!(queue.next(), Ok(2));
        assert_eq!(queue.next(), Ok(3));
        assert_eq!(queue.next(), Err(WorkListError::NoWork));
        assert_eq!(queue.peek(), Err(WorkListError::NoWork));
    }

    #[test]
    fn test_add_after_drain() {
        let mut queue = ListFifoQueue::new();
        queue.add("a").unwrap();
        assert_eq!(queue.next(), Ok("a"));

        queue.add("b").unwrap();
        queue.add("c").unwrap();
        assert_eq!(queue.peek(), Ok(&"b"));
        assert_eq!(queue.iter().copied().collect::<Vec<_>>(), vec!["b", "c"]);
    }

    #[test]
    fn test_fifo_order() {
        let mut queue = ListFifoQueue::new();
        for i in 0..1000 {
            queue.add(i).unwrap();
            assert_eq!(queue.peek(), Ok(&0));
            assert_eq!(queue.size(), i + 1);
        }
        for i in 0..1000 {
            assert_eq!(queue.peek(), Ok(&i));
            assert_eq!(queue.next(), Ok(i));
            assert_eq!(queue.size(), 999 - i);
        }
    }

    #[test]
    fn test_clear_releases_work() {
        let tracker = Rc::new(());
        let mut queue = ListFifoQueue::new();
        for _ in 0..10 {
            queue.add(Rc::clone(&tracker)).unwrap();
        }
        assert_eq!(Rc::strong_count(&tracker), 11);

        queue.clear();
        assert_eq!(Rc::strong_count(&tracker), 1);
        assert_eq!(queue.size(), 0);

        queue.add(Rc::clone(&tracker)).unwrap();
        drop(queue);
        assert_eq!(Rc::strong_count(&tracker), 1);
    }

    #[test]
    fn test_long_queue_drops_without_recursion() {
        let mut queue = ListFifoQueue::new();
        for i in 0..200_000u32 {
            queue.add(i).unwrap();
        }
        drop(queue);
    }

    #[test]
    fn test_debug_output() {
        let mut queue = ListFifoQueue::new();
        queue.add(1).unwrap();
        queue.add(2).unwrap();
        assert_eq!(format!("{queue:?}"), "[1, 2]");
    }
}
