//! Fixed-capacity sliding window.
//!
//! Items enter at the back and leave from the front. Reads and in-place
//! replacement address items either from the front (oldest first) or by
//! offset from the back, where offset 0 is the most recently pushed item.
//!
//! ```text
//!  front (oldest)                 back (newest)
//!  [ item3 ][ item2 ][ item1 ][ item0 ]    <- back offsets
//!      ^
//!      flush() returns this only when len == capacity
//! ```

use std::collections::VecDeque;

/// Bounded FIFO with offset-from-back access.
#[derive(Clone, Debug)]
pub struct SlidingWindow<T> {
    items: VecDeque<T>,
    capacity: usize,
}

impl<T> SlidingWindow<T> {
    /// Create an empty window holding at most `capacity` items.
    pub fn new(capacity: usize) -> Self {
        debug_assert!(capacity > 0, "window capacity must be positive");
        Self {
            items: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.items.len() >= self.capacity
    }

    /// Push at the back. A full window rejects the item and hands it back.
    pub fn push(&mut self, item: T) -> Result<(), T> {
        if self.is_full() {
            return Err(item);
        }
        self.items.push_back(item);
        Ok(())
    }

    /// Remove and return the oldest item, but only when the window is
    /// exactly at capacity. Anything younger still has lookback grace.
    pub fn flush(&mut self) -> Option<T> {
        if self.items.len() == self.capacity {
            self.items.pop_front()
        } else {
            None
        }
    }

    /// Remove and return the oldest item regardless of fill level.
    pub fn pop_oldest(&mut self) -> Option<T> {
        self.items.pop_front()
    }

    /// The oldest item.
    pub fn peek_front(&self) -> Option<&T> {
        self.items.front()
    }

    /// The item `offset` positions before the most recently pushed one.
    pub fn peek_back(&self, offset: usize) -> Option<&T> {
        let index = self.back_index(offset)?;
        self.items.get(index)
    }

    /// Overwrite the item `offset` positions before the most recently
    /// pushed one. Returns `false` (dropping `item`) when `offset` reaches
    /// past the oldest item.
    pub fn replace_back(&mut self, offset: usize, item: T) -> bool {
        match self.back_index(offset).and_then(|i| self.items.get_mut(i)) {
            Some(slot) => {
                *slot = item;
                true
            }
            None => false,
        }
    }

    fn back_index(&self, offset: usize) -> Option<usize> {
        offset
            .checked_add(1)
            .and_then(|depth| self.items.len().checked_sub(depth))
    }
}
