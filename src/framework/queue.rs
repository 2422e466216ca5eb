//! # Bounded Ring Buffer
//!
//! Fixed-capacity FIFO used for the per-waiter inbound queues and the global kitchen
//! queue. The buffer never grows and never overwrites: a full buffer rejects the
//! value with [`QueueError::Full`] instead of wrapping `back` over `front` and
//! corrupting an order that is still in flight.
//!
//! The queue itself is not synchronized. It lives inside [`World`](crate::world::World),
//! which is only ever touched by the world actor's message loop.

use crate::framework::error::QueueError;

/// Fixed-capacity FIFO with wraparound `front` / `back` indices.
#[derive(Debug, Clone)]
pub struct BoundedQueue<T> {
    slots: Vec<Option<T>>,
    front: usize,
    back: usize,
    len: usize,
}

impl<T> BoundedQueue<T> {
    /// Creates an empty queue holding at most `capacity` values.
    ///
    /// A zero capacity is accepted and yields a queue that rejects every enqueue;
    /// [`SessionConfig::validate`](crate::config::SessionConfig::validate) keeps
    /// such queues out of a running session.
    pub fn with_capacity(capacity: usize) -> Self {
        let mut slots = Vec::with_capacity(capacity);
        slots.resize_with(capacity, || None);
        Self {
            slots,
            front: 0,
            back: 0,
            len: 0,
        }
    }

    /// Writes `value` at `back` and advances `back`.
    ///
    /// # Errors
    ///
    /// [`QueueError::Full`] when `len == capacity`; the queue is left untouched.
    pub fn enqueue(&mut self, value: T) -> Result<(), QueueError> {
        let capacity = self.capacity();
        if self.len == capacity {
            return Err(QueueError::Full { capacity });
        }
        self.slots[self.back] = Some(value);
        self.back = (self.back + 1) % capacity;
        self.len += 1;
        Ok(())
    }

    /// Takes the value at `front` and advances `front`.
    pub fn dequeue(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }
        let value = self.slots[self.front].take();
        self.front = (self.front + 1) % self.capacity();
        self.len -= 1;
        value
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }
}
