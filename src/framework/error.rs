//! # Primitive Errors
//!
//! Failures raised by the synchronization primitives themselves. Higher layers wrap
//! these with `#[from]` so the original cause survives up to the actor that hit it.

/// Errors raised by [`BoundedQueue`](crate::framework::BoundedQueue).
#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum QueueError {
    #[error("Queue full (capacity {capacity})")]
    Full { capacity: usize },
}

/// Errors raised by [`CountingSignal`](crate::framework::CountingSignal).
#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum SignalError {
    #[error("Signal closed")]
    Closed,
}
