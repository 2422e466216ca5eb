//! Synchronization primitives shared by every actor.
//!
//! # Main Components
//!
//! - [`BoundedQueue`] - fixed-capacity ring buffer for order handoff
//! - [`CountingSignal`] - wakeup channel that never loses a notification
//! - [`SimTime`] - simulated minutes since opening, with a 12-hour `Display`
//! - [`QueueError`], [`SignalError`] - primitive failures

pub mod error;
pub mod queue;
pub mod signal;
pub mod time;

// Re-export core types for convenience
pub use error::{QueueError, SignalError};
pub use queue::BoundedQueue;
pub use signal::CountingSignal;
pub use time::SimTime;
