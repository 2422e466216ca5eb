//! # Counting Signal
//!
//! A wakeup channel that remembers every notification. `signal()` adds one pending
//! wakeup, `wait()` blocks until one is pending and consumes it. Because the count
//! accumulates, a producer may signal before the consumer starts waiting and the
//! wakeup is still delivered.
//!
//! Built on [`tokio::sync::Semaphore`]: a signal is a permit, a wait acquires one
//! permit and forgets it so it is never returned.

use crate::framework::error::SignalError;
use std::sync::Arc;
use tokio::sync::Semaphore;

/// Cloneable handle to one counting signal. Clones share the same count.
#[derive(Debug, Clone)]
pub struct CountingSignal {
    permits: Arc<Semaphore>,
}

impl CountingSignal {
    /// A signal with no pending wakeups.
    pub fn new() -> Self {
        Self::with_pending(0)
    }

    /// A signal that starts with `pending` wakeups already banked.
    pub fn with_pending(pending: usize) -> Self {
        Self {
            permits: Arc::new(Semaphore::new(pending)),
        }
    }

    /// Banks one wakeup. Never blocks.
    pub fn signal(&self) {
        self.permits.add_permits(1);
    }

    /// Waits for a banked wakeup and consumes it.
    ///
    /// # Errors
    ///
    /// [`SignalError::Closed`] once [`close`](Self::close) has been called.
    pub async fn wait(&self) -> Result<(), SignalError> {
        let permit = self
            .permits
            .acquire()
            .await
            .map_err(|_| SignalError::Closed)?;
        permit.forget();
        Ok(())
    }

    /// Fails every current and future `wait`.
    pub fn close(&self) {
        self.permits.close();
    }
}

impl Default for CountingSignal {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn test_signal_before_wait_is_not_lost() {
        let signal = CountingSignal::new();
        signal.signal();
        signal.signal();

        signal.wait().await.unwrap();
        signal.wait().await.unwrap();
        // both wakeups consumed, a third wait has nothing to take
        let third = tokio::time::timeout(Duration::from_millis(10), signal.wait()).await;
        assert!(third.is_err());
    }

    #[tokio::test]
    async fn test_wait_blocks_until_signalled() {
        let signal = CountingSignal::new();
        let waiter = signal.clone();
        let handle = tokio::spawn(async move { waiter.wait().await });

        tokio::time::sleep(Duration::from_millis(10)).await;
        assert!(!handle.is_finished());

        signal.signal();
        handle.await.unwrap().unwrap();
    }

    #[tokio::test]
    async fn test_close_fails_waiters() {
        let signal = CountingSignal::with_pending(1);
        signal.close();
        assert_eq!(signal.wait().await, Err(SignalError::Closed));
    }
}
