//! # Session Configuration
//!
//! Every constant the restaurant runs on: pool sizes, durations, queue capacities
//! and the real-time length of one simulated minute. `Default` reproduces the
//! standard day (10 tables, 5 waiters, 2 cooks, closing at 3:00 pm).

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Waiters are named `U`, `V`, `W`, ... so the pool cannot outgrow the alphabet.
pub const MAX_WAITERS: usize = 26;

/// Errors raised when a configuration cannot run a session.
#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} must be at least 1")]
    Zero(&'static str),
    #[error("At most {MAX_WAITERS} waiters are supported, got {0}")]
    TooManyWaiters(usize),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Seating capacity.
    pub tables: usize,
    pub waiters: usize,
    pub cooks: usize,
    /// Minutes after opening at which arrivals are turned away and staff may leave.
    pub session_end: u32,
    pub order_minutes: u32,
    pub cook_minutes_per_person: u32,
    pub eat_minutes: u32,
    pub waiter_queue_capacity: usize,
    pub cook_queue_capacity: usize,
    /// Real time that stands for one simulated minute.
    pub minute: Duration,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            tables: 10,
            waiters: 5,
            cooks: 2,
            session_end: 240,
            order_minutes: 1,
            cook_minutes_per_person: 5,
            eat_minutes: 30,
            waiter_queue_capacity: 100,
            cook_queue_capacity: 200,
            minute: Duration::from_millis(100),
        }
    }
}

impl SessionConfig {
    /// Number of staff actors that must pass the termination barrier.
    pub fn actor_count(&self) -> usize {
        self.waiters + self.cooks
    }

    /// Real-time pause standing for `minutes` of simulated work.
    pub fn pause_for(&self, minutes: u32) -> Duration {
        self.minute.saturating_mul(minutes)
    }

    /// # Errors
    ///
    /// [`ConfigError`] for an empty pool, a zero-capacity queue or more waiters
    /// than there are waiter names.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let sizes = [
            ("tables", self.tables),
            ("waiters", self.waiters),
            ("cooks", self.cooks),
            ("waiter_queue_capacity", self.waiter_queue_capacity),
            ("cook_queue_capacity", self.cook_queue_capacity),
        ];
        if let Some((name, _)) = sizes.iter().find(|(_, value)| *value == 0) {
            return Err(ConfigError::Zero(*name));
        }
        if self.waiters > MAX_WAITERS {
            return Err(ConfigError::TooManyWaiters(self.waiters));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_standard_day() {
        let config = SessionConfig::default();
        assert_eq!(config.actor_count(), 7);
        assert_eq!(config.pause_for(30), Duration::from_secs(3));
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn test_validate_rejects_empty_pools() {
        let config = SessionConfig {
            cooks: 0,
            ..SessionConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::Zero("cooks")));

        let config = SessionConfig {
            waiters: 27,
            ..SessionConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::TooManyWaiters(27)));
    }
}
