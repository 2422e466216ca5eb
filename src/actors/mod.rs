//! # Actors
//!
//! The three roles of the restaurant. Each is a plain async function that runs one
//! actor's state machine to a terminal state; the session spawns one Tokio task per
//! customer, per waiter and per cook.
//!
//! ## Structure
//!
//! - [`customer`] - arrive, get seated or turned away, order, wait, eat, leave
//! - [`waiter`] - take orders, forward tickets, carry food, leave after closing
//! - [`cook`] - cook tickets in FIFO order, leave after closing once drained
//! - [`error`] - [`ActorError`]
//!
//! ## Coordination
//!
//! Actors never share memory directly. Decisions go through the
//! [`WorldClient`](crate::world::WorldClient); wakeups go through the
//! [`StaffSignals`] counting signals:
//!
//! - one wakeup signal per waiter (new customer, food ready, closing fan-out)
//! - one "food slot free" signal per waiter, starting at 1, which a cook must take
//!   before publishing food for that waiter
//! - one kitchen signal shared by all cooks (new ticket, closing)

pub mod cook;
pub mod customer;
pub mod error;
pub mod waiter;

pub use cook::run_cook;
pub use customer::run_customer;
pub use error::*;
pub use waiter::run_waiter;

use crate::config::SessionConfig;
use crate::events::EventLog;
use crate::framework::{CountingSignal, SimTime};
use crate::model::WaiterId;
use crate::world::WorldClient;
use std::sync::Arc;

/// Wakeup signals for the staff pool.
#[derive(Debug)]
pub struct StaffSignals {
    waiters: Vec<CountingSignal>,
    food_slots: Vec<CountingSignal>,
    kitchen: CountingSignal,
}

impl StaffSignals {
    pub fn new(waiters: usize) -> Self {
        Self {
            waiters: (0..waiters).map(|_| CountingSignal::new()).collect(),
            food_slots: (0..waiters).map(|_| CountingSignal::with_pending(1)).collect(),
            kitchen: CountingSignal::new(),
        }
    }

    /// # Errors
    ///
    /// [`ActorError::UnknownWaiter`] for an index outside the pool.
    pub fn waiter(&self, waiter: WaiterId) -> Result<&CountingSignal, ActorError> {
        self.waiters
            .get(waiter)
            .ok_or(ActorError::UnknownWaiter(waiter))
    }

    /// # Errors
    ///
    /// [`ActorError::UnknownWaiter`] for an index outside the pool.
    pub fn food_slot(&self, waiter: WaiterId) -> Result<&CountingSignal, ActorError> {
        self.food_slots
            .get(waiter)
            .ok_or(ActorError::UnknownWaiter(waiter))
    }

    pub fn kitchen(&self) -> &CountingSignal {
        &self.kitchen
    }

    /// Wakes every waiter once so each re-checks whether it may leave.
    pub fn wake_all_waiters(&self) {
        for signal in &self.waiters {
            signal.signal();
        }
    }

    /// Tears every signal down. Anything still waiting fails with
    /// [`SignalError::Closed`](crate::framework::SignalError::Closed).
    pub fn close_all(&self) {
        self.waiters
            .iter()
            .chain(&self.food_slots)
            .chain(std::iter::once(&self.kitchen))
            .for_each(CountingSignal::close);
    }
}

/// Everything an actor needs to take part in the session.
#[derive(Clone)]
pub struct ActorContext {
    pub world: WorldClient,
    pub events: EventLog,
    pub config: Arc<SessionConfig>,
    pub signals: Arc<StaffSignals>,
}

impl ActorContext {
    /// Spends `minutes` of simulated work: a real-time pause outside the world,
    /// then a clock merge.
    pub(crate) async fn work_for(&self, minutes: u32) -> Result<SimTime, ActorError> {
        let now = self
            .world
            .advance_by(minutes, self.config.pause_for(minutes))
            .await?;
        Ok(now)
    }
}
