//! Error types for the customer, waiter and cook actors.

use crate::framework::SignalError;
use crate::model::WaiterId;
use crate::world::WorldError;
use thiserror::Error;

/// Anything that stops an actor before it reaches a terminal state.
///
/// Always fatal to the actor that hit it and to that actor only.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ActorError {
    /// A counting signal this actor waits on was torn down.
    #[error("Signal unavailable: {0}")]
    Signal(#[from] SignalError),

    /// The shared world could not be reached or refused the step.
    #[error("World request failed: {0}")]
    World(#[from] WorldError),

    #[error("No signal registered for waiter {0}")]
    UnknownWaiter(WaiterId),
}

impl ActorError {
    /// Process-style exit status for an actor that stopped with this error.
    /// A clean exit is 0.
    pub fn exit_code(&self) -> i32 {
        1
    }
}
