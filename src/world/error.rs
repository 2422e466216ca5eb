//! Error types for the world actor.

use crate::framework::QueueError;
use crate::model::WaiterId;
use thiserror::Error;

/// Errors returned by [`World`](crate::world::World) operations and by the
/// [`WorldClient`](crate::world::WorldClient) channel.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum WorldError {
    /// The world actor stopped accepting requests.
    #[error("World actor closed")]
    ActorClosed,

    /// The world actor dropped the reply channel.
    #[error("World actor dropped response channel")]
    ActorDropped,

    #[error("Queue overflow: {0}")]
    QueueFull(#[from] QueueError),

    #[error("Unknown waiter index {0}")]
    UnknownWaiter(WaiterId),

    /// A table was released while every table was already free.
    #[error("Table released twice: every table is already free")]
    NoTableTaken,

    /// A cook tried to publish food while the waiter still had an unserved plate.
    #[error("Food-ready slot of waiter {0} is still occupied")]
    FoodSlotBusy(WaiterId),
}
