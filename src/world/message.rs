//! # World Requests
//!
//! One variant per indivisible step on the shared state. The world actor handles a
//! request from start to reply before looking at the next one, so each variant is
//! exactly one hold of the restaurant-wide lock.

use crate::framework::{CountingSignal, SimTime};
use crate::model::{CookTicket, CustomerSpec, WaiterId};
use crate::world::error::WorldError;
use crate::world::state::{Admission, CookStep, WaiterStep, WorldSnapshot};
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by the world actor.
pub type Response<T> = oneshot::Sender<Result<T, WorldError>>;

#[derive(Debug)]
pub enum WorldRequest {
    Now {
        respond_to: Response<SimTime>,
    },
    AdvanceTo {
        target: SimTime,
        respond_to: Response<SimTime>,
    },
    Admit {
        customer: CustomerSpec,
        signal: CountingSignal,
        respond_to: Response<Admission>,
    },
    ReleaseTable {
        respond_to: Response<SimTime>,
    },
    WaiterStep {
        waiter: WaiterId,
        respond_to: Response<WaiterStep>,
    },
    WaiterTryLeave {
        waiter: WaiterId,
        respond_to: Response<Option<SimTime>>,
    },
    SubmitTicket {
        ticket: CookTicket,
        respond_to: Response<SimTime>,
    },
    CookStep {
        respond_to: Response<CookStep>,
    },
    FoodReady {
        ticket: CookTicket,
        respond_to: Response<SimTime>,
    },
    Close {
        respond_to: Response<SimTime>,
    },
    Snapshot {
        respond_to: Response<WorldSnapshot>,
    },
}
