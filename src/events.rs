//! # Session Events
//!
//! Every state transition an actor goes through is reported as one [`SessionEvent`],
//! stamped with the simulated clock at the moment of the transition.
//!
//! [`EventLog::record`] turns each event into exactly one `tracing` line. The line
//! carries structured fields (`event`, `customer_id`, `waiter`, ...) plus a
//! human-readable message prefixed with the clock, e.g.
//!
//! ```text
//! INFO [11:01 am] Waiter U: Placing order for Customer 1 (count = 2) event="order_placed_with_kitchen" ...
//! ```
//!
//! A log created with [`EventLog::recording`] additionally forwards every event on
//! an unbounded channel, which is how the integration tests observe a session.

use crate::framework::SimTime;
use crate::model::{cook_name, waiter_name, CookId, CustomerId, WaiterId};
use serde::Serialize;
use std::fmt;
use tokio::sync::mpsc;
use tracing::info;

/// A staff member, for readiness and termination events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Staff {
    Waiter(WaiterId),
    Cook(CookId),
}

impl fmt::Display for Staff {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Staff::Waiter(waiter) => write!(f, "Waiter {}", waiter_name(*waiter)),
            Staff::Cook(cook) => write!(f, "Cook {}", cook_name(*cook)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum EventKind {
    StaffReady {
        staff: Staff,
    },
    CustomerArrived {
        customer_id: CustomerId,
        party: u32,
    },
    LeftLate {
        customer_id: CustomerId,
    },
    LeftNoTable {
        customer_id: CustomerId,
    },
    Seated {
        customer_id: CustomerId,
        waiter: WaiterId,
    },
    /// Waiter picked the order up from its inbound queue.
    OrderTaken {
        waiter: WaiterId,
        customer_id: CustomerId,
        party: u32,
    },
    /// Waiter handed the ticket to the kitchen.
    OrderSentToKitchen {
        waiter: WaiterId,
        customer_id: CustomerId,
        party: u32,
    },
    /// Customer learned its order went through.
    OrderPlaced {
        customer_id: CustomerId,
        waiter: WaiterId,
    },
    CookingStarted {
        cook: CookId,
        waiter: WaiterId,
        customer_id: CustomerId,
        party: u32,
    },
    FoodReady {
        cook: CookId,
        waiter: WaiterId,
        customer_id: CustomerId,
        party: u32,
    },
    FoodServed {
        waiter: WaiterId,
        customer_id: CustomerId,
    },
    /// Customer got its food after waiting `waited` minutes since arrival.
    FoodReceived {
        customer_id: CustomerId,
        waited: u32,
    },
    FinishedEating {
        customer_id: CustomerId,
    },
    StaffTerminated {
        staff: Staff,
    },
}

impl EventKind {
    /// Stable snake_case name used as the `event` field in log lines.
    pub fn name(&self) -> &'static str {
        match self {
            EventKind::StaffReady { .. } => "staff_ready",
            EventKind::CustomerArrived { .. } => "arrival",
            EventKind::LeftLate { .. } => "rejected_late",
            EventKind::LeftNoTable { .. } => "rejected_no_table",
            EventKind::Seated { .. } => "seated",
            EventKind::OrderTaken { .. } => "order_taken",
            EventKind::OrderSentToKitchen { .. } => "order_placed_with_kitchen",
            EventKind::OrderPlaced { .. } => "order_placed",
            EventKind::CookingStarted { .. } => "cooking_started",
            EventKind::FoodReady { .. } => "food_ready",
            EventKind::FoodServed { .. } => "food_served",
            EventKind::FoodReceived { .. } => "food_received",
            EventKind::FinishedEating { .. } => "eating_finished",
            EventKind::StaffTerminated { .. } => "actor_terminated",
        }
    }

    /// The customer this event is about, if any.
    pub fn customer_id(&self) -> Option<CustomerId> {
        match *self {
            EventKind::StaffReady { .. } | EventKind::StaffTerminated { .. } => None,
            EventKind::CustomerArrived { customer_id, .. }
            | EventKind::LeftLate { customer_id }
            | EventKind::LeftNoTable { customer_id }
            | EventKind::Seated { customer_id, .. }
            | EventKind::OrderTaken { customer_id, .. }
            | EventKind::OrderSentToKitchen { customer_id, .. }
            | EventKind::OrderPlaced { customer_id, .. }
            | EventKind::CookingStarted { customer_id, .. }
            | EventKind::FoodReady { customer_id, .. }
            | EventKind::FoodServed { customer_id, .. }
            | EventKind::FoodReceived { customer_id, .. }
            | EventKind::FinishedEating { customer_id } => Some(customer_id),
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            EventKind::StaffReady { staff } => write!(f, "{} is ready", staff),
            EventKind::CustomerArrived { customer_id, party } => {
                write!(f, "Customer {} arrives (count = {})", customer_id, party)
            }
            EventKind::LeftLate { customer_id } => {
                write!(f, "Customer {} leaves (late arrival)", customer_id)
            }
            EventKind::LeftNoTable { customer_id } => {
                write!(f, "Customer {} leaves (no empty table)", customer_id)
            }
            EventKind::Seated {
                customer_id,
                waiter,
            } => write!(
                f,
                "Customer {} seated, assigned to Waiter {}",
                customer_id,
                waiter_name(waiter)
            ),
            EventKind::OrderTaken {
                waiter,
                customer_id,
                party,
            } => write!(
                f,
                "Waiter {}: Taking order from Customer {} with {} persons",
                waiter_name(waiter),
                customer_id,
                party
            ),
            EventKind::OrderSentToKitchen {
                waiter,
                customer_id,
                party,
            } => write!(
                f,
                "Waiter {}: Placing order for Customer {} (count = {})",
                waiter_name(waiter),
                customer_id,
                party
            ),
            EventKind::OrderPlaced {
                customer_id,
                waiter,
            } => write!(
                f,
                "Customer {}: Order placed to Waiter {}",
                customer_id,
                waiter_name(waiter)
            ),
            EventKind::CookingStarted {
                cook,
                waiter,
                customer_id,
                party,
            } => write!(
                f,
                "Cook {}: Preparing order (Waiter {}, Customer {}, Count {})",
                cook_name(cook),
                waiter_name(waiter),
                customer_id,
                party
            ),
            EventKind::FoodReady {
                cook,
                waiter,
                customer_id,
                party,
            } => write!(
                f,
                "Cook {}: Prepared order (Waiter {}, Customer {}, Count {})",
                cook_name(cook),
                waiter_name(waiter),
                customer_id,
                party
            ),
            EventKind::FoodServed {
                waiter,
                customer_id,
            } => write!(
                f,
                "Waiter {}: Serving food to Customer {}",
                waiter_name(waiter),
                customer_id
            ),
            EventKind::FoodReceived {
                customer_id,
                waited,
            } => write!(
                f,
                "Customer {} gets food [Waiting time = {}]",
                customer_id, waited
            ),
            EventKind::FinishedEating { customer_id } => {
                write!(f, "Customer {} finishes eating and leaves", customer_id)
            }
            EventKind::StaffTerminated { staff } => write!(f, "{}: Leaving", staff),
        }
    }
}

/// One transition, stamped with the simulated clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SessionEvent {
    pub at: SimTime,
    pub kind: EventKind,
}

impl fmt::Display for SessionEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.at, self.kind)
    }
}

/// Cloneable sink for session events.
#[derive(Debug, Clone, Default)]
pub struct EventLog {
    recorder: Option<mpsc::UnboundedSender<SessionEvent>>,
}

impl EventLog {
    /// A log that only writes tracing lines.
    pub fn new() -> Self {
        Self::default()
    }

    /// A log that also forwards every event to the returned receiver.
    pub fn recording() -> (Self, mpsc::UnboundedReceiver<SessionEvent>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        (
            Self {
                recorder: Some(sender),
            },
            receiver,
        )
    }

    pub fn record(&self, at: SimTime, kind: EventKind) {
        let event = SessionEvent { at, kind };
        info!(
            event = kind.name(),
            minute = at.minutes(),
            customer_id = kind.customer_id(),
            "{}",
            event
        );
        if let Some(recorder) = &self.recorder {
            // receiver dropped means nobody is inspecting any more
            let _ = recorder.send(event);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lines_are_tagged_with_clock() {
        let event = SessionEvent {
            at: SimTime(1),
            kind: EventKind::OrderSentToKitchen {
                waiter: 0,
                customer_id: 1,
                party: 2,
            },
        };
        assert_eq!(
            event.to_string(),
            "[11:01 am] Waiter U: Placing order for Customer 1 (count = 2)"
        );

        let event = SessionEvent {
            at: SimTime(245),
            kind: EventKind::StaffTerminated {
                staff: Staff::Cook(1),
            },
        };
        assert_eq!(event.to_string(), "[3:05 pm] Cook D: Leaving");
    }

    #[tokio::test]
    async fn test_recording_forwards_events() {
        let (log, mut events) = EventLog::recording();
        log.record(SimTime(0), EventKind::LeftLate { customer_id: 7 });

        let event = events.recv().await.unwrap();
        assert_eq!(event.kind.customer_id(), Some(7));
        assert_eq!(event.kind.name(), "rejected_late");
    }
}
