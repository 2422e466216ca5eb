//! # Customer Actor
//!
//! `Arrive → SeekTable → {LeftLate | LeftNoTable | Seated} → PlaceOrder → AwaitFood
//! → Eat → Leave`
//!
//! The arrival time is an input to the clock, not a duration: the customer merges
//! the clock with its scheduled arrival before asking for a table. Once seated it
//! blocks twice on its own signal, first until its waiter has taken the order, then
//! until the food is on the table.

use crate::actors::{ActorContext, ActorError};
use crate::events::EventKind;
use crate::framework::CountingSignal;
use crate::model::{CustomerSpec, Departure};
use crate::world::Admission;
use tracing::instrument;

/// Runs one customer visit to its end.
///
/// # Errors
///
/// [`ActorError`] if the world or a signal becomes unreachable. A late arrival or a
/// full restaurant is not an error; see [`Departure`].
#[instrument(name = "customer", skip_all, fields(customer_id = customer.id))]
pub async fn run_customer(ctx: ActorContext, customer: CustomerSpec) -> Result<Departure, ActorError> {
    // created on admission, dropped on departure
    let signal = CountingSignal::new();

    let admission = ctx.world.admit(customer, signal.clone()).await?;
    let arrived = EventKind::CustomerArrived {
        customer_id: customer.id,
        party: customer.party,
    };
    let waiter = match admission {
        Admission::Late { now } => {
            ctx.events.record(now, arrived);
            ctx.events.record(now, EventKind::LeftLate { customer_id: customer.id });
            return Ok(Departure::Late);
        }
        Admission::NoTable { now } => {
            ctx.events.record(now, arrived);
            ctx.events.record(now, EventKind::LeftNoTable { customer_id: customer.id });
            return Ok(Departure::NoTable);
        }
        Admission::Seated { waiter, now } => {
            ctx.events.record(now, arrived);
            ctx.events.record(
                now,
                EventKind::Seated {
                    customer_id: customer.id,
                    waiter,
                },
            );
            waiter
        }
    };
    ctx.signals.waiter(waiter)?.signal();

    signal.wait().await?;
    let now = ctx.world.now().await?;
    ctx.events.record(
        now,
        EventKind::OrderPlaced {
            customer_id: customer.id,
            waiter,
        },
    );

    signal.wait().await?;
    let now = ctx.world.now().await?;
    ctx.events.record(
        now,
        EventKind::FoodReceived {
            customer_id: customer.id,
            waited: now.since(customer.arrival),
        },
    );

    ctx.work_for(ctx.config.eat_minutes).await?;

    let now = ctx.world.release_table().await?;
    ctx.events.record(now, EventKind::FinishedEating { customer_id: customer.id });
    Ok(Departure::Served)
}
