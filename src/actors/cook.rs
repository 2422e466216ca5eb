//! # Cook Actor
//!
//! Cooks share one kitchen queue and one wakeup signal. A woken cook either leaves
//! (closing time passed and the queue is drained) or takes the oldest ticket,
//! cooks it for 5 minutes per person, waits until the ticket's waiter has a free
//! food slot, publishes the plate there and wakes the waiter.
//!
//! A leaving cook wakes every waiter once so that waiters still asleep get a
//! chance to leave as well.

use crate::actors::{ActorContext, ActorError};
use crate::events::{EventKind, Staff};
use crate::framework::SimTime;
use crate::model::CookId;
use crate::world::CookStep;
use tracing::{debug, instrument};

/// Runs one cook until it passes the termination barrier.
///
/// Returns the simulated time the cook left at.
///
/// # Errors
///
/// [`ActorError`] if the world or a signal becomes unreachable.
#[instrument(name = "cook", skip(ctx))]
pub async fn run_cook(ctx: ActorContext, cook: CookId) -> Result<SimTime, ActorError> {
    let now = ctx.world.now().await?;
    ctx.events.record(now, EventKind::StaffReady { staff: Staff::Cook(cook) });

    loop {
        ctx.signals.kitchen().wait().await?;

        let ticket = match ctx.world.cook_step().await? {
            CookStep::Terminate { now } => {
                ctx.events.record(now, EventKind::StaffTerminated { staff: Staff::Cook(cook) });
                ctx.signals.wake_all_waiters();
                return Ok(now);
            }
            CookStep::Idle { now } => {
                debug!(%now, "Woken with an empty kitchen queue");
                continue;
            }
            CookStep::Prepare { ticket, now } => {
                ctx.events.record(
                    now,
                    EventKind::CookingStarted {
                        cook,
                        waiter: ticket.waiter,
                        customer_id: ticket.customer_id,
                        party: ticket.party,
                    },
                );
                ticket
            }
        };

        ctx.work_for(ctx.config.cook_minutes_per_person * ticket.party)
            .await?;

        ctx.signals.food_slot(ticket.waiter)?.wait().await?;
        let now = ctx.world.food_ready(ticket).await?;
        ctx.events.record(
            now,
            EventKind::FoodReady {
                cook,
                waiter: ticket.waiter,
                customer_id: ticket.customer_id,
                party: ticket.party,
            },
        );
        ctx.signals.waiter(ticket.waiter)?.signal();
    }
}
