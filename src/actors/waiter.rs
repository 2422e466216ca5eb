//! # Waiter Actor
//!
//! Each wakeup is handled with one world step, checked in this order:
//!
//! 1. **Leave** - closing time passed, no plate waiting, no order queued and no
//!    ticket of this waiter still in the kitchen.
//! 2. **Serve** - carry the plate out, free the food slot for the next cook, wake
//!    the customer, then check again whether this was the last job.
//! 3. **Take order** - spend the order-taking time, forward a ticket to the
//!    kitchen, wake the customer ("order placed"), then wake a cook.
//! 4. **Idle** - woken only to re-check leaving; go back to sleep.
//!
//! Customers assigned to one waiter are handled in the order they were seated.

use crate::actors::{ActorContext, ActorError};
use crate::events::{EventKind, Staff};
use crate::framework::{CountingSignal, SimTime};
use crate::model::{CookTicket, VisitId, WaiterId};
use crate::world::WaiterStep;
use std::collections::HashMap;
use tracing::{debug, instrument, warn};

/// Runs one waiter until it passes the termination barrier.
///
/// Returns the simulated time the waiter left at.
///
/// # Errors
///
/// [`ActorError`] if the world or one of this waiter's signals becomes unreachable.
#[instrument(name = "waiter", skip(ctx))]
pub async fn run_waiter(ctx: ActorContext, waiter: WaiterId) -> Result<SimTime, ActorError> {
    let wakeup = ctx.signals.waiter(waiter)?.clone();
    let food_slot = ctx.signals.food_slot(waiter)?.clone();
    // customers whose order went to the kitchen, keyed by visit since ids may repeat
    let mut awaiting_food: HashMap<VisitId, CountingSignal> = HashMap::new();

    let now = ctx.world.now().await?;
    ctx.events.record(now, EventKind::StaffReady { staff: Staff::Waiter(waiter) });

    loop {
        wakeup.wait().await?;

        match ctx.world.waiter_step(waiter).await? {
            WaiterStep::Terminate { now } => {
                return Ok(leave(&ctx, waiter, now));
            }
            WaiterStep::ServeFood {
                visit,
                customer_id,
                now,
            } => {
                ctx.events.record(now, EventKind::FoodServed { waiter, customer_id });
                food_slot.signal();
                match awaiting_food.remove(&visit) {
                    Some(customer) => customer.signal(),
                    None => {
                        warn!(customer_id, visit, "Food ready for a customer this waiter never served")
                    }
                }
                if let Some(now) = ctx.world.waiter_try_leave(waiter).await? {
                    return Ok(leave(&ctx, waiter, now));
                }
            }
            WaiterStep::TakeOrder { request, now } => {
                let customer_id = request.customer_id;
                ctx.events.record(
                    now,
                    EventKind::OrderTaken {
                        waiter,
                        customer_id,
                        party: request.party,
                    },
                );

                ctx.work_for(ctx.config.order_minutes).await?;

                let ticket = CookTicket {
                    waiter,
                    visit: request.visit,
                    customer_id,
                    party: request.party,
                };
                let now = ctx.world.submit_ticket(ticket).await?;
                ctx.events.record(
                    now,
                    EventKind::OrderSentToKitchen {
                        waiter,
                        customer_id,
                        party: request.party,
                    },
                );

                request.signal.signal();
                awaiting_food.insert(request.visit, request.signal);
                ctx.signals.kitchen().signal();
            }
            WaiterStep::Idle { now } => {
                debug!(%now, "Woken with nothing to do");
            }
        }
    }
}

fn leave(ctx: &ActorContext, waiter: WaiterId, now: SimTime) -> SimTime {
    ctx.events.record(now, EventKind::StaffTerminated { staff: Staff::Waiter(waiter) });
    now
}
