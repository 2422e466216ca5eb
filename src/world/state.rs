//! # Shared World State
//!
//! Every field that actors coordinate through: the clock, the table bank, the
//! round-robin pointer, the per-waiter slots, the kitchen queue and the
//! termination barrier.
//!
//! `World` has no interior synchronization. Each method below is one indivisible
//! step: the reads that feed a decision and the writes that follow from it happen
//! in the same call, and [`WorldActor`](crate::world::WorldActor) runs calls one at a
//! time. Nothing here blocks or sleeps.

use crate::config::SessionConfig;
use crate::framework::{BoundedQueue, CountingSignal, SimTime};
use crate::model::{CookTicket, CustomerId, CustomerSpec, OrderRequest, VisitId, WaiterId};
use crate::world::error::WorldError;
use serde::Serialize;

/// Per-waiter coordination state.
#[derive(Debug)]
struct WaiterSlot {
    /// Seated customers whose order has not been taken yet.
    inbound: BoundedQueue<OrderRequest>,
    /// Cooked ticket waiting to be carried out.
    food_ready: Option<CookTicket>,
    /// Tickets forwarded to the kitchen and not yet cooked.
    in_kitchen: usize,
    exited: bool,
}

impl WaiterSlot {
    fn is_idle(&self) -> bool {
        self.food_ready.is_none() && self.inbound.is_empty() && self.in_kitchen == 0
    }
}

/// Result of a customer asking for a table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Admission {
    Late { now: SimTime },
    NoTable { now: SimTime },
    Seated { waiter: WaiterId, now: SimTime },
}

/// What a woken waiter should do next.
#[derive(Debug)]
pub enum WaiterStep {
    /// Closing time passed and nothing is left for this waiter. Already counted
    /// at the barrier.
    Terminate { now: SimTime },
    /// Carry food out to this visit's customer. The slot has been cleared.
    ServeFood {
        visit: VisitId,
        customer_id: CustomerId,
        now: SimTime,
    },
    /// Take this order. It has been removed from the inbound queue.
    TakeOrder { request: OrderRequest, now: SimTime },
    /// Woken with nothing to do.
    Idle { now: SimTime },
}

/// What a woken cook should do next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CookStep {
    /// Closing time passed and the kitchen queue is empty. Already counted at the
    /// barrier.
    Terminate { now: SimTime },
    Prepare { ticket: CookTicket, now: SimTime },
    Idle { now: SimTime },
}

/// Point-in-time copy of the counters, for reporting and tests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WorldSnapshot {
    pub now: SimTime,
    pub free_tables: usize,
    pub seated: usize,
    /// Staff that passed the termination barrier.
    pub exited: usize,
}

#[derive(Debug)]
pub struct World {
    clock: SimTime,
    session_end: SimTime,
    total_tables: usize,
    free_tables: usize,
    next_waiter: WaiterId,
    next_visit: VisitId,
    waiters: Vec<WaiterSlot>,
    kitchen: BoundedQueue<CookTicket>,
    exited: usize,
}

impl World {
    pub fn new(config: &SessionConfig) -> Self {
        let waiters = (0..config.waiters)
            .map(|_| WaiterSlot {
                inbound: BoundedQueue::with_capacity(config.waiter_queue_capacity),
                food_ready: None,
                in_kitchen: 0,
                exited: false,
            })
            .collect();
        Self {
            clock: SimTime::OPENING,
            session_end: SimTime(config.session_end),
            total_tables: config.tables,
            free_tables: config.tables,
            next_waiter: 0,
            next_visit: 0,
            waiters,
            kitchen: BoundedQueue::with_capacity(config.cook_queue_capacity),
            exited: 0,
        }
    }

    pub fn now(&self) -> SimTime {
        self.clock
    }

    fn closed(&self) -> bool {
        self.clock >= self.session_end
    }

    /// Moves the clock to at least `target`. A stale target is a no-op.
    pub fn advance_to(&mut self, target: SimTime) -> SimTime {
        self.clock = self.clock.max(target);
        self.clock
    }

    /// Arrival: merge the clock with the arrival time, then try to seat.
    ///
    /// Seating takes a table, picks the next waiter round-robin and queues the
    /// order with that waiter. The caller still has to wake the waiter.
    ///
    /// # Errors
    ///
    /// [`WorldError::QueueFull`] when the chosen waiter's queue is full. Nothing
    /// besides the clock is changed in that case.
    pub fn admit(
        &mut self,
        customer: CustomerSpec,
        signal: CountingSignal,
    ) -> Result<Admission, WorldError> {
        let now = self.advance_to(customer.arrival);
        if self.closed() {
            return Ok(Admission::Late { now });
        }
        if self.free_tables == 0 {
            return Ok(Admission::NoTable { now });
        }

        let waiter = self.next_waiter;
        let visit = self.next_visit;
        let slot = self.slot_mut(waiter)?;
        slot.inbound.enqueue(OrderRequest {
            visit,
            customer_id: customer.id,
            party: customer.party,
            signal,
        })?;
        self.free_tables -= 1;
        self.next_visit += 1;
        self.next_waiter = (waiter + 1) % self.waiters.len();
        Ok(Admission::Seated { waiter, now })
    }

    /// A served customer gives its table back.
    ///
    /// # Errors
    ///
    /// [`WorldError::NoTableTaken`] if every table is already free, which means a
    /// table was released twice.
    pub fn release_table(&mut self) -> Result<SimTime, WorldError> {
        if self.free_tables >= self.total_tables {
            return Err(WorldError::NoTableTaken);
        }
        self.free_tables += 1;
        Ok(self.clock)
    }

    /// One pass of a woken waiter: terminate, serve food, take an order, or idle,
    /// checked in that order.
    ///
    /// # Errors
    ///
    /// [`WorldError::UnknownWaiter`] for an index outside the pool.
    pub fn waiter_step(&mut self, waiter: WaiterId) -> Result<WaiterStep, WorldError> {
        if let Some(now) = self.waiter_try_leave(waiter)? {
            return Ok(WaiterStep::Terminate { now });
        }
        let now = self.clock;
        let slot = self.slot_mut(waiter)?;
        if let Some(ticket) = slot.food_ready.take() {
            return Ok(WaiterStep::ServeFood {
                visit: ticket.visit,
                customer_id: ticket.customer_id,
                now,
            });
        }
        if let Some(request) = slot.inbound.dequeue() {
            return Ok(WaiterStep::TakeOrder { request, now });
        }
        Ok(WaiterStep::Idle { now })
    }

    /// Termination check alone. Counts the waiter at the barrier and returns the
    /// exit time if closing time passed and the waiter has nothing outstanding.
    ///
    /// # Errors
    ///
    /// [`WorldError::UnknownWaiter`] for an index outside the pool.
    pub fn waiter_try_leave(&mut self, waiter: WaiterId) -> Result<Option<SimTime>, WorldError> {
        let closed = self.closed();
        let now = self.clock;
        let slot = self.slot_mut(waiter)?;
        if slot.exited || !closed || !slot.is_idle() {
            return Ok(None);
        }
        slot.exited = true;
        self.exited += 1;
        Ok(Some(now))
    }

    /// Queues a ticket for the cooks. The caller still has to wake a cook.
    ///
    /// # Errors
    ///
    /// [`WorldError::QueueFull`] when the kitchen queue is full,
    /// [`WorldError::UnknownWaiter`] when the ticket names no waiter.
    pub fn submit_ticket(&mut self, ticket: CookTicket) -> Result<SimTime, WorldError> {
        if ticket.waiter >= self.waiters.len() {
            return Err(WorldError::UnknownWaiter(ticket.waiter));
        }
        self.kitchen.enqueue(ticket)?;
        self.slot_mut(ticket.waiter)?.in_kitchen += 1;
        Ok(self.clock)
    }

    /// One pass of a woken cook: terminate if closed and the queue is drained,
    /// otherwise take the oldest ticket.
    pub fn cook_step(&mut self) -> CookStep {
        let now = self.clock;
        if self.closed() && self.kitchen.is_empty() {
            self.exited += 1;
            return CookStep::Terminate { now };
        }
        match self.kitchen.dequeue() {
            Some(ticket) => CookStep::Prepare { ticket, now },
            None => CookStep::Idle { now },
        }
    }

    /// Publishes a cooked ticket in its waiter's food-ready slot.
    ///
    /// # Errors
    ///
    /// [`WorldError::FoodSlotBusy`] if the slot still holds an unserved customer,
    /// [`WorldError::UnknownWaiter`] when the ticket names no waiter.
    pub fn food_ready(&mut self, ticket: CookTicket) -> Result<SimTime, WorldError> {
        let now = self.clock;
        let slot = self.slot_mut(ticket.waiter)?;
        if slot.food_ready.is_some() {
            return Err(WorldError::FoodSlotBusy(ticket.waiter));
        }
        slot.food_ready = Some(ticket);
        slot.in_kitchen = slot.in_kitchen.saturating_sub(1);
        Ok(now)
    }

    /// End of the business day: the clock reaches at least the session end.
    pub fn close(&mut self) -> SimTime {
        self.advance_to(self.session_end)
    }

    /// Staff that have passed the termination barrier.
    pub fn exited(&self) -> usize {
        self.exited
    }

    pub fn snapshot(&self) -> WorldSnapshot {
        WorldSnapshot {
            now: self.clock,
            free_tables: self.free_tables,
            seated: self.total_tables - self.free_tables,
            exited: self.exited,
        }
    }

    fn slot_mut(&mut self, waiter: WaiterId) -> Result<&mut WaiterSlot, WorldError> {
        self.waiters
            .get_mut(waiter)
            .ok_or(WorldError::UnknownWaiter(waiter))
    }
}
