//! # World Actor
//!
//! The task that owns the [`World`]. It is the restaurant's single mutual-exclusion
//! domain: requests are processed strictly one at a time, so every decision an
//! actor makes (seat a customer, hand off an order, flip a food-ready slot, bump
//! the barrier) sees and updates the shared fields as one group.
//!
//! No request handler awaits anything except sending the reply. Long work such as
//! cooking or eating happens in the requesting actor, between requests, so the
//! world stays available to everyone else meanwhile.

use crate::world::client::WorldClient;
use crate::world::message::WorldRequest;
use crate::world::state::World;
use tokio::sync::mpsc;
use tracing::{debug, info};

/// The server half of the world: owns the state and the request receiver.
pub struct WorldActor {
    receiver: mpsc::Receiver<WorldRequest>,
    world: World,
}

impl WorldActor {
    /// Creates the actor and the client used to reach it.
    ///
    /// # Arguments
    ///
    /// * `world` - initial state, usually `World::new(&config)`
    /// * `buffer_size` - capacity of the request channel; senders wait when it is full
    pub fn new(world: World, buffer_size: usize) -> (Self, WorldClient) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self { receiver, world };
        (actor, WorldClient::new(sender))
    }

    /// Runs the request loop until every client has been dropped, then hands the
    /// final state back.
    pub async fn run(mut self) -> World {
        info!(now = %self.world.now(), "World actor started");

        while let Some(request) = self.receiver.recv().await {
            match request {
                WorldRequest::Now { respond_to } => {
                    let _ = respond_to.send(Ok(self.world.now()));
                }
                WorldRequest::AdvanceTo { target, respond_to } => {
                    let before = self.world.now();
                    let now = self.world.advance_to(target);
                    if now != target {
                        debug!(%before, attempted = %target, "Clock merge was a no-op");
                    }
                    let _ = respond_to.send(Ok(now));
                }
                WorldRequest::Admit {
                    customer,
                    signal,
                    respond_to,
                } => {
                    let result = self.world.admit(customer, signal);
                    debug!(customer_id = customer.id, ?result, "Admit");
                    let _ = respond_to.send(result);
                }
                WorldRequest::ReleaseTable { respond_to } => {
                    let _ = respond_to.send(self.world.release_table());
                }
                WorldRequest::WaiterStep { waiter, respond_to } => {
                    let result = self.world.waiter_step(waiter);
                    debug!(waiter, ?result, "Waiter step");
                    let _ = respond_to.send(result);
                }
                WorldRequest::WaiterTryLeave { waiter, respond_to } => {
                    let _ = respond_to.send(self.world.waiter_try_leave(waiter));
                }
                WorldRequest::SubmitTicket { ticket, respond_to } => {
                    debug!(?ticket, "Submit ticket");
                    let _ = respond_to.send(self.world.submit_ticket(ticket));
                }
                WorldRequest::CookStep { respond_to } => {
                    let step = self.world.cook_step();
                    debug!(?step, "Cook step");
                    let _ = respond_to.send(Ok(step));
                }
                WorldRequest::FoodReady { ticket, respond_to } => {
                    debug!(?ticket, "Food ready");
                    let _ = respond_to.send(self.world.food_ready(ticket));
                }
                WorldRequest::Close { respond_to } => {
                    let _ = respond_to.send(Ok(self.world.close()));
                }
                WorldRequest::Snapshot { respond_to } => {
                    let _ = respond_to.send(Ok(self.world.snapshot()));
                }
            }
        }

        info!(now = %self.world.now(), exited = self.world.exited(), "World actor shutdown");
        self.world
    }
}
