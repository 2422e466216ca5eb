//! # World Client
//!
//! Cloneable handle every actor uses to reach the [`WorldActor`](crate::world::WorldActor).
//! Each method sends one [`WorldRequest`] and waits for its reply.

use crate::framework::{CountingSignal, SimTime};
use crate::model::{CookTicket, CustomerSpec, WaiterId};
use crate::world::error::WorldError;
use crate::world::message::{Response, WorldRequest};
use crate::world::state::{Admission, CookStep, WaiterStep, WorldSnapshot};
use std::time::Duration;
use tokio::sync::{mpsc, oneshot};

#[derive(Clone)]
pub struct WorldClient {
    sender: mpsc::Sender<WorldRequest>,
}

impl WorldClient {
    pub fn new(sender: mpsc::Sender<WorldRequest>) -> Self {
        Self { sender }
    }

    async fn request<T>(
        &self,
        make: impl FnOnce(Response<T>) -> WorldRequest,
    ) -> Result<T, WorldError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(make(respond_to))
            .await
            .map_err(|_| WorldError::ActorClosed)?;
        response.await.map_err(|_| WorldError::ActorDropped)?
    }

    pub async fn now(&self) -> Result<SimTime, WorldError> {
        self.request(|respond_to| WorldRequest::Now { respond_to })
            .await
    }

    /// Merges the clock with `target`; returns the clock afterwards.
    pub async fn advance_to(&self, target: SimTime) -> Result<SimTime, WorldError> {
        self.request(|respond_to| WorldRequest::AdvanceTo { target, respond_to })
            .await
    }

    /// Spends `minutes` of simulated work.
    ///
    /// Reads the clock, sleeps for `pause` without touching the world, then merges
    /// the clock with `start + minutes`. If another actor already pushed the clock
    /// past that point the merge changes nothing.
    pub async fn advance_by(&self, minutes: u32, pause: Duration) -> Result<SimTime, WorldError> {
        let start = self.now().await?;
        tokio::time::sleep(pause).await;
        self.advance_to(start.plus(minutes)).await
    }

    pub async fn admit(
        &self,
        customer: CustomerSpec,
        signal: CountingSignal,
    ) -> Result<Admission, WorldError> {
        self.request(|respond_to| WorldRequest::Admit {
            customer,
            signal,
            respond_to,
        })
        .await
    }

    pub async fn release_table(&self) -> Result<SimTime, WorldError> {
        self.request(|respond_to| WorldRequest::ReleaseTable { respond_to })
            .await
    }

    pub async fn waiter_step(&self, waiter: WaiterId) -> Result<WaiterStep, WorldError> {
        self.request(|respond_to| WorldRequest::WaiterStep { waiter, respond_to })
            .await
    }

    pub async fn waiter_try_leave(&self, waiter: WaiterId) -> Result<Option<SimTime>, WorldError> {
        self.request(|respond_to| WorldRequest::WaiterTryLeave { waiter, respond_to })
            .await
    }

    pub async fn submit_ticket(&self, ticket: CookTicket) -> Result<SimTime, WorldError> {
        self.request(|respond_to| WorldRequest::SubmitTicket { ticket, respond_to })
            .await
    }

    pub async fn cook_step(&self) -> Result<CookStep, WorldError> {
        self.request(|respond_to| WorldRequest::CookStep { respond_to })
            .await
    }

    pub async fn food_ready(&self, ticket: CookTicket) -> Result<SimTime, WorldError> {
        self.request(|respond_to| WorldRequest::FoodReady { ticket, respond_to })
            .await
    }

    pub async fn close(&self) -> Result<SimTime, WorldError> {
        self.request(|respond_to| WorldRequest::Close { respond_to })
            .await
    }

    pub async fn snapshot(&self) -> Result<WorldSnapshot, WorldError> {
        self.request(|respond_to| WorldRequest::Snapshot { respond_to })
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SessionConfig;
    use crate::world::{World, WorldActor};

    #[tokio::test]
    async fn test_requests_round_trip_through_actor() {
        let (actor, client) = WorldActor::new(World::new(&SessionConfig::default()), 8);
        let handle = tokio::spawn(actor.run());

        let admission = client
            .admit(CustomerSpec::new(1, 3, 2), CountingSignal::new())
            .await
            .unwrap();
        assert_eq!(
            admission,
            Admission::Seated {
                waiter: 0,
                now: SimTime(3)
            }
        );
        assert_eq!(client.snapshot().await.unwrap().free_tables, 9);

        drop(client);
        let world = handle.await.unwrap();
        assert_eq!(world.now(), SimTime(3));
    }

    #[tokio::test(start_paused = true)]
    async fn test_advance_by_pauses_then_merges() {
        let (actor, client) = WorldActor::new(World::new(&SessionConfig::default()), 8);
        tokio::spawn(actor.run());

        let started = tokio::time::Instant::now();
        let now = client
            .advance_by(5, Duration::from_millis(500))
            .await
            .unwrap();
        assert_eq!(now, SimTime(5));
        assert!(started.elapsed() >= Duration::from_millis(500));

        // a stale advance cannot move the clock backwards
        client.advance_to(SimTime(50)).await.unwrap();
        assert_eq!(client.advance_to(SimTime(20)).await.unwrap(), SimTime(50));
    }

    #[tokio::test]
    async fn test_closed_actor_reports_error() {
        let (actor, client) = WorldActor::new(World::new(&SessionConfig::default()), 8);
        drop(actor);
        assert_eq!(client.now().await, Err(WorldError::ActorClosed));
    }
}
