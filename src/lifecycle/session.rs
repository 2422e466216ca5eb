use crate::actors::{run_cook, run_customer, run_waiter, ActorContext, ActorError, StaffSignals};
use crate::config::{ConfigError, SessionConfig};
use crate::events::{EventLog, Staff};
use crate::feed::FeedError;
use crate::framework::SimTime;
use crate::model::{CustomerId, CustomerSpec, Departure};
use crate::world::{World, WorldActor, WorldClient, WorldError};
use serde::Serialize;
use std::sync::Arc;
use tokio::task::{JoinError, JoinHandle};
use tracing::{error, info};

/// Capacity of the world actor's request channel.
const WORLD_REQUEST_BUFFER: usize = 64;

/// Errors that stop the session as a whole.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Feed(#[from] FeedError),

    #[error("World unavailable: {0}")]
    World(#[from] WorldError),

    #[error("World actor task failed: {0}")]
    Join(#[from] JoinError),

    /// Every staff task finished cleanly but the barrier count disagrees.
    #[error("Termination barrier reached {exited}, expected {expected}")]
    Barrier { exited: usize, expected: usize },
}

/// Which actor a failure belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ActorRole {
    Customer(CustomerId),
    Staff(Staff),
}

/// An actor that stopped without reaching a terminal state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActorFailure {
    pub actor: ActorRole,
    pub exit_code: i32,
    pub error: String,
}

/// Outcome of one business day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionReport {
    /// Clock when the last customer was gone and the day was closed.
    pub closed_at: SimTime,
    /// Clock after every actor left.
    pub finished_at: SimTime,
    pub customers: usize,
    pub served: usize,
    pub left_late: usize,
    pub left_no_table: usize,
    /// Staff that passed the termination barrier.
    pub exited: usize,
    pub free_tables: usize,
    pub failures: Vec<ActorFailure>,
}

impl SessionReport {
    /// 0 when every actor reached a terminal state, 1 otherwise.
    pub fn exit_code(&self) -> i32 {
        self.failures
            .iter()
            .map(|failure| failure.exit_code)
            .max()
            .unwrap_or(0)
    }
}

/// A running restaurant: the world actor plus the waiter and cook pools.
///
/// # Lifecycle
///
/// 1. [`open`](Self::open) validates the config, spawns the world actor and every
///    staff task. Staff wait for work immediately.
/// 2. [`run`](Self::run) releases customers at their scheduled times, waits for all
///    of them to leave, closes the day, and joins the staff.
///
/// ```rust,no_run
/// use restaurant_sim::config::SessionConfig;
/// use restaurant_sim::events::EventLog;
/// use restaurant_sim::lifecycle::RestaurantSession;
/// use restaurant_sim::model::CustomerSpec;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let session = RestaurantSession::open(SessionConfig::default(), EventLog::new())?;
///     let report = session.run(vec![CustomerSpec::new(1, 0, 2)]).await?;
///     assert_eq!(report.served, 1);
///     Ok(())
/// }
/// ```
pub struct RestaurantSession {
    ctx: ActorContext,
    world_handle: JoinHandle<World>,
    staff: Vec<(Staff, JoinHandle<Result<SimTime, ActorError>>)>,
}

impl RestaurantSession {
    /// Spawns the world actor, the waiters and the cooks.
    ///
    /// Must be called from within a Tokio runtime.
    ///
    /// # Errors
    ///
    /// [`SessionError::Config`] if the configuration cannot run a session.
    pub fn open(config: SessionConfig, events: EventLog) -> Result<Self, SessionError> {
        config.validate()?;
        let (world_actor, world) = WorldActor::new(World::new(&config), WORLD_REQUEST_BUFFER);
        let world_handle = tokio::spawn(world_actor.run());

        let ctx = ActorContext {
            world,
            events,
            signals: Arc::new(StaffSignals::new(config.waiters)),
            config: Arc::new(config),
        };

        let waiters = (0..ctx.config.waiters).map(|waiter| {
            let handle = tokio::spawn(run_waiter(ctx.clone(), waiter));
            (Staff::Waiter(waiter), handle)
        });
        let cooks = (0..ctx.config.cooks).map(|cook| {
            let handle = tokio::spawn(run_cook(ctx.clone(), cook));
            (Staff::Cook(cook), handle)
        });
        let staff = waiters.chain(cooks).collect();

        info!(
            tables = ctx.config.tables,
            waiters = ctx.config.waiters,
            cooks = ctx.config.cooks,
            "Restaurant open"
        );
        Ok(Self {
            ctx,
            world_handle,
            staff,
        })
    }

    /// A client for observing the world while the session runs.
    ///
    /// The world actor only stops once every client is gone, so an observer must
    /// drop its client before [`run`](Self::run) can return.
    pub fn world(&self) -> WorldClient {
        self.ctx.world.clone()
    }

    /// Runs the day to completion.
    ///
    /// Customers are spawned in feed order; between two consecutive customers the
    /// session pauses for the real-time equivalent of their arrival gap. After the
    /// last customer is gone the clock is moved to at least closing time and each
    /// cook is woken once, which starts the staff shutdown. All staff tasks are
    /// then joined and the world actor is stopped.
    ///
    /// An actor that fails is recorded in [`SessionReport::failures`]; other actors
    /// carry on.
    ///
    /// # Errors
    ///
    /// [`SessionError::World`] if the world actor is gone before closing,
    /// [`SessionError::Join`] if it panicked, [`SessionError::Barrier`] if the
    /// staff all finished cleanly but the barrier count is off.
    pub async fn run(self, customers: Vec<CustomerSpec>) -> Result<SessionReport, SessionError> {
        let Self {
            ctx,
            world_handle,
            staff,
        } = self;

        let mut arrivals = Vec::with_capacity(customers.len());
        let mut previous: Option<SimTime> = None;
        for customer in customers {
            if let Some(previous) = previous {
                let gap = customer.arrival.since(previous);
                if gap > 0 {
                    tokio::time::sleep(ctx.config.pause_for(gap)).await;
                }
            }
            previous = Some(customer.arrival);
            let handle = tokio::spawn(run_customer(ctx.clone(), customer));
            arrivals.push((customer.id, handle));
        }

        let mut failures = Vec::new();
        let (mut served, mut left_late, mut left_no_table) = (0, 0, 0);
        let customers = arrivals.len();
        for (customer_id, handle) in arrivals {
            match flatten(handle.await) {
                Ok(Departure::Served) => served += 1,
                Ok(Departure::Late) => left_late += 1,
                Ok(Departure::NoTable) => left_no_table += 1,
                Err((exit_code, error)) => {
                    error!(customer_id, %error, "Customer actor failed");
                    failures.push(ActorFailure {
                        actor: ActorRole::Customer(customer_id),
                        exit_code,
                        error,
                    });
                }
            }
        }

        let closed_at = ctx.world.close().await?;
        info!(%closed_at, "Closing time, waking the kitchen");
        for _ in 0..ctx.config.cooks {
            ctx.signals.kitchen().signal();
        }

        for (member, handle) in staff {
            match flatten(handle.await) {
                Ok(left_at) => info!(staff = %member, %left_at, "Staff finished"),
                Err((exit_code, error)) => {
                    error!(staff = %member, %error, "Staff actor failed");
                    failures.push(ActorFailure {
                        actor: ActorRole::Staff(member),
                        exit_code,
                        error,
                    });
                }
            }
        }

        let snapshot = ctx.world.snapshot().await?;
        let expected = ctx.config.actor_count();
        ctx.signals.close_all();
        drop(ctx);
        world_handle.await?;

        check_barrier(snapshot.exited, expected, &failures)?;

        let report = SessionReport {
            closed_at,
            finished_at: snapshot.now,
            customers,
            served,
            left_late,
            left_no_table,
            exited: snapshot.exited,
            free_tables: snapshot.free_tables,
            failures,
        };
        info!(?report, "Session complete");
        Ok(report)
    }
}

/// Folds a task's panic into the actor's own error, as `(exit_code, message)`.
fn flatten<T>(joined: Result<Result<T, ActorError>, JoinError>) -> Result<T, (i32, String)> {
    match joined {
        Ok(Ok(value)) => Ok(value),
        Ok(Err(error)) => Err((error.exit_code(), error.to_string())),
        Err(join_error) => Err((1, join_error.to_string())),
    }
}

/// A clean day must end with every staff member counted at the barrier. After an
/// actor failure the count is allowed to fall short; the failure is reported instead.
fn check_barrier(
    exited: usize,
    expected: usize,
    failures: &[ActorFailure],
) -> Result<(), SessionError> {
    if failures.is_empty() && exited != expected {
        return Err(SessionError::Barrier { exited, expected });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_panicked_task_becomes_failure() {
        let handle = tokio::spawn(async {
            panic!("kitchen fire");
        });
        let joined: Result<Result<SimTime, ActorError>, JoinError> =
            handle.await.map(|()| Ok(SimTime::OPENING));
        let (exit_code, error) = flatten(joined).unwrap_err();
        assert_eq!(exit_code, 1);
        assert!(error.contains("panic"), "{}", error);
    }

    #[test]
    fn test_actor_error_becomes_failure() {
        let joined: Result<Result<SimTime, ActorError>, JoinError> =
            Ok(Err(ActorError::World(WorldError::ActorClosed)));
        assert_eq!(
            flatten(joined),
            Err((1, "World request failed: World actor closed".to_string()))
        );
    }

    #[test]
    fn test_barrier_shortfall() {
        assert!(check_barrier(7, 7, &[]).is_ok());
        assert!(matches!(
            check_barrier(6, 7, &[]),
            Err(SessionError::Barrier {
                exited: 6,
                expected: 7
            })
        ));

        // a failed staff member never reaches the barrier; that is reported, not an error
        let failure = ActorFailure {
            actor: ActorRole::Staff(Staff::Cook(1)),
            exit_code: 1,
            error: "Signal unavailable".to_string(),
        };
        assert!(check_barrier(6, 7, &[failure]).is_ok());
    }

    #[test]
    fn test_report_exit_code() {
        let mut report = SessionReport {
            closed_at: SimTime(240),
            finished_at: SimTime(240),
            customers: 1,
            served: 1,
            left_late: 0,
            left_no_table: 0,
            exited: 7,
            free_tables: 10,
            failures: Vec::new(),
        };
        assert_eq!(report.exit_code(), 0);

        report.failures.push(ActorFailure {
            actor: ActorRole::Customer(1),
            exit_code: 1,
            error: "World request failed".to_string(),
        });
        assert_eq!(report.exit_code(), 1);
    }
}
