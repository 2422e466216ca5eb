//! Session orchestration and lifecycle management.
//!
//! This module contains the infrastructure that turns a configuration and a
//! customer feed into one simulated business day:
//!
//! - **Actor lifecycle management**: spawning the world actor, the waiters and the cooks
//! - **Customer release**: starting each customer at its scheduled arrival
//! - **Shutdown**: closing the day, joining staff, checking the termination barrier
//! - **Observability setup**: initializing tracing and logging
//!
//! # Main Components
//!
//! - [`RestaurantSession`] - owns every actor task from opening to the final report
//! - [`SessionReport`] - tallies of the day plus any actor failures
//! - [`setup_tracing`] - initializes the tracing/logging infrastructure

pub mod session;
pub mod tracing;

pub use session::*;
pub use tracing::*;
