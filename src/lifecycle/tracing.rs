//! # Observability & Tracing
//!
//! Every actor transition is logged through `tracing` by
//! [`EventLog`](crate::events::EventLog), one line per transition, prefixed with the
//! simulated clock. This module installs the subscriber that prints them.
//!
//! ## Configuration
//!
//! The filter comes from `RUST_LOG`; without it the session logs at `info`, which
//! shows exactly the transition lines. The compact format hides the module path
//! (`with_target(false)`) and shows the actor span inline, e.g. `waiter{waiter=2}:`.
//!
//! ```bash
//! # Transition log (default)
//! cargo run -- --feed customers.txt
//!
//! # Every world request and reply
//! RUST_LOG=debug cargo run -- --feed customers.txt
//!
//! # Only warnings (skipped feed records, fatal actor errors)
//! RUST_LOG=warn cargo run -- --feed customers.txt
//! ```
//!
//! ## What Gets Logged
//!
//! - **info**: staff ready/leaving, arrivals, rejections, orders, cooking, serving,
//!   eating, world actor start/stop, closing time and the final report
//! - **debug**: each world request with its result, no-op clock merges, idle wakeups
//! - **warn**: invalid feed records
//! - **error**: an actor stopped by an [`ActorError`](crate::actors::ActorError)

use tracing_subscriber::EnvFilter;

pub fn setup_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false) // the event field already says what happened
        .compact()
        .init();
}
