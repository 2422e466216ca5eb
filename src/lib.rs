#![doc(html_logo_url = "https://www.rust-lang.org/logos/rust-logo-128x128.png")]
#![doc(html_favicon_url = "https://www.rust-lang.org/favicon.ico")]
//! # Restaurant Simulation
//!
//! > **One simulated business day, played out by concurrent actors.**
//!
//! Customers arrive on a schedule, take a table if one is free, order through one of
//! five waiters, wait while one of two cooks prepares the food, eat and leave. The
//! restaurant opens at 11:00 am and stops admitting customers at 3:00 pm; staff go
//! home once no work is left.
//!
//! ## 🏗️ Design Philosophy
//!
//! ### One owner for the shared world
//!
//! Everything the actors share (clock, tables, round-robin cursor, waiter queues,
//! kitchen queue, termination barrier) lives in a single [`World`](world::World)
//! owned by one Tokio task. Actors never touch it directly; they send requests
//! through a cloneable [`WorldClient`](world::WorldClient). Because the world actor
//! handles one request at a time, every request is atomic: the checks that drive a
//! decision and the writes that follow it cannot interleave with another actor.
//!
//! ### Signals carry wakeups, the world carries data
//!
//! Actors block on [`CountingSignal`](framework::CountingSignal)s. A signal only says
//! "look again"; what there is to do is always read back from the world. Signals
//! count, so a wakeup sent before the receiver waits is never lost.
//!
//! ## 🚀 Core Concepts
//!
//! ### Simulated time
//! The clock is [`SimTime`](framework::SimTime), minutes since opening. Work takes
//! time: an actor that works for `n` minutes pauses for `n` scaled real minutes, then
//! merges its own finishing time into the clock. The merge is a maximum, so the
//! clock never runs backwards even when actors finish out of order.
//!
//! ### Termination barrier
//! Each waiter and cook leaves exactly once and bumps the world's exit count. After
//! the session joins every staff task the count must equal `waiters + cooks`.
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Primitives ([`framework`])
//! Ring buffer, counting signal and simulated clock.
//! - **Key items**: [`BoundedQueue`](framework::BoundedQueue),
//!   [`CountingSignal`](framework::CountingSignal), [`SimTime`](framework::SimTime).
//!
//! ### 2. The Shared World ([`world`])
//! The state every actor shares, and the actor that owns it.
//! - **Key items**: [`World`](world::World), [`WorldActor`](world::WorldActor),
//!   [`WorldClient`](world::WorldClient).
//!
//! ### 3. The Actors ([`actors`])
//! Customer, waiter and cook state machines.
//! - **Key items**: [`run_customer`](actors::run_customer),
//!   [`run_waiter`](actors::run_waiter), [`run_cook`](actors::run_cook).
//!
//! ### 4. The Orchestrator ([`lifecycle`])
//! Opens the restaurant, releases customers, closes the day and reports.
//! - **Key items**: [`RestaurantSession`](lifecycle::RestaurantSession),
//!   [`setup_tracing`](lifecycle::setup_tracing).
//!
//! ### 5. Inputs and Outputs ([`config`], [`feed`], [`events`], [`model`])
//! Session constants, the customer feed parser, the transition log and the plain
//! data passed between actors.
//!
//! ## 🚀 Quick Start
//!
//! ### Running the Simulation
//!
//! ```bash
//! # Transition log at info level
//! cargo run -- --feed customers.txt
//!
//! # Faster clock, more detail
//! RUST_LOG=debug cargo run -- --feed customers.txt --minute-ms 10
//! ```
//!
//! ### Running Tests
//!
//! ```bash
//! cargo test
//! ```

pub mod actors;
pub mod config;
pub mod events;
pub mod feed;
pub mod framework;
pub mod lifecycle;
pub mod model;
pub mod world;
