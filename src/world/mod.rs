//! # World
//!
//! The shared restaurant state and the actor that serializes every access to it.
//!
//! ## Structure
//!
//! - [`state`] - [`World`]: clock, table bank, round-robin pointer, waiter slots,
//!   kitchen queue, termination barrier
//! - [`actor`] - [`WorldActor`]: the single task allowed to touch the `World`
//! - [`client`] - [`WorldClient`]: cloneable request/reply handle
//! - [`message`] - [`WorldRequest`]: one variant per indivisible step
//! - [`error`] - [`WorldError`]
//!
//! ## Usage
//!
//! ```rust
//! use restaurant_sim::config::SessionConfig;
//! use restaurant_sim::world::{World, WorldActor};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = SessionConfig::default();
//!     let (actor, client) = WorldActor::new(World::new(&config), 32);
//!     tokio::spawn(actor.run());
//!
//!     let snapshot = client.snapshot().await?;
//!     assert_eq!(snapshot.free_tables, 10);
//!     Ok(())
//! }
//! ```

pub mod actor;
pub mod client;
pub mod error;
pub mod message;
pub mod state;

pub use actor::WorldActor;
pub use client::WorldClient;
pub use error::WorldError;
pub use message::{Response, WorldRequest};
pub use state::{Admission, CookStep, WaiterStep, World, WorldSnapshot};
