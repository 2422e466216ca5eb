//! Plain records passed between actors: scheduled customers, orders and tickets.

pub mod customer;
pub mod order;

pub use customer::*;
pub use order::*;
