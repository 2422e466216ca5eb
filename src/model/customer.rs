use crate::framework::SimTime;
use serde::{Deserialize, Serialize};

/// Customer ids start at 1; 0 never names a customer.
pub type CustomerId = u32;

/// Smallest and largest accepted party.
pub const MIN_PARTY: u32 = 1;
pub const MAX_PARTY: u32 = 4;

/// One scheduled arrival, as read from the customer feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerSpec {
    pub id: CustomerId,
    pub arrival: SimTime,
    pub party: u32,
}

impl CustomerSpec {
    pub fn new(id: CustomerId, arrival: u32, party: u32) -> Self {
        Self {
            id,
            arrival: SimTime(arrival),
            party,
        }
    }
}

/// How a customer's visit ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Departure {
    /// Arrived at or after closing time.
    Late,
    /// Every table was taken.
    NoTable,
    /// Ate and released the table.
    Served,
}
