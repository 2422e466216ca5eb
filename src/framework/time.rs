//! Simulated wall clock.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Hour of day the session opens at. Minute zero of the simulation.
pub const OPENING_HOUR: u32 = 11;

/// Minutes elapsed since the restaurant opened at 11:00 am.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
pub struct SimTime(pub u32);

impl SimTime {
    pub const OPENING: SimTime = SimTime(0);

    pub fn minutes(self) -> u32 {
        self.0
    }

    pub fn plus(self, minutes: u32) -> SimTime {
        SimTime(self.0.saturating_add(minutes))
    }

    /// Minutes from `earlier` to `self`, zero if `earlier` is later.
    pub fn since(self, earlier: SimTime) -> u32 {
        self.0.saturating_sub(earlier.0)
    }
}

/// Renders as a 12-hour clock, e.g. `11:05 am`, `12:30 pm`, `3:00 pm`.
impl fmt::Display for SimTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let hour_of_day = (OPENING_HOUR + self.0 / 60) % 24;
        let minute = self.0 % 60;
        let suffix = if hour_of_day < 12 { "am" } else { "pm" };
        let hour = match hour_of_day % 12 {
            0 => 12,
            h => h,
        };
        write!(f, "{}:{:02} {}", hour, minute, suffix)
    }
}
