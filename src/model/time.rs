use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

pub const HOURS_PER_DAY: u8 = 24;

/// An hour-of-day tag (0–23) restricting which parties an account may join.
///
/// Parties carry at most one `TimeSlot`; accounts declare the set of slots
/// they can attend. Natural ordering equals clock ordering within one day.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct TimeSlot(u8);

impl TimeSlot {
    /// Create a slot from an hour value.
    ///
    /// # Panics
    /// Panics if `hour` is 24 or greater.
    pub fn new(hour: u8) -> Self {
        assert!(hour < HOURS_PER_DAY, "hour out of range: {hour}");
        Self(hour)
    }

    pub fn hour(self) -> u8 {
        self.0
    }
}

impl<'de> Deserialize<'de> for TimeSlot {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let hour = u8::deserialize(deserializer)?;
        if hour >= HOURS_PER_DAY {
            return Err(serde::de::Error::custom(format!(
                "hour out of range: {hour}"
            )));
        }
        Ok(Self(hour))
    }
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:00", self.0)
    }
}
