use serde::{Deserialize, Serialize};

use crate::model::TimeSlot;
use crate::model::time::HOURS_PER_DAY;

/// Number of slots in a newly created party.
pub const DEFAULT_PARTY_SIZE: usize = 8;

/// Inclusive hour range from which the active time slots are derived.
///
/// A window may wrap past midnight: start 21, end 2 yields
/// 21, 22, 23, 0, 1, 2.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeWindow {
    pub start_hour: u8,
    pub end_hour: u8,
}

impl TimeWindow {
    /// # Panics
    /// Panics if either bound is 24 or greater.
    pub fn new(start_hour: u8, end_hour: u8) -> Self {
        assert!(
            start_hour < HOURS_PER_DAY && end_hour < HOURS_PER_DAY,
            "hour out of range: {start_hour}..{end_hour}"
        );
        Self {
            start_hour,
            end_hour,
        }
    }

    /// The contiguous slot sequence covered by the window, in clock order
    /// from `start_hour`, wrapping past 23 back to 0 when needed.
    pub fn slots(&self) -> Vec<TimeSlot> {
        let mut slots = Vec::new();
        if self.start_hour <= self.end_hour {
            for hour in self.start_hour..=self.end_hour {
                slots.push(TimeSlot::new(hour));
            }
        } else {
            for hour in self.start_hour..HOURS_PER_DAY {
                slots.push(TimeSlot::new(hour));
            }
            for hour in 0..=self.end_hour {
                slots.push(TimeSlot::new(hour));
            }
        }
        slots
    }
}

impl Default for TimeWindow {
    fn default() -> Self {
        Self::new(8, 12)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hours(window: TimeWindow) -> Vec<u8> {
        window.slots().iter().map(|s| s.hour()).collect()
    }

    #[test]
    fn plain_window() {
        assert_eq!(hours(TimeWindow::new(8, 12)), vec![8, 9, 10, 11, 12]);
    }

    #[test]
    fn single_hour_window() {
        assert_eq!(hours(TimeWindow::new(5, 5)), vec![5]);
    }

    #[test]
    fn wraps_past_midnight() {
        assert_eq!(hours(TimeWindow::new(21, 2)), vec![21, 22, 23, 0, 1, 2]);
    }

    #[test]
    fn wrap_to_zero() {
        assert_eq!(hours(TimeWindow::new(23, 0)), vec![23, 0]);
    }

    #[test]
    fn default_window_is_eight_to_twelve() {
        assert_eq!(hours(TimeWindow::default()), vec![8, 9, 10, 11, 12]);
    }

    #[test]
    #[should_panic(expected = "hour out of range")]
    fn rejects_out_of_range_bound() {
        TimeWindow::new(8, 24);
    }
}
