use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Consecutive days covered by one availability grid.
pub const GRID_DAYS: usize = 7;

/// Slots offered per day, starting at [`DAY_START_HOUR`]. The final slot of
/// a day begins at 00:30 the next calendar day.
pub const SLOTS_PER_DAY: usize = 32;

/// Length of a bookable slot in minutes.
pub const SLOT_MINUTES: i64 = 30;

/// Hour of day at which the first slot starts.
pub const DAY_START_HOUR: i64 = 9;

/// A derived 30-minute booking window. Never persisted; recomputed from the
/// reservation set on every fetch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeSlot {
    pub time: DateTime<Utc>,
    pub is_available: bool,
}

impl TimeSlot {
    /// Whether a user may book this slot at the given instant.
    ///
    /// A slot already in the past is unbookable even when `is_available`
    /// is still true.
    pub fn is_bookable(&self, now: DateTime<Utc>) -> bool {
        self.is_available && self.time >= now
    }
}

/// One day's column of the availability grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayAvailability {
    pub date: NaiveDate,
    pub slots: Vec<TimeSlot>,
}

/// Response body of `GET /api/availability`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetAvailabilityResponse {
    pub instructor_id: i64,
    pub days: Vec<DayAvailability>,
}
