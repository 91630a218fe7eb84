use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::{BookingError, BookingResult};

/// A persisted booking of one instructor slot.
///
/// Wire form is camelCase: `{id, userId, instructorId, startTime, endTime}`.
/// Neither `user_id` nor `instructor_id` is validated against another record
/// here; they are plain references.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reservation {
    pub id: i64,
    pub user_id: i64,
    pub instructor_id: i64,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
}

/// Body of `POST /api/reservations`.
///
/// Every field is optional at the deserialization boundary so that a missing
/// field produces the contract's validation error rather than a generic
/// decode failure.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateReservationRequest {
    pub user_id: Option<i64>,
    pub instructor_id: Option<i64>,
    pub start_time: Option<DateTime<Utc>>,
    pub end_time: Option<DateTime<Utc>>,
}

impl CreateReservationRequest {
    /// Checks that all four fields are present.
    ///
    /// Runs before any store access on the write path.
    pub fn validated(&self) -> BookingResult<NewReservation> {
        match (
            self.user_id,
            self.instructor_id,
            self.start_time,
            self.end_time,
        ) {
            (Some(user_id), Some(instructor_id), Some(start_time), Some(end_time)) => {
                Ok(NewReservation {
                    user_id,
                    instructor_id,
                    start_time,
                    end_time,
                })
            }
            _ => Err(BookingError::Validation(
                "Missing required fields".to_string(),
            )),
        }
    }
}

/// A fully validated candidate reservation, ready for the conflict check.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NewReservation {
    pub user_id: i64,
    pub instructor_id: i64,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
}
