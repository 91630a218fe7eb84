//! # Availability Handlers
//!
//! Serves the derived week grid an instructor's calendar renders: 7 days of
//! 32 half-hour slots starting 09:00, each flagged available or taken.
//!
//! ## Derivation
//!
//! 1. Validate the query parameters and resolve the grid's first day from
//!    `startDate`'s calendar date.
//! 2. Fetch the instructor's reservations for the covered range in one
//!    query. The final slot of the last day spills past midnight, so the
//!    fetch range extends one day beyond the grid.
//! 3. Hand the fetched set to the pure grid computation in
//!    `slotbook_core::availability`; a slot is available iff no reservation
//!    overlaps it under the half-open `[start, end)` rule.
//!
//! The grid is recomputed from the reservation set on every call and the
//! handler holds no state, so identical calls with no intervening writes
//! return identical grids.

use axum::{
    Json,
    extract::{Query, State},
};
use chrono::{DateTime, Duration, Utc};
use serde::Deserialize;
use slotbook_core::{
    errors::BookingError,
    models::reservation::Reservation,
    models::time_slot::{GRID_DAYS, GetAvailabilityResponse},
};
use std::sync::Arc;

use crate::{ApiState, middleware::error_handling::AppError};

/// Query parameters for the week-availability endpoint.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilityQuery {
    pub instructor_id: Option<i64>,

    /// First day of the grid (RFC 3339; only the calendar date anchors the grid)
    pub start_date: Option<DateTime<Utc>>,
}

/// Returns the 7-day slot grid for an instructor.
///
/// An unknown instructor yields a fully available grid, mirroring the empty
/// result of the reservation listing.
#[axum::debug_handler]
pub async fn get_week_availability(
    State(state): State<Arc<ApiState>>,
    Query(query): Query<AvailabilityQuery>,
) -> Result<Json<GetAvailabilityResponse>, AppError> {
    let (Some(instructor_id), Some(start_date)) = (query.instructor_id, query.start_date) else {
        return Err(AppError(BookingError::Validation(
            "Missing required parameters".to_string(),
        )));
    };

    // One day past the grid covers the slots that start after midnight.
    let range_end = start_date + Duration::days(GRID_DAYS as i64 + 1);

    let reservations = slotbook_db::repositories::reservation::find_reservations_in_range(
        &state.db_pool,
        instructor_id,
        start_date,
        range_end,
    )
    .await
    .map_err(BookingError::Database)?;

    let reservations: Vec<Reservation> = reservations
        .into_iter()
        .map(|row| Reservation {
            id: row.id,
            user_id: row.user_id,
            instructor_id: row.instructor_id,
            start_time: row.start_time,
            end_time: row.end_time,
        })
        .collect();

    let days = slotbook_core::availability::week_slots(start_date, &reservations);

    Ok(Json(GetAvailabilityResponse {
        instructor_id,
        days,
    }))
}
