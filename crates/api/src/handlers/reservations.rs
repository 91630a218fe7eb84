//! # Reservation Handlers
//!
//! The reservation read and write surface:
//!
//! - `GET /api/reservations` returns the persisted reservations of one
//!   instructor whose start time falls in a half-open date range.
//! - `POST /api/reservations` books a slot after a conflict check.
//!
//! ## Write path
//!
//! 1. Validate that all four body fields are present (this runs before any
//!    store access).
//! 2. Query for an existing reservation of the same instructor overlapping
//!    the candidate `[startTime, endTime)` interval; found means conflict.
//! 3. Conditionally insert. The store's unique `(instructor_id, start_time)`
//!    constraint resolves the race two concurrent writers would otherwise
//!    win together; losing the insert reports the same conflict error.

use axum::{
    Json,
    extract::{Query, State},
};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use slotbook_core::{
    errors::BookingError,
    models::reservation::{CreateReservationRequest, Reservation},
};
use slotbook_db::models::DbReservation;
use std::sync::Arc;

use crate::{ApiState, middleware::error_handling::AppError};

/// Query parameters for the reservation listing endpoint.
///
/// All three are required; they are optional here only so that an absent
/// parameter yields the contract's validation error instead of a generic
/// extractor rejection.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListReservationsQuery {
    pub instructor_id: Option<i64>,

    /// Inclusive lower bound on `startTime` (RFC 3339)
    pub start_date: Option<DateTime<Utc>>,

    /// Exclusive upper bound on `startTime` (RFC 3339)
    pub end_date: Option<DateTime<Utc>>,
}

/// Lists an instructor's reservations with `startDate <= startTime < endDate`.
///
/// An unknown instructor is not an error; it simply yields an empty array.
#[axum::debug_handler]
pub async fn list_reservations(
    State(state): State<Arc<ApiState>>,
    Query(query): Query<ListReservationsQuery>,
) -> Result<Json<Vec<Reservation>>, AppError> {
    let (Some(instructor_id), Some(start_date), Some(end_date)) =
        (query.instructor_id, query.start_date, query.end_date)
    else {
        return Err(AppError(BookingError::Validation(
            "Missing required parameters".to_string(),
        )));
    };

    let reservations = slotbook_db::repositories::reservation::find_reservations_in_range(
        &state.db_pool,
        instructor_id,
        start_date,
        end_date,
    )
    .await
    .map_err(BookingError::Database)?;

    let response = reservations.into_iter().map(into_api_model).collect();

    Ok(Json(response))
}

/// Creates a reservation for a candidate slot.
///
/// Returns the created record, including its store-assigned id. Fails with
/// `Missing required fields` when the body is incomplete and with
/// `Reservation already exists` when the slot is contested.
#[axum::debug_handler]
pub async fn create_reservation(
    State(state): State<Arc<ApiState>>,
    Json(payload): Json<CreateReservationRequest>,
) -> Result<Json<Reservation>, AppError> {
    let candidate = payload.validated()?;

    let existing = slotbook_db::repositories::reservation::find_overlapping_reservation(
        &state.db_pool,
        candidate.instructor_id,
        candidate.start_time,
        candidate.end_time,
    )
    .await
    .map_err(BookingError::Database)?;

    if existing.is_some() {
        return Err(AppError(BookingError::Conflict(
            "Reservation already exists".to_string(),
        )));
    }

    let created = slotbook_db::repositories::reservation::create_reservation(
        &state.db_pool,
        candidate.user_id,
        candidate.instructor_id,
        candidate.start_time,
        candidate.end_time,
    )
    .await
    .map_err(BookingError::Database)?
    // A concurrent writer can take the slot between the check and the
    // insert; the unique constraint reports it as an empty return.
    .ok_or_else(|| BookingError::Conflict("Reservation already exists".to_string()))?;

    Ok(Json(into_api_model(created)))
}

fn into_api_model(row: DbReservation) -> Reservation {
    Reservation {
        id: row.id,
        user_id: row.user_id,
        instructor_id: row.instructor_id,
        start_time: row.start_time,
        end_time: row.end_time,
    }
}
