use axum::Json;
use chrono::Duration;
use mockall::predicate;
use pretty_assertions::assert_eq;
use slotbook_core::errors::BookingError;
use slotbook_core::models::reservation::Reservation;
use slotbook_core::models::time_slot::{GRID_DAYS, GetAvailabilityResponse, SLOTS_PER_DAY};

use crate::test_utils::{TestContext, db_reservation, ts};
use slotbook_api::handlers::availability::AvailabilityQuery;
use slotbook_api::middleware::error_handling::AppError;

// Mirrors the availability handler: fetch the covered range, then derive the
// grid with the pure core computation.
async fn test_week_availability_wrapper(
    ctx: &mut TestContext,
    query: AvailabilityQuery,
) -> Result<Json<GetAvailabilityResponse>, AppError> {
    let (Some(instructor_id), Some(start_date)) = (query.instructor_id, query.start_date) else {
        return Err(AppError(BookingError::Validation(
            "Missing required parameters".to_string(),
        )));
    };

    let range_end = start_date + Duration::days(GRID_DAYS as i64 + 1);

    let reservations = ctx
        .reservation_repo
        .find_reservations_in_range(instructor_id, start_date, range_end)
        .await?;

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

#[tokio::test]
async fn test_week_availability_missing_parameter() {
    let mut ctx = TestContext::new();

    let query = AvailabilityQuery {
        instructor_id: None,
        start_date: Some(ts("2024-06-03T00:00:00Z")),
    };

    let result = test_week_availability_wrapper(&mut ctx, query).await;

    assert!(result.is_err());
    match result.unwrap_err().0 {
        BookingError::Validation(message) => assert_eq!(message, "Missing required parameters"),
        e => panic!("Expected Validation error, got: {:?}", e),
    }
}

#[tokio::test]
async fn test_week_availability_marks_booked_slot() {
    let mut ctx = TestContext::new();
    let start_date = ts("2024-06-03T00:00:00Z");

    ctx.reservation_repo
        .expect_find_reservations_in_range()
        .with(
            predicate::eq(1),
            predicate::eq(start_date),
            predicate::eq(start_date + Duration::days(GRID_DAYS as i64 + 1)),
        )
        .times(1)
        .returning(|instructor_id, _, _| {
            Ok(vec![db_reservation(
                1,
                instructor_id,
                "2024-06-03T09:00:00Z",
                "2024-06-03T09:30:00Z",
            )])
        });

    let query = AvailabilityQuery {
        instructor_id: Some(1),
        start_date: Some(start_date),
    };

    let result = test_week_availability_wrapper(&mut ctx, query).await;

    assert!(result.is_ok());
    let Json(response) = result.unwrap();
    assert_eq!(response.instructor_id, 1);
    assert_eq!(response.days.len(), GRID_DAYS);
    assert!(response.days.iter().all(|d| d.slots.len() == SLOTS_PER_DAY));

    // Only the booked 09:00 slot of the first day is taken.
    assert!(!response.days[0].slots[0].is_available);
    assert!(response.days[0].slots[1].is_available);
    let unavailable: usize = response
        .days
        .iter()
        .flat_map(|d| &d.slots)
        .filter(|s| !s.is_available)
        .count();
    assert_eq!(unavailable, 1);
}

#[tokio::test]
async fn test_week_availability_unknown_instructor_is_fully_available() {
    let mut ctx = TestContext::new();

    ctx.reservation_repo
        .expect_find_reservations_in_range()
        .returning(|_, _, _| Ok(vec![]));

    let query = AvailabilityQuery {
        instructor_id: Some(999),
        start_date: Some(ts("2024-06-03T00:00:00Z")),
    };

    let result = test_week_availability_wrapper(&mut ctx, query).await;

    assert!(result.is_ok());
    let Json(response) = result.unwrap();
    assert!(
        response
            .days
            .iter()
            .all(|d| d.slots.iter().all(|s| s.is_available))
    );
}
