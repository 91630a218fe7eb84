use crate::models::DbReservation;
use chrono::{DateTime, Utc};
use eyre::Result;
use sqlx::{Pool, Postgres};

/// Inserts a reservation, yielding `None` when another writer already holds
/// the same (instructor, start) slot.
///
/// The `ON CONFLICT DO NOTHING` path is what closes the gap between the
/// caller's overlap check and the insert.
pub async fn create_reservation(
    pool: &Pool<Postgres>,
    user_id: i64,
    instructor_id: i64,
    start_time: DateTime<Utc>,
    end_time: DateTime<Utc>,
) -> Result<Option<DbReservation>> {
    tracing::debug!(
        "Creating reservation: user_id={}, instructor_id={}, start_time={}",
        user_id,
        instructor_id,
        start_time
    );

    let reservation = sqlx::query_as::<_, DbReservation>(
        r#"
        INSERT INTO reservations (user_id, instructor_id, start_time, end_time)
        VALUES ($1, $2, $3, $4)
        ON CONFLICT (instructor_id, start_time) DO NOTHING
        RETURNING id, user_id, instructor_id, start_time, end_time, created_at
        "#,
    )
    .bind(user_id)
    .bind(instructor_id)
    .bind(start_time)
    .bind(end_time)
    .fetch_optional(pool)
    .await?;

    if reservation.is_none() {
        tracing::debug!(
            "Reservation insert lost to a concurrent writer: instructor_id={}, start_time={}",
            instructor_id,
            start_time
        );
    }

    Ok(reservation)
}

/// All reservations of an instructor whose start time falls in
/// `[start_date, end_date)`, ordered by start time.
pub async fn find_reservations_in_range(
    pool: &Pool<Postgres>,
    instructor_id: i64,
    start_date: DateTime<Utc>,
    end_date: DateTime<Utc>,
) -> Result<Vec<DbReservation>> {
    let reservations = sqlx::query_as::<_, DbReservation>(
        r#"
        SELECT id, user_id, instructor_id, start_time, end_time, created_at
        FROM reservations
        WHERE instructor_id = $1
          AND start_time >= $2
          AND start_time < $3
        ORDER BY start_time ASC
        "#,
    )
    .bind(instructor_id)
    .bind(start_date)
    .bind(end_date)
    .fetch_all(pool)
    .await?;

    Ok(reservations)
}

/// First reservation of an instructor whose `[start_time, end_time)` interval
/// intersects the candidate interval, if any.
pub async fn find_overlapping_reservation(
    pool: &Pool<Postgres>,
    instructor_id: i64,
    start_time: DateTime<Utc>,
    end_time: DateTime<Utc>,
) -> Result<Option<DbReservation>> {
    tracing::debug!(
        "Checking overlap: instructor_id={}, candidate=[{}, {})",
        instructor_id,
        start_time,
        end_time
    );

    let reservation = sqlx::query_as::<_, DbReservation>(
        r#"
        SELECT id, user_id, instructor_id, start_time, end_time, created_at
        FROM reservations
        WHERE instructor_id = $1
          AND start_time < $3
          AND end_time > $2
        ORDER BY start_time ASC
        LIMIT 1
        "#,
    )
    .bind(instructor_id)
    .bind(start_time)
    .bind(end_time)
    .fetch_optional(pool)
    .await?;

    Ok(reservation)
}
