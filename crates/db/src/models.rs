use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Row of the `reservations` table.
///
/// `created_at` is store-internal; the API wire model omits it.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbReservation {
    pub id: i64,
    pub user_id: i64,
    pub instructor_id: i64,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}
