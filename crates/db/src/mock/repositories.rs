use chrono::{DateTime, Utc};
use mockall::mock;

use crate::models::DbReservation;

// Mock repository for testing
mock! {
    pub ReservationRepo {
        pub async fn create_reservation(
            &self,
            user_id: i64,
            instructor_id: i64,
            start_time: DateTime<Utc>,
            end_time: DateTime<Utc>,
        ) -> eyre::Result<Option<DbReservation>>;

        pub async fn find_reservations_in_range(
            &self,
            instructor_id: i64,
            start_date: DateTime<Utc>,
            end_date: DateTime<Utc>,
        ) -> eyre::Result<Vec<DbReservation>>;

        pub async fn find_overlapping_reservation(
            &self,
            instructor_id: i64,
            start_time: DateTime<Utc>,
            end_time: DateTime<Utc>,
        ) -> eyre::Result<Option<DbReservation>>;
    }
}
