use axum::{Router, routing::get};
use std::sync::Arc;

use crate::{ApiState, handlers};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new().route(
        "/api/reservations",
        get(handlers::reservations::list_reservations)
            .post(handlers::reservations::create_reservation),
    )
}
