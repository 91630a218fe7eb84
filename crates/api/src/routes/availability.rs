use axum::{Router, routing::get};
use std::sync::Arc;

use crate::{ApiState, handlers};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new().route(
        "/api/availability",
        get(handlers::availability::get_week_availability),
    )
}
