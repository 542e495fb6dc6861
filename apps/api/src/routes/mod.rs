pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::readings::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/readings", post(handlers::handle_create_reading))
        .with_state(state)
}
