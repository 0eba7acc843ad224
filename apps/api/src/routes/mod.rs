pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::roast::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/roast", post(handlers::handle_roast))
        .with_state(state)
}
