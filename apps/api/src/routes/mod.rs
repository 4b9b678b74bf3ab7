pub mod health;

use std::path::PathBuf;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::services::{ServeDir, ServeFile};

use crate::coach::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let static_dir = PathBuf::from(&state.config.static_dir);
    let index = ServeFile::new(static_dir.join("index.html"));

    Router::new()
        .route("/health", get(health::health_handler))
        // Coaching API
        .route("/api/v1/coach", post(handlers::handle_coach))
        // Single-page front-end
        .route_service("/", index)
        .nest_service("/static", ServeDir::new(static_dir))
        .with_state(state)
}
