pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::candidates::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route(
            "/candidates",
            get(handlers::handle_list).post(handlers::handle_create),
        )
        .route("/candidates/upload", post(handlers::handle_upload))
        .route(
            "/candidates/technology/:term",
            get(handlers::handle_list_by_technology),
        )
        .route(
            "/candidates/:id",
            get(handlers::handle_get)
                .put(handlers::handle_update)
                .delete(handlers::handle_delete),
        )
        .route("/candidates/:id/analyze", post(handlers::handle_analyze))
        .with_state(state)
}
