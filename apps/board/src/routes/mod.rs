pub mod health;

use axum::{
    routing::{delete, get, post, put},
    Router,
};

use crate::board::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/jobs", get(handlers::handle_list_jobs))
        .route("/api/v1/boards", post(handlers::handle_open_board))
        .route(
            "/api/v1/boards/:id",
            get(handlers::handle_get_board).delete(handlers::handle_close_board),
        )
        .route("/api/v1/boards/:id/filters", post(handlers::handle_add_filter))
        .route(
            "/api/v1/boards/:id/filters/:name",
            delete(handlers::handle_remove_filter),
        )
        .route("/api/v1/boards/:id/search", put(handlers::handle_set_search))
        .route("/api/v1/boards/:id/clear", post(handlers::handle_clear))
        .with_state(state)
}
