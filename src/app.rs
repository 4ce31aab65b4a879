use crate::handlers;
use crate::state::AppState;
use axum::{routing::{delete, get, post}, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/api/analyze", post(handlers::analyze))
        .route("/api/entries", get(handlers::list_entries).delete(handlers::clear_user))
        .route("/api/entries/:record_id", delete(handlers::delete_entry))
        .route("/api/stats", get(handlers::get_stats))
        .route("/api/export", get(handlers::export))
        .with_state(state)
}
