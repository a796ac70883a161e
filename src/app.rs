use crate::handlers;
use crate::state::AppState;
use axum::{
    routing::get,
    Router,
};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route(
            "/api/entries",
            get(handlers::list_entries).post(handlers::create_entry),
        )
        .route("/api/entries/day", get(handlers::get_day))
        .route("/api/calendar", get(handlers::get_calendar))
        .route("/api/gratitude", get(handlers::get_gratitude))
        .route("/api/stats", get(handlers::get_stats))
        .with_state(state)
}
