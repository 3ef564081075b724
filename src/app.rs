use crate::handlers;
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route(
            "/api/contributions",
            get(handlers::get_contributions)
                .put(handlers::put_contributions)
                .delete(handlers::delete_contributions),
        )
        .route("/api/stats", get(handlers::get_stats))
        .route("/api/best-day", get(handlers::get_best_day))
        .route("/api/window", get(handlers::get_window))
        .with_state(state)
}
