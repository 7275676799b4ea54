use crate::handlers;
use crate::state::AppState;
use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

pub const MAX_REPORT_BYTES: usize = 16 * 1024 * 1024;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/nav/:page", post(handlers::navigate))
        .route("/mood", post(handlers::mood_submit))
        .route("/mood/clear", post(handlers::mood_clear))
        .route("/fitness", post(handlers::fitness_generate))
        .route("/fitness/clear", post(handlers::fitness_clear))
        .route("/chat/message", post(handlers::chat_message))
        .route(
            "/chat/report",
            post(handlers::chat_report).layer(DefaultBodyLimit::max(MAX_REPORT_BYTES)),
        )
        .route("/chat/clear", post(handlers::chat_clear))
        .route("/api/page", get(handlers::get_page))
        .route("/api/mood", get(handlers::get_mood))
        .route("/api/fitness", get(handlers::get_fitness))
        .route("/api/chat", get(handlers::get_chat))
        .route("/api/backend", get(handlers::backend_status))
        .with_state(state)
}
