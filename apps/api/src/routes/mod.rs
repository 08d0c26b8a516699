pub mod health;

use axum::{routing::get, Router};

use crate::notes::handlers as notes;
use crate::portfolio::handlers as portfolio;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Notes
        .route("/api/notes", get(notes::handle_list_categories))
        .route("/api/notes/:category", get(notes::handle_list_notes))
        .route("/api/notes/:category/:slug", get(notes::handle_get_note))
        .route(
            "/api/notes/:category/:slug/html",
            get(notes::handle_get_note_html),
        )
        // Portfolio sections
        .route("/api/experience", get(portfolio::handle_list_experience))
        .route("/api/projects", get(portfolio::handle_list_projects))
        .route("/api/education", get(portfolio::handle_list_education))
        .route("/api/skills", get(portfolio::handle_list_skills))
        .with_state(state)
}
