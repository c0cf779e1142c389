pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::analysis::handlers::handle_analyze;
use crate::questions::handlers::{handle_get_answer, handle_get_questions, handle_list_roles};
use crate::state::AppState;
use crate::study_plan::handlers::handle_generate_study_plan;

pub fn build_router(state: AppState) -> Router {
    let upload_limit = state.config.max_upload_bytes;

    Router::new()
        .route("/", get(health::root_handler))
        .route("/health", get(health::health_handler))
        // Résumé analysis
        .route(
            "/analyze",
            post(handle_analyze).layer(DefaultBodyLimit::max(upload_limit)),
        )
        // Interview questions
        .route("/get-interview-questions", post(handle_get_questions))
        .route("/get-answer", post(handle_get_answer))
        .route("/interview-roles", get(handle_list_roles))
        // Study plans
        .route("/generate-study-plan", post(handle_generate_study_plan))
        .with_state(state)
}
