//! Axum route handlers for the interview-question API.

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{info, warn};

use crate::errors::AppError;
use crate::questions::scraper::{scrape_questions, QuestionAnswer};
use crate::state::AppState;

/// Static reply for `/get-answer`; answers are delivered with the questions.
pub const ANSWER_REFERRAL: &str = "Refer to the question list, as answers are scraped together.";
const FETCH_FAILED: &str = "Failed to fetch questions. Please try again later.";

#[derive(Debug, Deserialize)]
pub struct QuestionsRequest {
    pub role: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct QuestionsResponse {
    pub questions: Vec<QuestionAnswer>,
}

#[derive(Debug, Serialize)]
pub struct AnswerResponse {
    pub answer: &'static str,
}

#[derive(Debug, Serialize)]
pub struct RolesResponse {
    pub roles: Vec<String>,
}

/// POST /get-interview-questions
pub async fn handle_get_questions(
    State(state): State<AppState>,
    payload: Result<Json<QuestionsRequest>, JsonRejection>,
) -> Result<Json<QuestionsResponse>, AppError> {
    let role = payload
        .ok()
        .and_then(|Json(req)| req.role)
        .ok_or_else(|| AppError::Validation("Invalid request. No role specified.".to_string()))?;

    let url = state
        .roles
        .url_for(&role)
        .ok_or_else(|| AppError::Validation("Invalid role selected.".to_string()))?;

    info!(role = %role, "Scraping interview questions");
    let questions = scrape_questions(state.fetcher.as_ref(), url)
        .await
        .map_err(|e| {
            warn!("Question fetch for '{role}' failed: {e}");
            AppError::Upstream(FETCH_FAILED.to_string())
        })?;

    Ok(Json(QuestionsResponse { questions }))
}

/// POST /get-answer
///
/// Requires a JSON object with a `question` key, whatever its value, and
/// always replies with the same referral.
pub async fn handle_get_answer(
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<AnswerResponse>, AppError> {
    let has_question = payload
        .ok()
        .and_then(|Json(body)| body.as_object().map(|o| o.contains_key("question")))
        .unwrap_or(false);
    if !has_question {
        return Err(AppError::Validation(
            "Invalid request. No question specified.".to_string(),
        ));
    }

    Ok(Json(AnswerResponse {
        answer: ANSWER_REFERRAL,
    }))
}

/// GET /interview-roles
///
/// Lists the roles accepted by `/get-interview-questions`, in catalog order.
pub async fn handle_list_roles(State(state): State<AppState>) -> Json<RolesResponse> {
    Json(RolesResponse {
        roles: state.roles.roles().map(String::from).collect(),
    })
}
