//! Axum route handler for study plan generation.

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::info;

use crate::errors::AppError;
use crate::state::AppState;
use crate::study_plan::planner::{generate_study_plan, resolve_role, resolve_weeks};

#[derive(Debug, Deserialize)]
pub struct StudyPlanRequest {
    /// Any JSON value; see `resolve_role`.
    pub role: Option<Value>,
    /// Number or numeric string; validated by `resolve_weeks`.
    pub weeks: Option<Value>,
}

#[derive(Debug, Serialize)]
pub struct StudyPlanResponse {
    pub role: String,
    pub weeks: u32,
    pub plan: String,
}

/// POST /generate-study-plan
pub async fn handle_generate_study_plan(
    State(state): State<AppState>,
    payload: Result<Json<StudyPlanRequest>, JsonRejection>,
) -> Result<Json<StudyPlanResponse>, AppError> {
    let Json(request) = payload.map_err(|e| AppError::Validation(e.body_text()))?;

    let role = resolve_role(request.role.as_ref());
    let weeks = resolve_weeks(request.weeks.as_ref())?;

    info!(role = %role, weeks, "Generating study plan");
    let plan = generate_study_plan(state.generator.as_ref(), &role, weeks).await;

    Ok(Json(StudyPlanResponse { role, weeks, plan }))
}
