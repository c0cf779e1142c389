//! Axum route handler for résumé analysis.

use axum::{
    extract::{Multipart, State},
    Json,
};
use bytes::Bytes;
use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use crate::analysis::analyzer::{analyze_resume, AnalysisType};
use crate::errors::AppError;
use crate::extraction::{extract_text, DocumentKind, UploadedDocument};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub analysis: String,
}

/// Fields collected from the multipart form, before validation.
#[derive(Debug, Default)]
struct AnalyzeForm {
    resume: Option<(String, Bytes)>,
    job_description: Option<String>,
    analysis_option: Option<String>,
}

async fn read_form(multipart: &mut Multipart) -> Result<AnalyzeForm, AppError> {
    let mut form = AnalyzeForm::default();

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            // A `resume` part without a filename is a plain form value, not a file.
            "resume" => {
                if let Some(filename) = field.file_name().map(str::to_string) {
                    let data = field.bytes().await?;
                    form.resume = Some((filename, data));
                }
            }
            "job_description" => form.job_description = Some(field.text().await?),
            "analysis_option" => form.analysis_option = Some(field.text().await?),
            _ => {}
        }
    }

    Ok(form)
}

/// POST /analyze
///
/// Multipart form: `resume` (pdf/docx file), optional `job_description`,
/// optional `analysis_option` (default "Quick Scan").
pub async fn handle_analyze(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<AnalyzeResponse>, AppError> {
    let form = read_form(&mut multipart).await?;

    let (filename, bytes) = form
        .resume
        .ok_or_else(|| AppError::Validation("No file part in request".to_string()))?;
    if filename.is_empty() {
        return Err(AppError::Validation("No selected file".to_string()));
    }
    let kind = DocumentKind::from_filename(&filename).ok_or_else(|| {
        AppError::Validation("Unsupported file type. Upload a PDF or DOCX.".to_string())
    })?;

    let upload_id = Uuid::new_v4();
    info!(
        %upload_id,
        filename = %filename,
        bytes = bytes.len(),
        "File uploaded successfully"
    );

    let text = extract_text(UploadedDocument {
        filename,
        kind,
        bytes,
    })
    .await;
    if text.trim().is_empty() {
        return Err(AppError::Extraction(
            "Failed to extract text from the resume.".to_string(),
        ));
    }

    let analysis_type = form
        .analysis_option
        .as_deref()
        .map(AnalysisType::from_label)
        .unwrap_or_default();
    info!(%upload_id, analysis = analysis_type.label(), "Running resume analysis");

    let analysis = analyze_resume(
        state.generator.as_ref(),
        &text,
        form.job_description.as_deref(),
        analysis_type,
    )
    .await;

    Ok(Json(AnalyzeResponse { analysis }))
}
