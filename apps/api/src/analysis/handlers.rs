use axum::{
    extract::{Multipart, State},
    Json,
};
use bytes::Bytes;
use serde_json::Value;
use tracing::{debug, warn};

use crate::analysis::prompts::{build_analysis_prompt, ANALYSIS_SYSTEM};
use crate::analysis::report::shape_warnings;
use crate::errors::AppError;
use crate::extract::{extract_text, FileKind};
use crate::state::AppState;

/// POST /analyze_cv
///
/// Multipart fields: `cv_file` (PDF or DOC/DOCX, dispatched by filename
/// extension) and `job_description` (text). Responds with the model's JSON
/// verdict relayed verbatim.
pub async fn handle_analyze_cv(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<Value>, AppError> {
    let mut cv_file: Option<(String, Bytes)> = None;
    let mut job_description: Option<String> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Multipart(e.to_string()))?
    {
        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some("cv_file") => {
                let filename = field.file_name().unwrap_or_default().to_string();
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::Multipart(e.to_string()))?;
                cv_file = Some((filename, bytes));
            }
            Some("job_description") => {
                let text = field
                    .text()
                    .await
                    .map_err(|e| AppError::Multipart(e.to_string()))?;
                job_description = Some(text);
            }
            // unknown parts are ignored
            _ => {}
        }
    }

    let (filename, bytes) = cv_file.ok_or(AppError::MissingInput)?;
    let job_description = job_description.ok_or(AppError::MissingInput)?;

    let kind = FileKind::from_filename(&filename).ok_or(AppError::UnsupportedFileType)?;
    let cv_text =
        extract_text(kind, &bytes).map_err(|e| AppError::Extraction(e.to_string()))?;
    debug!(
        "extracted {} chars from '{}' ({kind:?})",
        cv_text.len(),
        filename
    );

    let prompt = build_analysis_prompt(&cv_text, &job_description);
    let verdict = state
        .llm
        .generate_json(ANALYSIS_SYSTEM, &prompt)
        .await
        .map_err(|e| AppError::Llm(e.to_string()))?;

    // Shape deviations are logged for operators but never alter the relay.
    for warning in shape_warnings(&verdict) {
        warn!("analysis verdict shape: {warning}");
    }

    Ok(Json(verdict))
}
