use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// The Display strings double as the client-facing `error` bodies, so they
/// are part of the HTTP contract — change them deliberately.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Missing CV file or job description")]
    MissingInput,

    #[error("Invalid multipart request: {0}")]
    Multipart(String),

    #[error("Unsupported file type. Please upload a PDF or DOCX.")]
    UnsupportedFileType,

    #[error("Failed to parse CV: {0}")]
    Extraction(String),

    #[error("AI analysis failed: {0}")]
    Llm(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::MissingInput | AppError::Multipart(_) => StatusCode::BAD_REQUEST,
            AppError::UnsupportedFileType => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            AppError::Extraction(_) | AppError::Llm(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let message = self.to_string();
        if status.is_server_error() {
            tracing::error!("{message}");
        } else {
            tracing::warn!("{message}");
        }

        (status, Json(json!({ "error": message }))).into_response()
    }
}
