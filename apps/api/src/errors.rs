use std::any::Any;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::frameworks::catalog::CatalogError;
use crate::llm_client::LlmError;

const INVALID_TYPE_MESSAGE: &str = "Invalid framework type";
const GENERATION_FAILED_MESSAGE: &str = "Failed to generate framework";

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// Internal variants never leak their cause to the caller: the detail is logged
/// and the response carries a fixed message.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Invalid framework type: {0}")]
    InvalidFrameworkType(String),

    #[error("LLM error: {0}")]
    Llm(#[from] LlmError),
}

impl From<CatalogError> for AppError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::UnknownType(key) => AppError::InvalidFrameworkType(key),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::InvalidFrameworkType(key) => {
                tracing::debug!("Rejected framework type {key:?}");
                (StatusCode::BAD_REQUEST, INVALID_TYPE_MESSAGE)
            }
            AppError::Llm(e) => {
                tracing::error!("Error generating framework: {e}");
                (StatusCode::INTERNAL_SERVER_ERROR, GENERATION_FAILED_MESSAGE)
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}

/// Response for a handler that panicked. Installed through `CatchPanicLayer` so an
/// unexpected failure still yields the generic error body.
pub fn panic_response(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s
    } else {
        "unknown panic payload"
    };
    tracing::error!("Handler panicked: {detail}");

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "error": GENERATION_FAILED_MESSAGE })),
    )
        .into_response()
}
