//! Axum route handlers for the Framework API.

use std::collections::BTreeMap;

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};

use crate::errors::AppError;
use crate::frameworks::catalog::{FrameworkExample, FrameworkProfile, FrameworkType};
use crate::frameworks::generator::generate_framework;
use crate::frameworks::models::{FrameworkResult, GenerateFrameworkBody, GenerationRequest};
use crate::state::AppState;

/// GET /api/framework-types
pub async fn handle_framework_types(
    State(state): State<AppState>,
) -> Json<BTreeMap<FrameworkType, FrameworkProfile>> {
    Json(state.catalog.profiles().clone())
}

/// GET /api/examples
///
/// One well-known framework per type, for the front end's inspiration panel.
pub async fn handle_examples(
    State(state): State<AppState>,
) -> Json<BTreeMap<FrameworkType, FrameworkExample>> {
    Json(state.catalog.examples().clone())
}

/// POST /api/generate-framework
///
/// A body that is not a JSON object of the expected shape is treated the same as
/// an unknown type.
pub async fn handle_generate_framework(
    State(state): State<AppState>,
    body: Result<Json<GenerateFrameworkBody>, JsonRejection>,
) -> Result<Json<FrameworkResult>, AppError> {
    let Json(body) = body.map_err(|e| AppError::InvalidFrameworkType(e.body_text()))?;
    let request = GenerationRequest::from_body(body, &state.catalog)?;

    let result = generate_framework(&state.catalog, state.generator.as_ref(), &request).await?;

    Ok(Json(result))
}
