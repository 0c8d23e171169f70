use std::sync::Arc;

use axum::Json;
use axum::body::Bytes;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use secrecy::SecretString;
use serde::Deserialize;
use serde_json::Value;

use super::AppState;
use super::error::ApiError;
use crate::evaluator::analyze_password;
use crate::generator::{GenerateRequest, generate};
use crate::types::{AnalysisResult, GeneratedPassword};

#[derive(Debug, Deserialize)]
pub struct CheckRequest {
    #[serde(alias = "pswd")]
    password: Option<String>,
}

pub async fn health() -> Json<Value> {
    Json(serde_json::json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

pub async fn check_password(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<CheckRequest>, JsonRejection>,
) -> Result<Json<AnalysisResult>, ApiError> {
    let Json(request) = payload.map_err(|e| ApiError::BadRequest(e.body_text()))?;
    let password = request
        .password
        .map(|p| SecretString::new(p.into_boxed_str()))
        .ok_or_else(|| ApiError::BadRequest("No password provided".to_string()))?;

    let analysis = analyze_password(&password, &state.words, state.breach.as_ref()).await;
    Ok(Json(analysis))
}

/// An empty body selects the default generator.
pub async fn generate_password(body: Bytes) -> Result<Json<GeneratedPassword>, ApiError> {
    let body: Value = if body.iter().all(u8::is_ascii_whitespace) {
        Value::Null
    } else {
        serde_json::from_slice(&body)
            .map_err(|e| ApiError::BadRequest(format!("Invalid JSON body: {e}")))?
    };

    let request = GenerateRequest::from_json(body)?;
    Ok(Json(generate(&request)?))
}
