//! Text analysis endpoint.

use std::sync::Arc;

use analyzer::TextAnalysis;
use axum::Json;
use axum::body::Bytes;
use axum::extract::State;
use axum::extract::rejection::BytesRejection;
use axum::http::HeaderMap;
use axum::http::header::CONTENT_TYPE;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{ApiError, ClientInputError};
use crate::observer::AnalysisObserver;

/// Shared application state accessible from all handlers.
pub struct AppState<O: AnalysisObserver> {
    pub observer: O,
}

// -- Request types --

/// A validated analyze request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalyzeRequest {
    pub text: String,
}

impl AnalyzeRequest {
    /// Validates a raw request body.
    ///
    /// Anything that is not a JSON object, including unparsable bytes, is
    /// reported as a missing `text` field.
    pub fn from_json(body: &[u8]) -> Result<Self, ClientInputError> {
        let Ok(Value::Object(mut fields)) = serde_json::from_slice::<Value>(body) else {
            return Err(ClientInputError::MissingText);
        };

        match fields.remove("text") {
            None => Err(ClientInputError::MissingText),
            Some(Value::String(text)) => Ok(Self { text }),
            Some(_) => Err(ClientInputError::TextNotAString),
        }
    }
}

// -- Response types --

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyzeResponse {
    pub original_text: String,
    pub word_count: usize,
    pub character_count: usize,
}

impl AnalyzeResponse {
    pub fn new(original_text: String, analysis: TextAnalysis) -> Self {
        Self {
            original_text,
            word_count: analysis.word_count,
            character_count: analysis.character_count,
        }
    }

    pub fn analysis(&self) -> TextAnalysis {
        TextAnalysis {
            word_count: self.word_count,
            character_count: self.character_count,
        }
    }
}

// -- Handlers --

/// POST /analyze — count the words and characters of `text`.
#[tracing::instrument(skip_all)]
pub async fn analyze<O: AnalysisObserver>(
    State(state): State<Arc<AppState<O>>>,
    headers: HeaderMap,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<AnalyzeResponse>, ApiError> {
    let result = process(&headers, body);

    match &result {
        Ok(response) => state.observer.analyzed(&response.analysis()),
        Err(ApiError::BadRequest(err)) => state.observer.rejected(err),
        Err(err) => state.observer.failed(&err.to_string()),
    }

    result.map(Json)
}

fn process(
    headers: &HeaderMap,
    body: Result<Bytes, BytesRejection>,
) -> Result<AnalyzeResponse, ApiError> {
    if !has_json_content_type(headers) {
        return Err(ClientInputError::UnsupportedContentType.into());
    }

    let body =
        body.map_err(|e| ApiError::Internal(format!("failed to read request body: {e}")))?;
    let request = AnalyzeRequest::from_json(&body)?;
    let analysis = TextAnalysis::of(&request.text);

    Ok(AnalyzeResponse::new(request.text, analysis))
}

/// Accepts `application/json` and `application/*+json`, ignoring parameters and case.
fn has_json_content_type(headers: &HeaderMap) -> bool {
    let Some(value) = headers.get(CONTENT_TYPE).and_then(|v| v.to_str().ok()) else {
        return false;
    };

    let essence = value
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();

    match essence.strip_prefix("application/") {
        Some("json") => true,
        Some(subtype) => subtype.ends_with("+json"),
        None => false,
    }
}
