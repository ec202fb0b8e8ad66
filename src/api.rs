//! Request/response boundary for hosting layers (HTTP routes, the CLI).
//!
//! This is the only place input is validated. The core below it is total.

use crate::{
    analysis::Readability,
    context::EnhancementOptions,
    enhancer::Enhancer,
};
use serde::{Deserialize, Serialize};
use std::time::Instant;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RequestError {
    #[error("Text input is required")]
    MissingText,

    #[error("Malformed request body: {0}")]
    Malformed(#[from] serde_json::Error),
}

impl RequestError {
    /// HTTP-style status code for hosting layers.
    pub fn status(&self) -> u16 {
        match self {
            RequestError::MissingText => 400,
            RequestError::Malformed(_) => 500,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EnhanceRequest {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub options: Option<EnhancementOptions>,
}

impl EnhanceRequest {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            options: None,
        }
    }

    pub fn with_options(mut self, options: EnhancementOptions) -> Self {
        self.options = Some(options);
        self
    }

    pub fn from_json(body: &str) -> Result<Self, RequestError> {
        Ok(serde_json::from_str(body)?)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnhanceResponse {
    pub original: String,
    pub enhanced: String,
    pub improvements: Vec<String>,
    pub suggestions: Vec<String>,
    pub readability: Readability,
    pub processing_time_ms: u64,
}

/// Error body returned to clients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl From<&RequestError> for ErrorResponse {
    fn from(err: &RequestError) -> Self {
        Self {
            error: err.to_string(),
        }
    }
}

/// Validate a request and run the enhancer on it.
pub fn handle(request: &EnhanceRequest) -> Result<EnhanceResponse, RequestError> {
    let text = match request.text.as_deref() {
        Some(text) if !text.is_empty() => text,
        _ => {
            tracing::warn!("rejected enhancement request without text");
            return Err(RequestError::MissingText);
        }
    };

    let options = request.options.unwrap_or_default();
    let started = Instant::now();
    let (result, readability) = Enhancer::with_options(&options).enhance_with_readability(text);
    let processing_time_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);

    tracing::info!(
        input_len = text.len(),
        output_len = result.text.len(),
        tone = ?options.tone,
        processing_time_ms,
        "handled enhancement request"
    );

    Ok(EnhanceResponse {
        original: text.to_owned(),
        enhanced: result.text,
        improvements: result.improvements,
        suggestions: result.suggestions,
        readability,
        processing_time_ms,
    })
}

/// Parse a JSON body, handle it and serialise the outcome.
///
/// Returns the status code with the JSON body: the response on success,
/// `{"error": "..."}` otherwise.
pub fn handle_json(body: &str) -> (u16, String) {
    let outcome = EnhanceRequest::from_json(body).and_then(|req| handle(&req));
    let (status, json) = match outcome {
        Ok(response) => (200, serde_json::to_string(&response)),
        Err(err) => (err.status(), serde_json::to_string(&ErrorResponse::from(&err))),
    };
    // Both bodies are plain structs of strings and numbers.
    (status, json.unwrap_or_else(|e| format!(r#"{{"error":"{e}"}}"#)))
}
