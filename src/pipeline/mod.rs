//! Symptom-to-analysis decision pipeline.
//!
//! Three ranked strategies produce the same `AnalysisResult` shape:
//! hosted model → text recovery → offline rule engine. Only an empty
//! symptom set is ever surfaced to callers as an error; every other
//! failure degrades to a guaranteed-successful terminal strategy.

pub mod extract;
pub mod offline;
pub mod openrouter;
pub mod orchestrator;
pub mod prompt;
pub mod recovery;
pub mod tips;

use thiserror::Error;

/// The only pipeline failure a caller can observe.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum AnalysisError {
    #[error("no symptoms provided for analysis")]
    EmptyInput,
}

/// Transport or API failure talking to the hosted model.
///
/// Never surfaced to the end user; the orchestrator absorbs every variant
/// by falling back to the offline rule engine.
#[derive(Error, Debug)]
pub enum HostedCallError {
    #[error("hosted API key invalid or unauthorized")]
    Unauthorized,
    #[error("hosted API rate limit exceeded")]
    RateLimited,
    #[error("hosted API account has insufficient balance")]
    InsufficientBalance,
    #[error("hosted API error ({status}): {message}")]
    Api { status: u16, message: String },
    #[error("network error: {0}")]
    Network(String),
    #[error("hosted API returned no content")]
    EmptyContent,
}

/// Hosted call succeeded but the reply carried no parsable structured
/// payload. Absorbed by falling back to text recovery.
#[derive(Error, Debug)]
pub enum MalformedResponse {
    #[error("no brace-delimited payload in reply")]
    NoJsonPayload,
    #[error("payload is not valid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),
    #[error("payload missing required field: {0}")]
    MissingField(&'static str),
}
