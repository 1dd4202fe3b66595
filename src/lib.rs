//! symcheck — symptom intake and AI-analysis pipeline.
//!
//! Turns a set of reported symptoms into a structured, urgency-ranked
//! analysis. The hosted model is the primary strategy; structured
//! extraction failures recover from the raw text, and transport failures
//! (or offline/demo configuration) fall back to a deterministic rule
//! engine. All three strategies produce the same `AnalysisResult` shape,
//! so consumers are strategy-agnostic.

pub mod config;
pub mod history;
pub mod models;
pub mod pipeline;

pub use config::{AnalysisConfig, AnalysisMode};
pub use history::{MemorySessionStore, SessionStore, SessionSummary, StoredSession};
pub use models::{AnalysisResult, Severity, Symptom, UrgencyLevel};
pub use pipeline::openrouter::{ChatCompletion, ChatRequest, OpenRouterClient};
pub use pipeline::orchestrator::SymptomAnalysisPipeline;
pub use pipeline::tips::default_health_tips;
pub use pipeline::AnalysisError;

use tracing_subscriber::EnvFilter;

/// Initialize tracing for binaries embedding the pipeline.
///
/// Honors RUST_LOG when set, otherwise uses the crate default filter.
pub fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .init();
}
