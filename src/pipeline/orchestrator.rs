//! Analysis orchestration.
//!
//! One analysis request is a linear decision process: validate input,
//! select mode, then lead with the hosted model. A hosted transport
//! failure falls through to the offline rule engine; an unparsable
//! hosted reply falls through to text recovery. Both fallbacks are
//! silent — the caller always receives some `AnalysisResult`, and only
//! an empty symptom set is ever reported as an error.

use super::extract::extract_structured;
use super::offline::offline_analysis;
use super::openrouter::{ChatCompletion, ChatRequest, OpenRouterClient};
use super::prompt::{analysis_prompt, ANALYSIS_SYSTEM_PROMPT, ANALYSIS_TEMPERATURE};
use super::recovery::recover_from_text;
use super::{AnalysisError, HostedCallError};
use crate::config::{AnalysisConfig, AnalysisMode};
use crate::history::SessionStore;
use crate::models::{AnalysisResult, Symptom};

/// The symptom analysis pipeline, generic over the hosted-model seam.
pub struct SymptomAnalysisPipeline<C: ChatCompletion> {
    client: C,
    config: AnalysisConfig,
}

impl SymptomAnalysisPipeline<OpenRouterClient> {
    /// Production pipeline: OpenRouter client built from the same config.
    pub fn from_config(config: AnalysisConfig) -> Self {
        let client = OpenRouterClient::new(&config);
        Self::new(client, config)
    }
}

impl<C: ChatCompletion> SymptomAnalysisPipeline<C> {
    pub fn new(client: C, config: AnalysisConfig) -> Self {
        Self { client, config }
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// Analyze a symptom set, degrading through the strategy chain as
    /// needed. Fails only for an empty input, before any network attempt.
    pub fn analyze(&self, symptoms: &[Symptom]) -> Result<AnalysisResult, AnalysisError> {
        if symptoms.is_empty() {
            return Err(AnalysisError::EmptyInput);
        }

        match self.config.mode() {
            AnalysisMode::SkipToOffline => {
                tracing::info!("hosted analysis disabled, using offline rule engine");
                Ok(offline_analysis(symptoms))
            }
            AnalysisMode::AttemptHosted => Ok(self.hosted_or_fallback(symptoms)),
        }
    }

    /// Analyze, then persist the session for a signed-in user outside demo
    /// mode. Save failures are logged and swallowed; they never affect the
    /// returned result.
    pub fn analyze_and_save<S: SessionStore>(
        &self,
        symptoms: &[Symptom],
        user_id: Option<&str>,
        store: &S,
    ) -> Result<AnalysisResult, AnalysisError> {
        let result = self.analyze(symptoms)?;

        if let Some(user_id) = user_id {
            if !self.config.demo_mode {
                match store.save(user_id, symptoms, &result) {
                    Ok(id) => tracing::debug!(session_id = %id, "analysis session saved"),
                    Err(e) => tracing::warn!(error = %e, "failed to persist analysis session"),
                }
            }
        }

        Ok(result)
    }

    /// Request five wellness tips for a completed analysis. Never fails;
    /// any hosted failure returns the fixed default list.
    pub fn health_tips(&self, result: &AnalysisResult) -> Vec<String> {
        super::tips::health_tips(&self.client, result)
    }

    fn hosted_or_fallback(&self, symptoms: &[Symptom]) -> AnalysisResult {
        let user = analysis_prompt(symptoms);
        let request = ChatRequest {
            system: ANALYSIS_SYSTEM_PROMPT,
            user: &user,
            max_tokens: self.config.max_tokens,
            temperature: ANALYSIS_TEMPERATURE,
        };

        let content = match self.client.complete(&request) {
            Ok(content) => content,
            Err(e) => {
                log_hosted_failure(&e);
                return offline_analysis(symptoms);
            }
        };

        match extract_structured(&content) {
            Ok(result) => result,
            Err(e) => {
                tracing::warn!(error = %e, "structured extraction failed, recovering from raw text");
                recover_from_text(&content, symptoms)
            }
        }
    }
}

fn log_hosted_failure(error: &HostedCallError) {
    match error {
        HostedCallError::Unauthorized => {
            tracing::warn!("hosted API key invalid, using offline analysis")
        }
        HostedCallError::RateLimited => {
            tracing::warn!("hosted API rate limit exceeded, using offline analysis")
        }
        HostedCallError::InsufficientBalance => {
            tracing::warn!("hosted API has insufficient balance, using offline analysis")
        }
        other => tracing::warn!(error = %other, "hosted API error, using offline analysis"),
    }
}
