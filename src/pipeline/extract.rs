//! Structured extraction from hosted-model replies.
//!
//! Locates the first brace-delimited `{...}` substring and parses it as an
//! `AnalysisResult`. The model's own urgency assessment is trusted as
//! returned; only `summary` and `possibleConditions` are hard requirements.

use serde::Deserialize;

use super::MalformedResponse;
use crate::models::{AnalysisResult, UrgencyLevel};
use crate::pipeline::recovery::RECOVERY_DISCLAIMER;

/// Wire shape as the model returns it; everything optional so a partial
/// reply can still be salvaged.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawAnalysis {
    summary: Option<String>,
    possible_conditions: Option<Vec<String>>,
    #[serde(default)]
    recommendations: Vec<String>,
    urgency_level: Option<UrgencyLevel>,
    disclaimer: Option<String>,
}

/// Parse the reply's embedded JSON payload into an `AnalysisResult`.
///
/// Requires a non-empty `summary` and a `possibleConditions` array. A
/// missing urgency defaults to low and a missing disclaimer is replaced
/// with the fixed boilerplate, since every strategy must supply both.
pub fn extract_structured(content: &str) -> Result<AnalysisResult, MalformedResponse> {
    let start = content.find('{').ok_or(MalformedResponse::NoJsonPayload)?;
    let end = content
        .rfind('}')
        .filter(|&end| end > start)
        .ok_or(MalformedResponse::NoJsonPayload)?;

    let raw: RawAnalysis = serde_json::from_str(&content[start..=end])?;

    let summary = raw
        .summary
        .filter(|s| !s.trim().is_empty())
        .ok_or(MalformedResponse::MissingField("summary"))?;
    let possible_conditions = raw
        .possible_conditions
        .ok_or(MalformedResponse::MissingField("possibleConditions"))?;

    Ok(AnalysisResult {
        summary,
        possible_conditions,
        recommendations: raw.recommendations,
        urgency_level: raw.urgency_level.unwrap_or(UrgencyLevel::Low),
        disclaimer: raw
            .disclaimer
            .filter(|d| !d.trim().is_empty())
            .unwrap_or_else(|| RECOVERY_DISCLAIMER.to_string()),
    })
}
