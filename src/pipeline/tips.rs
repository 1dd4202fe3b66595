//! Wellness-tips strategy.
//!
//! A second hosted request contextualized by the completed analysis.
//! Never fails outward: any transport failure or empty extraction falls
//! back to a fixed five-item default list.

use regex::Regex;

use super::openrouter::{ChatCompletion, ChatRequest};
use super::prompt::{tips_prompt, TIPS_MAX_TOKENS, TIPS_SYSTEM_PROMPT, TIPS_TEMPERATURE};
use crate::models::AnalysisResult;

const DEFAULT_TIPS: &[&str] = &[
    "Maintain a balanced diet rich in fruits and vegetables",
    "Get adequate sleep (7-9 hours per night)",
    "Stay hydrated by drinking plenty of water throughout the day",
    "Exercise regularly but listen to your body's signals",
    "Practice stress management techniques like meditation or deep breathing",
];

/// The fixed fallback list.
pub fn default_health_tips() -> Vec<String> {
    DEFAULT_TIPS.iter().map(|t| t.to_string()).collect()
}

/// Extract up to five tips from free-text model output.
///
/// Keeps non-empty lines containing a `.` or `-`, takes the first five,
/// and strips leading ordinal/bullet markers.
pub fn extract_tips(content: &str) -> Vec<String> {
    let marker = Regex::new(r"^(?:\d+\.?\s*|-\s*)").unwrap();
    content
        .lines()
        .filter(|line| !line.trim().is_empty() && (line.contains('.') || line.contains('-')))
        .take(5)
        .map(|line| marker.replace(line.trim(), "").trim().to_string())
        .collect()
}

/// Request five wellness tips for a completed analysis.
pub fn health_tips<C: ChatCompletion>(client: &C, result: &AnalysisResult) -> Vec<String> {
    let user = tips_prompt(result);
    let request = ChatRequest {
        system: TIPS_SYSTEM_PROMPT,
        user: &user,
        max_tokens: TIPS_MAX_TOKENS,
        temperature: TIPS_TEMPERATURE,
    };

    match client.complete(&request) {
        Ok(content) => {
            let tips = extract_tips(&content);
            if tips.is_empty() {
                tracing::warn!("no tips extracted from hosted reply, using defaults");
                default_health_tips()
            } else {
                tips
            }
        }
        Err(e) => {
            tracing::warn!(error = %e, "health tips request failed, using defaults");
            default_health_tips()
        }
    }
}
