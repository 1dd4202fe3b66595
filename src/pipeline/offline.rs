//! Offline rule engine.
//!
//! Deterministic, side-effect-free analysis from symptom names and
//! severities alone. The safety net of last resort: invoked when the
//! hosted call is skipped or fails, never fails itself for non-empty
//! input.
//!
//! Its urgency ladder tops out at high — unlike the text-recovery ladder,
//! which can reach emergency. The asymmetry is long-standing observable
//! behavior and is kept as-is.

use crate::models::{AnalysisResult, Severity, Symptom, UrgencyLevel};

/// Fixed boilerplate for offline results.
pub const OFFLINE_DISCLAIMER: &str = "This analysis is generated by an AI system for \
informational purposes only and should not replace professional medical advice, \
diagnosis, or treatment. Always consult with qualified healthcare professionals for \
proper medical evaluation.";

const RESPIRATORY_KEYWORDS: &[&str] = &[
    "cough",
    "shortness of breath",
    "chest pain",
    "sore throat",
];

const NEUROLOGICAL_KEYWORDS: &[&str] = &["headache", "dizziness", "fatigue"];

/// Does any lower-cased symptom name contain the first token of any keyword?
fn matches_any(names: &[String], keywords: &[&str]) -> bool {
    keywords.iter().any(|keyword| {
        let token = keyword.split_whitespace().next().unwrap_or(keyword);
        names.iter().any(|name| name.contains(token))
    })
}

/// Urgency ladder: high needs severe intensity plus more than two
/// symptoms; medium needs any severe, or moderate intensity spread over
/// more than three symptoms.
fn offline_urgency(symptoms: &[Symptom], has_severe: bool, has_moderate: bool) -> UrgencyLevel {
    if has_severe && symptoms.len() > 2 {
        UrgencyLevel::High
    } else if has_severe || (has_moderate && symptoms.len() > 3) {
        UrgencyLevel::Medium
    } else {
        UrgencyLevel::Low
    }
}

/// Produce a fully deterministic analysis from names and severities.
pub fn offline_analysis(symptoms: &[Symptom]) -> AnalysisResult {
    let names: Vec<String> = symptoms.iter().map(|s| s.name.to_lowercase()).collect();
    let has_severe = symptoms.iter().any(|s| s.severity == Severity::Severe);
    let has_moderate = symptoms.iter().any(|s| s.severity == Severity::Moderate);

    let urgency_level = offline_urgency(symptoms, has_severe, has_moderate);

    let has_respiratory = matches_any(&names, RESPIRATORY_KEYWORDS);
    let has_neurological = matches_any(&names, NEUROLOGICAL_KEYWORDS);

    let (summary, possible_conditions, recommendations) = if has_respiratory && has_severe {
        (
            "You are experiencing respiratory symptoms with severe intensity that may \
             require medical attention."
                .to_string(),
            vec![
                "Upper respiratory tract infection".to_string(),
                "Bronchitis or pneumonia".to_string(),
                "Allergic reaction".to_string(),
                "Viral infection (COVID-19, flu)".to_string(),
            ],
            vec![
                "Consider seeking medical attention promptly".to_string(),
                "Monitor breathing and seek emergency care if breathing becomes difficult"
                    .to_string(),
                "Rest and stay hydrated".to_string(),
                "Avoid strenuous activities".to_string(),
            ],
        )
    } else if has_neurological && symptoms.len() >= 2 {
        (
            "Your neurological symptoms may be related to stress, dehydration, or other \
             common conditions."
                .to_string(),
            vec![
                "Tension headache or migraine".to_string(),
                "Dehydration or electrolyte imbalance".to_string(),
                "Sleep deprivation effects".to_string(),
                "Stress-related symptoms".to_string(),
            ],
            vec![
                "Ensure adequate hydration and rest".to_string(),
                "Practice stress management techniques".to_string(),
                "Consider over-the-counter pain relief if appropriate".to_string(),
                "Monitor symptoms and consult healthcare provider if persistent".to_string(),
            ],
        )
    } else {
        (
            format!(
                "You have {} symptom{} that may indicate a common condition requiring \
                 monitoring.",
                symptoms.len(),
                if symptoms.len() > 1 { "s" } else { "" }
            ),
            vec![
                "Common viral infection".to_string(),
                "Stress-related symptoms".to_string(),
                "Minor health imbalance".to_string(),
                "Lifestyle-related condition".to_string(),
            ],
            vec![
                "Monitor symptoms over the next 24-48 hours".to_string(),
                "Get adequate rest and stay hydrated".to_string(),
                "Consider consulting healthcare provider if symptoms worsen".to_string(),
                "Practice good hygiene and self-care".to_string(),
            ],
        )
    };

    AnalysisResult {
        summary,
        possible_conditions,
        recommendations,
        urgency_level,
        disclaimer: OFFLINE_DISCLAIMER.to_string(),
    }
}
