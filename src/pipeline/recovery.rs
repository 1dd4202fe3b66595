//! Text-recovery strategy.
//!
//! Terminal fallback for "hosted call succeeded but the content was not
//! parsable": echoes a truncated view of the raw text as the summary and
//! derives urgency from the reported severities. Never fails.

use crate::models::{AnalysisResult, Severity, Symptom, UrgencyLevel};

/// Fixed boilerplate for the recovery path (also used when a hosted reply
/// omits its disclaimer).
pub const RECOVERY_DISCLAIMER: &str = "This analysis is for informational purposes only \
and should not replace professional medical advice, diagnosis, or treatment.";

const SUMMARY_LIMIT: usize = 200;

/// Urgency from severity counts: more than one severe symptom is an
/// emergency, exactly one is high, more than two moderate is medium.
pub fn recovery_urgency(symptoms: &[Symptom]) -> UrgencyLevel {
    let severe_count = symptoms
        .iter()
        .filter(|s| s.severity == Severity::Severe)
        .count();
    let moderate_count = symptoms
        .iter()
        .filter(|s| s.severity == Severity::Moderate)
        .count();

    if severe_count > 1 {
        UrgencyLevel::Emergency
    } else if severe_count == 1 {
        UrgencyLevel::High
    } else if moderate_count > 2 {
        UrgencyLevel::Medium
    } else {
        UrgencyLevel::Low
    }
}

/// Build a best-effort result from unstructured model output.
///
/// The summary is a truncated echo of the raw text by design; conditions
/// and recommendations are fixed generic templates.
pub fn recover_from_text(content: &str, symptoms: &[Symptom]) -> AnalysisResult {
    let mut summary: String = content.chars().take(SUMMARY_LIMIT).collect();
    if content.chars().count() > SUMMARY_LIMIT {
        summary.push_str("...");
    }

    AnalysisResult {
        summary,
        possible_conditions: vec![
            "Various conditions could cause these symptoms".to_string(),
            "Consultation with healthcare provider recommended".to_string(),
            "Professional diagnosis required".to_string(),
        ],
        recommendations: vec![
            "Schedule appointment with healthcare provider".to_string(),
            "Monitor symptoms and note any changes".to_string(),
            "Maintain adequate rest and hydration".to_string(),
            "Seek immediate care if symptoms worsen".to_string(),
        ],
        urgency_level: recovery_urgency(symptoms),
        disclaimer: RECOVERY_DISCLAIMER.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn symptoms(severe: usize, moderate: usize, mild: usize) -> Vec<Symptom> {
        let mut out = Vec::new();
        for i in 0..severe {
            out.push(Symptom::new(format!("severe-{i}"), Severity::Severe));
        }
        for i in 0..moderate {
            out.push(Symptom::new(format!("moderate-{i}"), Severity::Moderate));
        }
        for i in 0..mild {
            out.push(Symptom::new(format!("mild-{i}"), Severity::Mild));
        }
        out
    }

    // ── Urgency table ───────────────────────────────────────────

    #[test]
    fn no_severe_no_moderate_is_low() {
        assert_eq!(recovery_urgency(&symptoms(0, 0, 4)), UrgencyLevel::Low);
    }

    #[test]
    fn two_moderate_is_still_low() {
        assert_eq!(recovery_urgency(&symptoms(0, 2, 0)), UrgencyLevel::Low);
    }

    #[test]
    fn three_moderate_is_medium() {
        assert_eq!(recovery_urgency(&symptoms(0, 3, 0)), UrgencyLevel::Medium);
    }

    #[test]
    fn one_severe_is_high_regardless_of_moderate() {
        assert_eq!(recovery_urgency(&symptoms(1, 0, 0)), UrgencyLevel::High);
        assert_eq!(recovery_urgency(&symptoms(1, 5, 0)), UrgencyLevel::High);
    }

    #[test]
    fn two_severe_is_emergency() {
        assert_eq!(recovery_urgency(&symptoms(2, 0, 0)), UrgencyLevel::Emergency);
    }

    // ── Summary truncation ──────────────────────────────────────

    #[test]
    fn short_text_is_echoed_verbatim() {
        let result = recover_from_text("short reply", &symptoms(0, 0, 1));
        assert_eq!(result.summary, "short reply");
    }

    #[test]
    fn long_text_is_truncated_with_ellipsis() {
        let long = "x".repeat(250);
        let result = recover_from_text(&long, &symptoms(0, 0, 1));
        assert_eq!(result.summary.len(), 203);
        assert!(result.summary.ends_with("..."));
    }

    #[test]
    fn exactly_200_chars_is_not_truncated() {
        let exact = "y".repeat(200);
        let result = recover_from_text(&exact, &symptoms(0, 0, 1));
        assert_eq!(result.summary, exact);
    }

    #[test]
    fn truncation_counts_chars_not_bytes() {
        let long = "é".repeat(250);
        let result = recover_from_text(&long, &symptoms(0, 0, 1));
        assert_eq!(result.summary.chars().count(), 203);
    }

    // ── Shape ───────────────────────────────────────────────────

    #[test]
    fn all_fields_populated() {
        let result = recover_from_text("anything", &symptoms(1, 1, 1));
        assert!(!result.summary.is_empty());
        assert_eq!(result.possible_conditions.len(), 3);
        assert_eq!(result.recommendations.len(), 4);
        assert_eq!(result.disclaimer, RECOVERY_DISCLAIMER);
    }
}
