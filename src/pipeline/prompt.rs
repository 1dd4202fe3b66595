//! Prompt construction for the hosted analysis and tips requests.

use crate::models::{AnalysisResult, Symptom};

/// Temperature for the structured analysis request.
pub const ANALYSIS_TEMPERATURE: f32 = 0.3;
/// Temperature for the wellness-tips request.
pub const TIPS_TEMPERATURE: f32 = 0.7;
/// Token cap for the wellness-tips request.
pub const TIPS_MAX_TOKENS: u32 = 300;

/// Fixed system instruction establishing the educational framing.
pub const ANALYSIS_SYSTEM_PROMPT: &str = "You are a helpful medical AI assistant that \
provides preliminary symptom analysis for educational purposes only. Always emphasize \
professional medical consultation.";

pub const TIPS_SYSTEM_PROMPT: &str = "Generate 5 general health and wellness tips based \
on the symptom analysis. Focus on preventive care and general wellness.";

/// Serialize one symptom as `name (severity[, duration]) [- description]`.
pub fn symptom_line(symptom: &Symptom) -> String {
    let mut line = format!("{} ({}", symptom.name, symptom.severity.as_str());
    if let Some(duration) = &symptom.duration {
        line.push_str(", ");
        line.push_str(duration);
    }
    line.push(')');
    if let Some(description) = &symptom.description {
        line.push_str(" - ");
        line.push_str(description);
    }
    line
}

/// Join all symptom lines with `, ` for embedding in the prompt.
pub fn symptoms_text(symptoms: &[Symptom]) -> String {
    symptoms
        .iter()
        .map(symptom_line)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Full user prompt for the structured analysis request.
pub fn analysis_prompt(symptoms: &[Symptom]) -> String {
    format!(
        r#"
You are a medical AI assistant providing preliminary symptom analysis for educational purposes.
Analyze these symptoms and provide structured insights:

Symptoms: {}

Respond with a JSON object containing:
{{
  "summary": "Brief analysis of symptom patterns",
  "possibleConditions": ["3-5 possible conditions"],
  "recommendations": ["3-5 practical recommendations"],
  "urgencyLevel": "low|medium|high|emergency",
  "disclaimer": "Medical disclaimer"
}}

Guidelines:
- Be conservative and educational
- Always recommend professional medical consultation
- Focus on common conditions and general wellness
- Provide appropriate urgency assessment
- Include clear medical disclaimer
"#,
        symptoms_text(symptoms)
    )
}

/// User prompt for the follow-up wellness-tips request.
pub fn tips_prompt(result: &AnalysisResult) -> String {
    format!(
        "Based on this symptom analysis: \"{}\", provide 5 practical health tips.",
        result.summary
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Severity;

    #[test]
    fn symptom_line_name_and_severity_only() {
        let s = Symptom::new("Cough", Severity::Mild);
        assert_eq!(symptom_line(&s), "Cough (mild)");
    }

    #[test]
    fn symptom_line_with_duration() {
        let s = Symptom::new("Headache", Severity::Moderate).with_duration("2 days");
        assert_eq!(symptom_line(&s), "Headache (moderate, 2 days)");
    }

    #[test]
    fn symptom_line_with_duration_and_description() {
        let s = Symptom::new("Fever", Severity::Severe)
            .with_duration("since yesterday")
            .with_description("worse at night");
        assert_eq!(
            symptom_line(&s),
            "Fever (severe, since yesterday) - worse at night"
        );
    }

    #[test]
    fn symptoms_text_joins_with_comma() {
        let symptoms = vec![
            Symptom::new("Cough", Severity::Mild),
            Symptom::new("Fever", Severity::Severe),
        ];
        assert_eq!(symptoms_text(&symptoms), "Cough (mild), Fever (severe)");
    }

    #[test]
    fn analysis_prompt_embeds_symptoms_and_schema() {
        let symptoms = vec![Symptom::new("Dizziness", Severity::Mild)];
        let prompt = analysis_prompt(&symptoms);
        assert!(prompt.contains("Symptoms: Dizziness (mild)"));
        assert!(prompt.contains("\"possibleConditions\""));
        assert!(prompt.contains("low|medium|high|emergency"));
    }
}
