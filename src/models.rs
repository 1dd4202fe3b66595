//! Core data types shared across the analysis pipeline and session history.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Severity of a reported symptom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Mild,
    Moderate,
    Severe,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Mild => "mild",
            Self::Moderate => "moderate",
            Self::Severe => "severe",
        }
    }
}

/// Urgency of an analysis outcome. Totally ordered: Low < Medium < High < Emergency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UrgencyLevel {
    Low,
    Medium,
    High,
    Emergency,
}

impl UrgencyLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Emergency => "emergency",
        }
    }
}

/// One reported complaint. Held in memory for the duration of a session;
/// replaced wholesale when a new session starts or a stored one is restored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Symptom {
    pub id: Uuid,
    pub name: String,
    pub severity: Severity,
    pub duration: Option<String>,
    pub description: Option<String>,
}

impl Symptom {
    pub fn new(name: impl Into<String>, severity: Severity) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            severity,
            duration: None,
            description: None,
        }
    }

    pub fn with_duration(mut self, duration: impl Into<String>) -> Self {
        self.duration = Some(duration.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// The single normalized analysis output, regardless of which strategy
/// produced it (hosted model, text recovery, or offline rule engine).
///
/// Field names serialize in camelCase to match the hosted-API JSON shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub summary: String,
    pub possible_conditions: Vec<String>,
    pub recommendations: Vec<String>,
    pub urgency_level: UrgencyLevel,
    pub disclaimer: String,
}
