//! Session history — persistence surface for past analysis sessions.
//!
//! The pipeline only ever performs a fire-and-forget save after a
//! successful analysis; browsing and retrieval belong to the front end.
//! `SessionStore` is the injectable seam a hosted document store sits
//! behind; `MemorySessionStore` mirrors the original local-storage
//! fallback semantics (per-user scoping, newest first, 50-session cap)
//! and doubles as the test store.

use std::sync::Mutex;

use chrono::{DateTime, Local, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::models::{AnalysisResult, Symptom, UrgencyLevel};

/// Retained sessions per user; oldest pruned first.
const MAX_SESSIONS_PER_USER: usize = 50;

#[derive(Error, Debug)]
pub enum HistoryError {
    #[error("session store backend error: {0}")]
    Backend(String),
}

/// A persisted analysis session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredSession {
    pub id: Uuid,
    pub user_id: String,
    pub timestamp: DateTime<Utc>,
    pub title: String,
    pub symptoms: Vec<Symptom>,
    pub result: AnalysisResult,
}

/// Listing row for the history view.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionSummary {
    pub id: Uuid,
    pub timestamp: DateTime<Utc>,
    pub title: String,
    pub symptoms: Vec<Symptom>,
    pub urgency_level: UrgencyLevel,
}

/// Injectable persistence seam for analysis sessions.
pub trait SessionStore {
    fn save(
        &self,
        user_id: &str,
        symptoms: &[Symptom],
        result: &AnalysisResult,
    ) -> Result<Uuid, HistoryError>;

    /// All sessions for one user, newest first.
    fn list(&self, user_id: &str) -> Result<Vec<SessionSummary>, HistoryError>;

    fn get_by_id(&self, user_id: &str, id: Uuid) -> Result<Option<StoredSession>, HistoryError>;

    /// Remove every session belonging to one user.
    fn clear_all(&self, user_id: &str) -> Result<(), HistoryError>;
}

/// Derive a display title: first two symptom names, then the local date.
pub fn session_title(symptoms: &[Symptom]) -> String {
    if symptoms.is_empty() {
        return "Symptom Analysis".to_string();
    }
    let names: Vec<&str> = symptoms.iter().take(2).map(|s| s.name.as_str()).collect();
    format!(
        "{} - {}",
        names.join(", "),
        Local::now().format("%Y-%m-%d")
    )
}

/// In-process store with the fallback-store retention semantics.
#[derive(Default)]
pub struct MemorySessionStore {
    sessions: Mutex<Vec<StoredSession>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemorySessionStore {
    fn save(
        &self,
        user_id: &str,
        symptoms: &[Symptom],
        result: &AnalysisResult,
    ) -> Result<Uuid, HistoryError> {
        let mut sessions = self
            .sessions
            .lock()
            .map_err(|e| HistoryError::Backend(e.to_string()))?;

        let session = StoredSession {
            id: Uuid::new_v4(),
            user_id: user_id.to_string(),
            timestamp: Utc::now(),
            title: session_title(symptoms),
            symptoms: symptoms.to_vec(),
            result: result.clone(),
        };
        let id = session.id;
        sessions.push(session);

        // Cap retention per user, dropping the oldest beyond the limit.
        let user_count = sessions.iter().filter(|s| s.user_id == user_id).count();
        if user_count > MAX_SESSIONS_PER_USER {
            let excess = user_count - MAX_SESSIONS_PER_USER;
            let mut user_sessions: Vec<(DateTime<Utc>, Uuid)> = sessions
                .iter()
                .filter(|s| s.user_id == user_id)
                .map(|s| (s.timestamp, s.id))
                .collect();
            user_sessions.sort_by_key(|(ts, _)| *ts);
            let drop_ids: Vec<Uuid> = user_sessions
                .into_iter()
                .take(excess)
                .map(|(_, id)| id)
                .collect();
            sessions.retain(|s| !drop_ids.contains(&s.id));
        }

        Ok(id)
    }

    fn list(&self, user_id: &str) -> Result<Vec<SessionSummary>, HistoryError> {
        let sessions = self
            .sessions
            .lock()
            .map_err(|e| HistoryError::Backend(e.to_string()))?;

        let mut summaries: Vec<SessionSummary> = sessions
            .iter()
            .filter(|s| s.user_id == user_id)
            .map(|s| SessionSummary {
                id: s.id,
                timestamp: s.timestamp,
                title: s.title.clone(),
                symptoms: s.symptoms.clone(),
                urgency_level: s.result.urgency_level,
            })
            .collect();
        summaries.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        Ok(summaries)
    }

    fn get_by_id(&self, user_id: &str, id: Uuid) -> Result<Option<StoredSession>, HistoryError> {
        let sessions = self
            .sessions
            .lock()
            .map_err(|e| HistoryError::Backend(e.to_string()))?;
        Ok(sessions
            .iter()
            .find(|s| s.user_id == user_id && s.id == id)
            .cloned())
    }

    fn clear_all(&self, user_id: &str) -> Result<(), HistoryError> {
        let mut sessions = self
            .sessions
            .lock()
            .map_err(|e| HistoryError::Backend(e.to_string()))?;
        sessions.retain(|s| s.user_id != user_id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Severity;
    use crate::pipeline::offline::offline_analysis;

    fn symptoms() -> Vec<Symptom> {
        vec![
            Symptom::new("Cough", Severity::Mild),
            Symptom::new("Fever", Severity::Moderate),
            Symptom::new("Fatigue", Severity::Mild),
        ]
    }

    #[test]
    fn title_uses_first_two_names_and_date() {
        let title = session_title(&symptoms());
        assert!(title.starts_with("Cough, Fever - "));
    }

    #[test]
    fn title_for_empty_set_is_generic() {
        assert_eq!(session_title(&[]), "Symptom Analysis");
    }

    #[test]
    fn save_then_get_round_trip() {
        let store = MemorySessionStore::new();
        let symptoms = symptoms();
        let result = offline_analysis(&symptoms);
        let id = store.save("user-1", &symptoms, &result).unwrap();

        let session = store.get_by_id("user-1", id).unwrap().unwrap();
        assert_eq!(session.symptoms.len(), 3);
        assert_eq!(session.result, result);
    }

    #[test]
    fn get_by_id_is_scoped_to_user() {
        let store = MemorySessionStore::new();
        let symptoms = symptoms();
        let result = offline_analysis(&symptoms);
        let id = store.save("user-1", &symptoms, &result).unwrap();

        assert!(store.get_by_id("user-2", id).unwrap().is_none());
    }

    #[test]
    fn list_is_newest_first_and_per_user() {
        let store = MemorySessionStore::new();
        let symptoms = symptoms();
        let result = offline_analysis(&symptoms);
        store.save("user-1", &symptoms, &result).unwrap();
        let second = store.save("user-1", &symptoms, &result).unwrap();
        store.save("user-2", &symptoms, &result).unwrap();

        let listed = store.list("user-1").unwrap();
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0].id, second);
        assert_eq!(listed[0].urgency_level, result.urgency_level);
    }

    #[test]
    fn retention_caps_at_fifty_per_user() {
        let store = MemorySessionStore::new();
        let symptoms = symptoms();
        let result = offline_analysis(&symptoms);
        for _ in 0..55 {
            store.save("user-1", &symptoms, &result).unwrap();
        }
        store.save("user-2", &symptoms, &result).unwrap();

        assert_eq!(store.list("user-1").unwrap().len(), 50);
        assert_eq!(store.list("user-2").unwrap().len(), 1);
    }

    #[test]
    fn clear_all_only_touches_one_user() {
        let store = MemorySessionStore::new();
        let symptoms = symptoms();
        let result = offline_analysis(&symptoms);
        store.save("user-1", &symptoms, &result).unwrap();
        store.save("user-2", &symptoms, &result).unwrap();

        store.clear_all("user-1").unwrap();
        assert!(store.list("user-1").unwrap().is_empty());
        assert_eq!(store.list("user-2").unwrap().len(), 1);
    }
}
