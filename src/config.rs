//! Analysis configuration.
//!
//! All configuration is read once at composition time and passed into the
//! pipeline explicitly; strategy functions never read the environment
//! themselves, so mode selection stays a pure function of this struct.

/// Hosted chat-completions endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://openrouter.ai/api/v1/chat/completions";

pub const DEFAULT_MODEL: &str = "anthropic/claude-sonnet-4";
pub const DEFAULT_MAX_TOKENS: u32 = 1000;
pub const DEFAULT_REFERRER_URL: &str = "http://localhost:5174";
pub const DEFAULT_SITE_NAME: &str = "AI Symptom Checker";

/// Default log filter when RUST_LOG is not set.
pub fn default_log_filter() -> &'static str {
    "symcheck=info"
}

/// Which strategy the pipeline leads with for one analysis request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnalysisMode {
    /// Call the hosted model, with extraction/recovery/offline fallbacks.
    AttemptHosted,
    /// Go straight to the offline rule engine.
    SkipToOffline,
}

/// Configuration for one analysis pipeline instance.
#[derive(Debug, Clone)]
pub struct AnalysisConfig {
    /// Bearer token for the hosted API. Absent means offline-only.
    pub api_key: Option<String>,
    /// Forces the offline path even when a key is present.
    pub demo_mode: bool,
    pub model: String,
    pub max_tokens: u32,
    /// Sent as the HTTP-Referer header on hosted requests.
    pub referrer_url: String,
    /// Sent as the X-Title header on hosted requests.
    pub site_name: String,
    pub endpoint: String,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            demo_mode: false,
            model: DEFAULT_MODEL.to_string(),
            max_tokens: DEFAULT_MAX_TOKENS,
            referrer_url: DEFAULT_REFERRER_URL.to_string(),
            site_name: DEFAULT_SITE_NAME.to_string(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
        }
    }
}

impl AnalysisConfig {
    /// Build configuration from the recognized environment options.
    ///
    /// OPENROUTER_API_KEY, USE_DEMO_MODE ("true" enables), AI_MODEL,
    /// AI_MAX_TOKENS, SITE_URL, SITE_NAME. Unset or unparsable values
    /// fall back to the defaults above.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            api_key: std::env::var("OPENROUTER_API_KEY")
                .ok()
                .filter(|k| !k.trim().is_empty()),
            demo_mode: std::env::var("USE_DEMO_MODE")
                .map(|v| v == "true")
                .unwrap_or(false),
            model: std::env::var("AI_MODEL").unwrap_or(defaults.model),
            max_tokens: std::env::var("AI_MAX_TOKENS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.max_tokens),
            referrer_url: std::env::var("SITE_URL").unwrap_or(defaults.referrer_url),
            site_name: std::env::var("SITE_NAME").unwrap_or(defaults.site_name),
            endpoint: defaults.endpoint,
        }
    }

    /// Mode selection: offline iff no usable API key or demo mode is on.
    /// Pure function of this struct, evaluated once per analysis request.
    pub fn mode(&self) -> AnalysisMode {
        let has_key = self
            .api_key
            .as_deref()
            .is_some_and(|k| !k.trim().is_empty());
        if !has_key || self.demo_mode {
            AnalysisMode::SkipToOffline
        } else {
            AnalysisMode::AttemptHosted
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_key(demo_mode: bool) -> AnalysisConfig {
        AnalysisConfig {
            api_key: Some("sk-test".into()),
            demo_mode,
            ..AnalysisConfig::default()
        }
    }

    #[test]
    fn mode_attempts_hosted_with_key_and_no_demo() {
        assert_eq!(with_key(false).mode(), AnalysisMode::AttemptHosted);
    }

    #[test]
    fn mode_skips_to_offline_in_demo_mode() {
        assert_eq!(with_key(true).mode(), AnalysisMode::SkipToOffline);
    }

    #[test]
    fn mode_skips_to_offline_without_key() {
        assert_eq!(AnalysisConfig::default().mode(), AnalysisMode::SkipToOffline);
    }

    #[test]
    fn mode_treats_blank_key_as_absent() {
        let config = AnalysisConfig {
            api_key: Some("   ".into()),
            ..AnalysisConfig::default()
        };
        assert_eq!(config.mode(), AnalysisMode::SkipToOffline);
    }

    #[test]
    fn defaults_match_hosted_api_expectations() {
        let config = AnalysisConfig::default();
        assert_eq!(config.model, "anthropic/claude-sonnet-4");
        assert_eq!(config.max_tokens, 1000);
        assert!(config.endpoint.ends_with("/chat/completions"));
    }
}
