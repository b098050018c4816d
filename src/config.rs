use anyhow::{bail, Result};
use std::env;

pub const DEFAULT_PORT: u16 = 8000;
pub const DEFAULT_MODEL: &str = "gemini-1.5-flash";
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_TIMEOUT_MS: u64 = 30_000;

/// Immutable service configuration, built once at startup.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub port: u16,
    pub gemini: GeminiConfig,
}

#[derive(Debug, Clone)]
pub struct GeminiConfig {
    pub api_key: String,
    pub model: String,
    pub base_url: String,
    /// Upper bound on the outbound generateContent call. The service makes a
    /// single attempt per question; a timeout counts as a provider failure.
    pub timeout_ms: u64,
}

impl AppConfig {
    /// Reads configuration from process environment variables.
    /// A missing `GEMINI_API_KEY` is the one fatal startup condition.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let api_key = match lookup("GEMINI_API_KEY") {
            Some(key) if !key.trim().is_empty() => key,
            _ => bail!("GEMINI_API_KEY environment variable is required"),
        };

        let port = lookup("PORT")
            .and_then(|v| v.parse::<u16>().ok())
            .unwrap_or(DEFAULT_PORT);

        let model = lookup("GEMINI_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string());
        let base_url = lookup("GEMINI_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let timeout_ms = lookup("GEMINI_TIMEOUT_MS")
            .and_then(|v| v.parse::<u64>().ok())
            .unwrap_or(DEFAULT_TIMEOUT_MS);

        Ok(Self {
            port,
            gemini: GeminiConfig {
                api_key,
                model,
                base_url,
                timeout_ms,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn missing_api_key_is_fatal() {
        let err = AppConfig::from_lookup(lookup_from(&[])).unwrap_err();
        assert!(err.to_string().contains("GEMINI_API_KEY"));
    }

    #[test]
    fn blank_api_key_is_fatal() {
        let result = AppConfig::from_lookup(lookup_from(&[("GEMINI_API_KEY", "  ")]));
        assert!(result.is_err());
    }

    #[test]
    fn defaults_apply_when_only_key_is_set() {
        let config =
            AppConfig::from_lookup(lookup_from(&[("GEMINI_API_KEY", "test-key")])).unwrap();

        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.gemini.model, DEFAULT_MODEL);
        assert_eq!(config.gemini.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.gemini.timeout_ms, DEFAULT_TIMEOUT_MS);
    }

    #[test]
    fn overrides_are_honored() {
        let config = AppConfig::from_lookup(lookup_from(&[
            ("GEMINI_API_KEY", "test-key"),
            ("PORT", "9000"),
            ("GEMINI_MODEL", "gemini-1.5-pro"),
            ("GEMINI_TIMEOUT_MS", "5000"),
        ]))
        .unwrap();

        assert_eq!(config.port, 9000);
        assert_eq!(config.gemini.model, "gemini-1.5-pro");
        assert_eq!(config.gemini.timeout_ms, 5000);
    }
}
