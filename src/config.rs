use anyhow::{Context, Result};
use dotenvy::dotenv;
use std::env;
use std::time::Duration;

const DEFAULT_MODEL: &str = "gemini-3-flash-preview";
const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Settings for the listing advice helper
#[derive(Debug, Clone)]
pub struct AdviceConfig {
    /// Advice is disabled when no key is configured
    pub api_key: Option<String>,
    pub model: String,
    pub base_url: String,
    pub timeout: Duration,
}

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub advice: AdviceConfig,
    /// Latency of the simulated auth backend
    pub auth_delay: Duration,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from any key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup("GEMINI_API_KEY")
            .or_else(|| lookup("API_KEY"))
            .filter(|key| !key.trim().is_empty());

        let timeout_secs: u64 = lookup("ADVICE_TIMEOUT_SECS")
            .unwrap_or_else(|| "30".to_string())
            .parse()
            .context("ADVICE_TIMEOUT_SECS must be a valid number")?;

        let auth_delay_ms: u64 = lookup("AUTH_DELAY_MS")
            .unwrap_or_else(|| "1200".to_string())
            .parse()
            .context("AUTH_DELAY_MS must be a valid number")?;

        Ok(Self {
            advice: AdviceConfig {
                api_key,
                model: lookup("GEMINI_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
                base_url: lookup("GEMINI_BASE_URL")
                    .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
                timeout: Duration::from_secs(timeout_secs),
            },
            auth_delay: Duration::from_millis(auth_delay_ms),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(lookup(&[])).unwrap();
        assert!(config.advice.api_key.is_none());
        assert_eq!(config.advice.model, DEFAULT_MODEL);
        assert_eq!(config.advice.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.advice.timeout, Duration::from_secs(30));
        assert_eq!(config.auth_delay, Duration::from_millis(1200));
    }

    #[test]
    fn test_api_key_fallback() {
        let config = Config::from_lookup(lookup(&[("API_KEY", "abc")])).unwrap();
        assert_eq!(config.advice.api_key.as_deref(), Some("abc"));

        let config =
            Config::from_lookup(lookup(&[("API_KEY", "abc"), ("GEMINI_API_KEY", "xyz")])).unwrap();
        assert_eq!(config.advice.api_key.as_deref(), Some("xyz"));

        let config = Config::from_lookup(lookup(&[("GEMINI_API_KEY", " ")])).unwrap();
        assert!(config.advice.api_key.is_none());
    }

    #[test]
    fn test_invalid_numbers() {
        assert!(Config::from_lookup(lookup(&[("ADVICE_TIMEOUT_SECS", "soon")])).is_err());
        assert!(Config::from_lookup(lookup(&[("AUTH_DELAY_MS", "-1")])).is_err());
    }
}
