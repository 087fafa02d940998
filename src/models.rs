//! Data models and structures
//!
//! Defines the request/response bodies exchanged on `/api/submit` and the
//! process configuration read from the environment.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Body of `POST /api/submit`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct GenerationRequest {
    #[serde(default)]
    pub description: String,
}

impl GenerationRequest {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }

    /// Returns the description unless it is empty. Whitespace is passed
    /// through to the provider untouched.
    pub fn validate(&self) -> Result<&str> {
        if self.description.is_empty() {
            return Err(Error::Validation("Description is required.".to_string()));
        }
        Ok(&self.description)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GenerationResponse {
    pub tweet: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ErrorResponse {
    pub error: String,
}

/// Either body the service can answer with.
///
/// Variant order matters for `#[serde(untagged)]` decoding.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum GenerationReply {
    Success(GenerationResponse),
    Failure(ErrorResponse),
}

// Configuration
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-1.5-flash";
pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
pub const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:3000";
pub const DEFAULT_GEMINI_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone)]
pub struct Config {
    /// Provider credential. Not validated here; a missing key shows up as an
    /// upstream authentication failure on the first generation.
    pub gemini_api_key: String,
    pub gemini_model: String,
    pub gemini_base_url: String,
    pub gemini_timeout: Duration,
    pub bind_addr: String,
    pub server_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            gemini_api_key: String::new(),
            gemini_model: DEFAULT_GEMINI_MODEL.to_string(),
            gemini_base_url: DEFAULT_GEMINI_BASE_URL.to_string(),
            gemini_timeout: Duration::from_secs(DEFAULT_GEMINI_TIMEOUT_SECS),
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
            server_url: DEFAULT_SERVER_URL.to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let gemini_api_key = lookup("GEMINI_AI_API_KEY").unwrap_or_default();
        if gemini_api_key.is_empty() {
            tracing::warn!("GEMINI_AI_API_KEY is not set; generation requests will fail upstream");
        }

        let gemini_timeout = match lookup("GEMINI_TIMEOUT_SECS") {
            Some(raw) => {
                let secs: u64 = raw.trim().parse().map_err(|_| {
                    Error::Config(format!("GEMINI_TIMEOUT_SECS must be an integer, got '{}'", raw))
                })?;
                Duration::from_secs(secs)
            }
            None => defaults.gemini_timeout,
        };

        Ok(Self {
            gemini_api_key,
            gemini_model: lookup("GEMINI_MODEL").unwrap_or(defaults.gemini_model),
            gemini_base_url: lookup("GEMINI_BASE_URL").unwrap_or(defaults.gemini_base_url),
            gemini_timeout,
            bind_addr: lookup("BIND_ADDR").unwrap_or(defaults.bind_addr),
            server_url: lookup("GENERATOR_SERVER_URL").unwrap_or(defaults.server_url),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_request_missing_description_defaults_to_empty() {
        let request: GenerationRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(request.description, "");
        assert!(matches!(request.validate(), Err(Error::Validation(_))));
    }

    #[test]
    fn test_request_whitespace_description_is_accepted() {
        let request = GenerationRequest::new("   \n\t");
        assert_eq!(request.validate().unwrap(), "   \n\t");
    }

    #[test]
    fn test_request_valid_description_returned_verbatim() {
        let request = GenerationRequest::new("  a day at the beach ");
        assert_eq!(request.validate().unwrap(), "  a day at the beach ");
    }

    #[test]
    fn test_reply_decodes_both_shapes() {
        let ok: GenerationReply = serde_json::from_str(r#"{"tweet":"hello"}"#).unwrap();
        assert_eq!(
            ok,
            GenerationReply::Success(GenerationResponse {
                tweet: "hello".to_string()
            })
        );

        let failed: GenerationReply =
            serde_json::from_str(r#"{"error":"Failed to generate tweet"}"#).unwrap();
        assert!(matches!(failed, GenerationReply::Failure(_)));
    }

    #[test]
    fn test_config_defaults_without_env() {
        let config = Config::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.gemini_api_key, "");
        assert_eq!(config.gemini_model, DEFAULT_GEMINI_MODEL);
        assert_eq!(config.gemini_timeout, Duration::from_secs(30));
        assert_eq!(config.bind_addr, DEFAULT_BIND_ADDR);
        assert_eq!(config.server_url, DEFAULT_SERVER_URL);
    }

    #[test]
    fn test_config_reads_overrides() {
        let config = Config::from_lookup(lookup_from(&[
            ("GEMINI_AI_API_KEY", "secret"),
            ("GEMINI_MODEL", "gemini-2.0-flash"),
            ("GEMINI_TIMEOUT_SECS", "5"),
            ("BIND_ADDR", "127.0.0.1:8080"),
        ]))
        .unwrap();

        assert_eq!(config.gemini_api_key, "secret");
        assert_eq!(config.gemini_model, "gemini-2.0-flash");
        assert_eq!(config.gemini_timeout, Duration::from_secs(5));
        assert_eq!(config.bind_addr, "127.0.0.1:8080");
    }

    #[test]
    fn test_config_rejects_bad_timeout() {
        let err = Config::from_lookup(lookup_from(&[("GEMINI_TIMEOUT_SECS", "soon")])).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }
}
