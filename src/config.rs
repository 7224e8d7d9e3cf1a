//! Upstream connection configuration
//!
//! An `AiConfig` is an immutable value resolved once and passed into the
//! orchestrator at construction. Nothing here is global or mutable: two
//! concurrent requests with different per-request keys get two configs.

use serde::{Deserialize, Serialize};

use crate::error::{IdeaStormError, Result};

/// Default chat-completion base URL (OpenAI-compatible)
pub const DEFAULT_API_URL: &str = "https://api.openai.com/v1";
/// Model used when none is configured
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";

/// Connection settings for the chat-completion upstream
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AiConfig {
    pub api_key: String,
    pub api_url: String,
    pub model: String,
}

impl AiConfig {
    /// Load configuration from environment variables.
    ///
    /// `IDEASTORM_API_KEY` may be absent at this point; key presence is
    /// enforced by [`AiConfig::resolve`] once any per-request override is
    /// known.
    pub fn from_env() -> Self {
        Self {
            api_key: std::env::var("IDEASTORM_API_KEY").unwrap_or_default(),
            api_url: std::env::var("IDEASTORM_API_URL")
                .unwrap_or_else(|_| DEFAULT_API_URL.to_string()),
            model: std::env::var("IDEASTORM_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string()),
        }
    }

    /// Resolve the effective config for one orchestrator instance.
    ///
    /// An explicit per-request key (e.g. from a transport header) takes
    /// precedence over the configured default. If neither yields a
    /// non-empty key this fails with a configuration error, before any
    /// prompt is built.
    pub fn resolve(&self, override_key: Option<&str>) -> Result<AiConfig> {
        let key = match override_key {
            Some(k) if !k.trim().is_empty() => k.to_string(),
            _ => self.api_key.clone(),
        };
        if key.trim().is_empty() {
            return Err(IdeaStormError::Config {
                message: "no API key resolvable from request or configuration".to_string(),
            });
        }
        Ok(AiConfig {
            api_key: key,
            api_url: self.api_url.clone(),
            model: self.model.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base(key: &str) -> AiConfig {
        AiConfig {
            api_key: key.to_string(),
            api_url: DEFAULT_API_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
        }
    }

    #[test]
    fn override_key_takes_precedence() {
        let resolved = base("configured").resolve(Some("per-request")).unwrap();
        assert_eq!(resolved.api_key, "per-request");
    }

    #[test]
    fn falls_back_to_configured_key() {
        let resolved = base("configured").resolve(None).unwrap();
        assert_eq!(resolved.api_key, "configured");

        // Blank override is treated as absent
        let resolved = base("configured").resolve(Some("  ")).unwrap();
        assert_eq!(resolved.api_key, "configured");
    }

    #[test]
    fn no_key_anywhere_is_a_config_error() {
        let err = base("").resolve(None).unwrap_err();
        assert!(matches!(err, IdeaStormError::Config { .. }));

        let err = base("  ").resolve(Some("")).unwrap_err();
        assert!(matches!(err, IdeaStormError::Config { .. }));
    }
}
