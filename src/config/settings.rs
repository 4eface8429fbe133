//! Application settings for the subtitle bot.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use url::Url;

use super::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS, DESKTOP_USER_AGENT};

/// Telegram transport configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BotConfig {
    /// Bot token issued by @BotFather.
    pub token: String,
}

impl BotConfig {
    /// Creates a new bot configuration.
    #[must_use]
    pub fn new(token: String) -> Self {
        Self { token }
    }

    /// Creates configuration from environment variables.
    ///
    /// Expects `TELEGRAM_TOKEN` to be set.
    ///
    /// # Errors
    ///
    /// Returns an error if the token variable is missing.
    pub fn from_env() -> Result<Self, ConfigError> {
        let token = std::env::var("TELEGRAM_TOKEN")
            .map_err(|_| ConfigError::MissingEnvVar("TELEGRAM_TOKEN"))?;

        Ok(Self { token })
    }
}

/// Subtitle search configuration.
///
/// Loaded once at startup and shared immutably with the fetcher.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Base host of the subtitle site.
    pub base_url: Url,

    /// User agent sent with every search request. The site rejects
    /// requests without a recognizable browser identity.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_base_url() -> Url {
    Url::parse(DEFAULT_BASE_URL).expect("default base URL is valid")
}

fn default_user_agent() -> String {
    DESKTOP_USER_AGENT.to_owned()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            user_agent: default_user_agent(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl SearchConfig {
    /// Creates search configuration from environment variables with defaults.
    ///
    /// Honors optional `SUBTITLE_BASE_URL` and `SEARCH_TIMEOUT_SECS`
    /// overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if `SUBTITLE_BASE_URL` is set but not a valid URL.
    pub fn from_env() -> Result<Self, ConfigError> {
        let base_url = match std::env::var("SUBTITLE_BASE_URL") {
            Ok(raw) => Url::parse(&raw).map_err(ConfigError::InvalidBaseUrl)?,
            Err(_) => default_base_url(),
        };

        let timeout_secs = std::env::var("SEARCH_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or_else(default_timeout_secs);

        Ok(Self {
            base_url,
            user_agent: default_user_agent(),
            timeout_secs,
        })
    }

    /// Request timeout as a [`Duration`].
    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(&'static str),

    #[error("Invalid SUBTITLE_BASE_URL: {0}")]
    InvalidBaseUrl(#[source] url::ParseError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_search_config() {
        let config = SearchConfig::default();
        assert_eq!(config.base_url.as_str(), "https://www.opensubtitles.org/");
        assert_eq!(config.timeout_secs, 10);
        assert!(config.user_agent.starts_with("Mozilla/5.0"));
    }

    #[test]
    fn test_timeout_conversion() {
        let config = SearchConfig {
            timeout_secs: 3,
            ..SearchConfig::default()
        };
        assert_eq!(config.timeout(), Duration::from_secs(3));
    }

    #[test]
    fn test_bot_config_new() {
        let config = BotConfig::new("123:abc".to_owned());
        assert_eq!(config.token, "123:abc");
    }
}
