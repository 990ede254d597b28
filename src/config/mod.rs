//! Configuration handling for the application.
//!
//! Everything is read from environment variables with development defaults,
//! so the proxy binary and the tests can run without a config file. The one
//! value without a usable default is the provider API key; `Config::from_env`
//! still succeeds without it so that client-side code paths (which never talk
//! to the provider directly) keep working, and the proxy binary rejects an
//! empty key at startup.

use std::env;
use std::error::Error;
use std::fmt::{Display, Formatter};

use crate::entities::ModelTier;

/// Environment variable names. Public so tests and the binary can refer to
/// them.
pub const ENV_API_KEY: &str = "GEMINI_API_KEY";
pub const ENV_GEMINI_BASE_URL: &str = "GEMINI_BASE_URL";
pub const ENV_RELAY_URL: &str = "CORS_RELAY_URL";
pub const ENV_BIND_ADDR: &str = "BIND_ADDR";
pub const ENV_MODEL_FAST: &str = "MODEL_FAST";
pub const ENV_MODEL_QUALITY: &str = "MODEL_QUALITY";
pub const ENV_TARGET_LANGUAGE: &str = "TARGET_LANGUAGE";

const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com";
const DEFAULT_RELAY_URL: &str = "https://api.allorigins.win/raw?url=";
const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8080";
const DEFAULT_MODEL_FAST: &str = "gemini-2.5-flash";
const DEFAULT_MODEL_QUALITY: &str = "gemini-2.5-pro";
const DEFAULT_TARGET_LANGUAGE: &str = "ko";

/// Application runtime configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    api_key: String,
    gemini_base_url: String,
    relay_url: String,
    bind_addr: String,
    model_fast: String,
    model_quality: String,
    target_language: String,
}

impl Config {
    /// Load from environment variables, falling back to development defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        let target_language =
            env::var(ENV_TARGET_LANGUAGE).unwrap_or_else(|_| DEFAULT_TARGET_LANGUAGE.to_string());
        if target_language.len() != 2 || !target_language.chars().all(|c| c.is_ascii_lowercase()) {
            return Err(ConfigError::InvalidValue {
                field: ENV_TARGET_LANGUAGE,
                reason: format!("expected a two-letter ISO 639-1 code, got '{target_language}'"),
            });
        }

        Ok(Self {
            api_key: env::var(ENV_API_KEY).unwrap_or_default(),
            gemini_base_url: env::var(ENV_GEMINI_BASE_URL)
                .unwrap_or_else(|_| DEFAULT_GEMINI_BASE_URL.to_string()),
            relay_url: env::var(ENV_RELAY_URL).unwrap_or_else(|_| DEFAULT_RELAY_URL.to_string()),
            bind_addr: env::var(ENV_BIND_ADDR).unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string()),
            model_fast: env::var(ENV_MODEL_FAST).unwrap_or_else(|_| DEFAULT_MODEL_FAST.to_string()),
            model_quality: env::var(ENV_MODEL_QUALITY)
                .unwrap_or_else(|_| DEFAULT_MODEL_QUALITY.to_string()),
            target_language,
        })
    }

    /// Provider API key. May be empty; the proxy binary validates this.
    pub fn api_key(&self) -> &str {
        &self.api_key
    }
    /// Base URL of the LLM provider (overridable for tests).
    pub fn gemini_base_url(&self) -> &str {
        &self.gemini_base_url
    }
    /// CORS relay prefix; the target URL is percent-encoded and appended.
    pub fn relay_url(&self) -> &str {
        &self.relay_url
    }
    /// TCP bind address (host:port) for the proxy server.
    pub fn bind_addr(&self) -> &str {
        &self.bind_addr
    }
    /// Two-letter code of the target display language.
    pub fn target_language(&self) -> &str {
        &self.target_language
    }

    /// Model name for a tier.
    pub fn model_for(&self, tier: ModelTier) -> &str {
        match tier {
            ModelTier::Fast => &self.model_fast,
            ModelTier::Quality => &self.model_quality,
        }
    }
}

/// Errors that can occur while building a configuration.
#[derive(Debug)]
pub enum ConfigError {
    InvalidValue { field: &'static str, reason: String },
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::InvalidValue { field, reason } => {
                write!(f, "invalid value for '{}': {}", field, reason)
            }
        }
    }
}

impl Error for ConfigError {}
