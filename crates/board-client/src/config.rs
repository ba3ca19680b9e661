//! Board client configuration loaded via OrthoConfig.
//!
//! Values layer from defaults, an optional config file and `BOARD_*`
//! environment variables. Command-line flags are handled by [`crate::cli`].

use std::ffi::OsString;
use std::time::Duration;

use ortho_config::OrthoConfig;
use reqwest::Url;
use serde::Deserialize;
use thiserror::Error;

/// Backend address used when `api_url` is not configured.
pub const DEFAULT_API_URL: &str = "http://localhost:3001";
/// Request timeout used when `timeout_secs` is not configured.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Errors raised while loading or interpreting settings.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SettingsError {
    /// Layered configuration could not be merged.
    #[error("failed to load board configuration: {message}")]
    Load {
        /// Loader failure description.
        message: String,
    },
    /// `api_url` is not an absolute URL.
    #[error("invalid api url {value:?}: {message}")]
    InvalidApiUrl {
        /// The rejected value.
        value: String,
        /// Parser failure description.
        message: String,
    },
}

/// Configuration values for the board client.
#[derive(Debug, Clone, Default, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "BOARD")]
pub struct BoardSettings {
    /// Base URL of the todo backend.
    pub api_url: Option<String>,
    /// Per-request timeout in seconds.
    pub timeout_secs: Option<u64>,
}

impl BoardSettings {
    /// Load settings from the environment and configuration files only.
    ///
    /// Process arguments are left to the CLI parser.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::Load`] when a layer cannot be parsed.
    pub fn load_without_args() -> Result<Self, SettingsError> {
        Self::load_from_iter([OsString::from("board")]).map_err(|err| SettingsError::Load {
            message: err.to_string(),
        })
    }

    /// Override `api_url` when `value` is present.
    #[must_use]
    pub fn with_api_url(mut self, value: Option<String>) -> Self {
        if value.is_some() {
            self.api_url = value;
        }
        self
    }

    /// Parsed backend URL, falling back to [`DEFAULT_API_URL`].
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::InvalidApiUrl`] when the value does not parse.
    pub fn api_url(&self) -> Result<Url, SettingsError> {
        let raw = self
            .api_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .unwrap_or(DEFAULT_API_URL);
        Url::parse(raw).map_err(|err| SettingsError::InvalidApiUrl {
            value: raw.to_owned(),
            message: err.to_string(),
        })
    }

    /// Request timeout, falling back to [`DEFAULT_TIMEOUT_SECS`]. Zero is
    /// raised to one second.
    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS).max(1))
    }
}
