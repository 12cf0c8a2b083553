// ghrel: GitHub release client
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration types for ghrel.
//!
//! ```text
//! Config: GlobalConfig, GitHubConfig, ReadinessConfig
//! ```

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::error::ConfigError;
use crate::logging::LogLevel;

/// Default REST API base URL.
pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// Default asset upload base URL.
pub const DEFAULT_UPLOAD_URL: &str = "https://uploads.github.com";

/// Default git host used to build clone URLs.
pub const DEFAULT_HOST: &str = "github.com";

/// Global options.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GlobalConfig {
    /// Console log level (0-6).
    pub log_level: LogLevel,
    /// Print mutating operations instead of performing them.
    pub dry: bool,
}

/// Hosting service endpoints and account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GitHubConfig {
    /// Account owning the repositories; also the clone principal.
    pub account: String,
    /// REST API base URL.
    pub api_url: String,
    /// Asset upload base URL.
    pub upload_url: String,
    /// Host for authenticated clone URLs.
    pub host: String,
}

impl Default for GitHubConfig {
    fn default() -> Self {
        Self {
            account: String::new(),
            api_url: DEFAULT_API_URL.to_string(),
            upload_url: DEFAULT_UPLOAD_URL.to_string(),
            host: DEFAULT_HOST.to_string(),
        }
    }
}

impl GitHubConfig {
    /// Validate account presence and URL syntax.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::MissingKey` for an empty account or host and
    /// `ConfigError::InvalidValue` for URLs that do not parse.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.account.trim().is_empty() {
            return Err(ConfigError::MissingKey {
                section: "github".to_string(),
                key: "account".to_string(),
            });
        }
        if self.host.trim().is_empty() {
            return Err(ConfigError::MissingKey {
                section: "github".to_string(),
                key: "host".to_string(),
            });
        }
        for (key, value) in [("api_url", &self.api_url), ("upload_url", &self.upload_url)] {
            reqwest::Url::parse(value).map_err(|e| ConfigError::InvalidValue {
                section: "github".to_string(),
                key: key.to_string(),
                message: format!("'{value}' is not a valid URL: {e}"),
            })?;
        }
        Ok(())
    }
}

/// Bounded polling after release creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ReadinessConfig {
    /// Maximum number of listing attempts.
    pub attempts: u32,
    /// Delay between attempts in milliseconds.
    pub interval_ms: u64,
}

impl Default for ReadinessConfig {
    fn default() -> Self {
        Self {
            attempts: 5,
            interval_ms: 2000,
        }
    }
}

impl ReadinessConfig {
    /// Delay between attempts.
    #[must_use]
    pub const fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }

    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if `attempts` is zero.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.attempts == 0 {
            return Err(ConfigError::InvalidValue {
                section: "readiness".to_string(),
                key: "attempts".to_string(),
                message: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}
