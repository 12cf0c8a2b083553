// ghrel: GitHub release client
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration management for ghrel.
//!
//! # Configuration Hierarchy
//!
//! ```text
//! Priority (low → high)
//! 1. defaults
//! 2. ghrel.toml (cwd, optional)
//! 3. --config FILE (repeatable)
//! 4. GHREL_* env vars
//! 5. CLI overrides (--account)
//! ```
//!
//! # Environment Variable Mapping
//!
//! ```text
//! GHREL_GLOBAL__DRY=true           → global.dry = true
//! GHREL_GITHUB__ACCOUNT=octocat    → github.account = "octocat"
//! GHREL_READINESS__INTERVAL_MS=500 → readiness.interval_ms = 500
//! ```
//!
//! The access token is deliberately absent: it is handed to the client by the
//! caller (`--token` / `GITHUB_TOKEN`), never read from config files.

pub mod loader;
pub mod types;

#[cfg(test)]
mod tests;

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::ConfigError;
use crate::error::Result;

use loader::ConfigLoader;
use types::{GitHubConfig, GlobalConfig, ReadinessConfig};

/// Default config file looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "ghrel.toml";

/// Environment prefix for overrides.
pub const ENV_PREFIX: &str = "GHREL";

/// Complete application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Global options.
    pub global: GlobalConfig,
    /// Account and endpoints.
    pub github: GitHubConfig,
    /// Post-creation polling.
    pub readiness: ReadinessConfig,
}

impl Config {
    /// Create a new configuration builder.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use ghrel::config::Config;
    ///
    /// let config = Config::builder()
    ///     .add_toml_file_optional("ghrel.toml")
    ///     .with_env_prefix("GHREL")
    ///     .build()?;
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    #[must_use]
    pub fn builder() -> ConfigLoader {
        ConfigLoader::new()
    }

    /// Load configuration from a single TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, contains invalid TOML, or
    /// fails validation.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::builder().add_toml_file(path).build()
    }

    /// Load configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the content is not valid TOML or fails validation.
    pub fn parse(content: &str) -> Result<Self> {
        Self::builder().add_toml_str(content).build()
    }

    /// Check cross-section invariants.
    ///
    /// # Errors
    ///
    /// Returns the first `ConfigError` found.
    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        self.github.validate()?;
        self.readiness.validate()?;
        Ok(())
    }

    /// Render the effective configuration as TOML-like `section.key = value` lines.
    #[must_use]
    pub fn format_options(&self) -> Vec<String> {
        vec![
            format!("global.log_level = {}", self.global.log_level.as_u8()),
            format!("global.dry = {}", self.global.dry),
            format!("github.account = {}", self.github.account),
            format!("github.api_url = {}", self.github.api_url),
            format!("github.upload_url = {}", self.github.upload_url),
            format!("github.host = {}", self.github.host),
            format!("readiness.attempts = {}", self.readiness.attempts),
            format!("readiness.interval_ms = {}", self.readiness.interval_ms),
        ]
    }
}
