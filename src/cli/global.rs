// ghrel: GitHub release client
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Global CLI options available for all commands.
//!
//! # Option Precedence
//!
//! ```text
//! --config FILE     ← Additional config files (can repeat)
//! --account NAME    ← github.account override
//! --token TOKEN     ← access token (or GITHUB_TOKEN)
//! --dry             ← Print mutating operations only
//! --log-level N     ← Console verbosity (0-6)
//! --file-log-level  ← File verbosity (defaults to --log-level)
//!
//! Precedence: CLI flags > GHREL_* env > --config > ghrel.toml > defaults
//! ```

use clap::Args;
use std::path::PathBuf;

use crate::config::Config;
use crate::logging::LogLevel;

/// Global options available for all commands.
#[derive(Clone, Default, Args)]
pub struct GlobalOptions {
    /// Path to additional TOML configuration file(s).
    /// Can be specified multiple times.
    #[arg(short = 'c', long = "config", value_name = "FILE", action = clap::ArgAction::Append)]
    pub configs: Vec<PathBuf>,

    /// Account owning the repositories (overrides github.account).
    #[arg(short = 'a', long = "account", value_name = "NAME")]
    pub account: Option<String>,

    /// GitHub access token.
    #[arg(long = "token", value_name = "TOKEN", env = "GITHUB_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Prints what mutating commands would do without calling the API.
    #[arg(long)]
    pub dry: bool,

    /// Console log level (0=silent, 1=errors, 2=warnings, 3=info, 4=debug, 5=trace, 6=dump).
    #[arg(short = 'l', long = "log-level", value_name = "LEVEL", value_parser = clap::value_parser!(u8).range(0..=6)
    )]
    pub log_level: Option<u8>,

    /// File log level, overrides --log-level for the log file.
    #[arg(long = "file-log-level", value_name = "LEVEL", value_parser = clap::value_parser!(u8).range(0..=6)
    )]
    pub file_log_level: Option<u8>,

    /// Path to log file.
    #[arg(long = "log-file", value_name = "FILE")]
    pub log_file: Option<PathBuf>,

    /// Disables loading `ghrel.toml` from the current directory.
    #[arg(long = "no-default-config")]
    pub no_default_config: bool,
}

impl GlobalOptions {
    /// Converts command-line options to `(key, value)` configuration overrides.
    #[must_use]
    pub fn to_config_overrides(&self) -> Vec<(String, String)> {
        let mut overrides = Vec::new();

        if let Some(ref account) = self.account {
            overrides.push(("github.account".to_string(), account.clone()));
        }

        if let Some(level) = self.log_level {
            overrides.push(("global.log_level".to_string(), level.to_string()));
        }

        if self.dry {
            overrides.push(("global.dry".to_string(), "true".to_string()));
        }

        overrides
    }
}

impl GlobalOptions {
    /// Console level: `--log-level`, else `global.log_level` of the loaded
    /// config (files and `GHREL_GLOBAL__LOG_LEVEL`), else info.
    #[must_use]
    pub fn console_level(&self, config: Option<&Config>) -> LogLevel {
        self.log_level
            .and_then(LogLevel::from_u8)
            .or_else(|| config.map(|c| c.global.log_level))
            .unwrap_or(LogLevel::INFO)
    }

    /// File level: `--file-log-level`, else the console level.
    #[must_use]
    pub fn file_level(&self, config: Option<&Config>) -> LogLevel {
        self.file_log_level
            .and_then(LogLevel::from_u8)
            .unwrap_or_else(|| self.console_level(config))
    }
}

impl std::fmt::Debug for GlobalOptions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GlobalOptions")
            .field("configs", &self.configs)
            .field("account", &self.account)
            .field("token", &self.token.as_ref().map(|_| "***"))
            .field("dry", &self.dry)
            .field("log_level", &self.log_level)
            .field("file_log_level", &self.file_log_level)
            .field("log_file", &self.log_file)
            .field("no_default_config", &self.no_default_config)
            .finish()
    }
}
