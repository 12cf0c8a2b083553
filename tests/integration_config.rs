// ghrel: GitHub release client
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Integration tests for configuration loading.
//!
//! Tests the Config module with realistic TOML files and layering.

use std::time::Duration;

use ghrel::config::Config;
use ghrel::config::loader::ConfigLoader;
use ghrel::github::{Endpoints, ReadinessPolicy};
use ghrel::logging::LogLevel;

// =============================================================================
// Loading from TOML
// =============================================================================

#[test]
fn config_parse_full() {
    let toml = r#"
[global]
log_level = 4
dry = true

[github]
account = "octocat"
api_url = "https://ghe.example.com/api/v3/"
upload_url = "https://ghe.example.com/api/uploads"
host = "ghe.example.com"

[readiness]
attempts = 10
interval_ms = 500
"#;
    let config = Config::parse(toml).unwrap();
    assert_eq!(config.global.log_level, LogLevel::DEBUG);
    assert!(config.global.dry);

    let endpoints = Endpoints::from(&config.github);
    assert_eq!(endpoints.api_url(), "https://ghe.example.com/api/v3");
    assert_eq!(endpoints.host(), "ghe.example.com");

    let readiness = ReadinessPolicy::from(config.readiness);
    assert_eq!(readiness.attempts(), 10);
    assert_eq!(readiness.interval(), Duration::from_millis(500));
}

#[test]
fn config_format_options() {
    let config = Config::parse(
        r#"
[github]
account = "octocat"
"#,
    )
    .unwrap();
    insta::assert_snapshot!(config.format_options().join("\n"), @r"
    global.log_level = 3
    global.dry = false
    github.account = octocat
    github.api_url = https://api.github.com
    github.upload_url = https://uploads.github.com
    github.host = github.com
    readiness.attempts = 5
    readiness.interval_ms = 2000
    ");
}

// =============================================================================
// Layering
// =============================================================================

#[test]
fn config_later_files_override_earlier() {
    let dir = tempfile::tempdir().unwrap();
    let base = dir.path().join("base.toml");
    let local = dir.path().join("local.toml");
    std::fs::write(
        &base,
        "[github]\naccount = \"base\"\n\n[readiness]\nattempts = 2\n",
    )
    .unwrap();
    std::fs::write(&local, "[github]\naccount = \"local\"\n").unwrap();

    let loader = ConfigLoader::new().add_toml_file(&base).add_toml_file(&local);
    assert_eq!(loader.loaded_files().len(), 2);

    let config = loader.build().unwrap();
    assert_eq!(config.github.account, "local");
    assert_eq!(config.readiness.attempts, 2);
}

#[test]
fn config_missing_required_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    let result = ConfigLoader::new()
        .add_toml_file(dir.path().join("absent.toml"))
        .build();
    assert!(result.is_err());
}

#[test]
fn config_missing_optional_file_is_skipped() {
    let dir = tempfile::tempdir().unwrap();
    let loader = ConfigLoader::new()
        .add_toml_file_optional(dir.path().join("absent.toml"))
        .add_toml_str("[github]\naccount = \"octocat\"\n");
    assert_eq!(loader.format_loaded_files(), vec!["1. [string] <string>"]);
    assert!(loader.build().is_ok());
}
