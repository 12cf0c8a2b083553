// ghrel: GitHub release client
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::types::{DEFAULT_API_URL, DEFAULT_HOST, DEFAULT_UPLOAD_URL, ReadinessConfig};
use super::{Config, ConfigLoader};
use crate::error::ConfigError;
use crate::logging::LogLevel;
use std::time::Duration;

#[test]
fn test_default_config() {
    let config = Config::default();
    assert_eq!(config.global.log_level, LogLevel::INFO);
    assert!(!config.global.dry);
    assert!(config.github.account.is_empty());
    assert_eq!(config.github.api_url, DEFAULT_API_URL);
    assert_eq!(config.github.upload_url, DEFAULT_UPLOAD_URL);
    assert_eq!(config.github.host, DEFAULT_HOST);
    assert_eq!(config.readiness.attempts, 5);
    assert_eq!(config.readiness.interval(), Duration::from_secs(2));
}

#[test]
fn test_default_config_fails_validation() {
    let err = Config::default().validate().unwrap_err();
    assert!(matches!(
        err,
        ConfigError::MissingKey { ref section, ref key } if section == "github" && key == "account"
    ));
}

#[test]
fn test_parse_minimal() {
    let config = Config::parse(
        r#"
[github]
account = "octocat"
"#,
    )
    .unwrap();
    assert_eq!(config.github.account, "octocat");
    assert_eq!(config.github.api_url, DEFAULT_API_URL);
}

#[test]
fn test_override_wins_over_file() {
    let config = ConfigLoader::new()
        .add_toml_str(
            r#"
[github]
account = "from-file"
"#,
        )
        .set("github.account", "from-cli")
        .unwrap()
        .build()
        .unwrap();
    assert_eq!(config.github.account, "from-cli");
}

#[test]
fn test_invalid_api_url_rejected() {
    let result = Config::parse(
        r#"
[github]
account = "octocat"
api_url = "not a url"
"#,
    );
    let err = result.unwrap_err();
    let config_err = err.downcast_ref::<ConfigError>().unwrap();
    assert!(matches!(config_err, ConfigError::InvalidValue { key, .. } if key == "api_url"));
}

#[test]
fn test_zero_attempts_rejected() {
    let readiness = ReadinessConfig {
        attempts: 0,
        interval_ms: 10,
    };
    assert!(readiness.validate().is_err());
}

#[test]
fn test_unknown_key_rejected() {
    let result = Config::parse(
        r#"
[github]
account = "octocat"
token = "should-not-live-here"
"#,
    );
    assert!(result.is_err());
}

#[test]
fn test_format_options() {
    let config = Config::parse(
        r#"
[github]
account = "octocat"

[readiness]
attempts = 3
interval_ms = 250
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
    readiness.attempts = 3
    readiness.interval_ms = 250
    ");
}

#[test]
fn test_loaded_files_tracking() {
    let loader = ConfigLoader::new()
        .add_toml_str("[github]\naccount = \"a\"")
        .add_toml_file_optional("definitely-missing-ghrel.toml");
    assert_eq!(
        loader.format_loaded_files(),
        vec!["1. [string] <string>".to_string()]
    );
}

#[test]
fn test_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("ghrel.toml");
    std::fs::write(&path, "[github]\naccount = \"octocat\"\nhost = \"ghe.example.com\"\n").unwrap();

    let config = Config::from_file(&path).unwrap();
    assert_eq!(config.github.host, "ghe.example.com");
    assert!(Config::from_file(dir.path().join("absent.toml")).is_err());
}
