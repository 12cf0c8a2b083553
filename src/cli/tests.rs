// ghrel: GitHub release client
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::cli::{Cli, Command};
use crate::config::Config;
use crate::logging::LogLevel;
use clap::Parser;

#[test]
fn test_parse_version() {
    let cli = Cli::try_parse_from(["ghrel", "version"]).unwrap();
    assert!(matches!(cli.command, Some(Command::Version)));
    assert!(!cli.command.unwrap().needs_token());
}

#[test]
fn test_parse_global_options() {
    let cli = Cli::try_parse_from([
        "ghrel", "-l", "5", "-a", "octocat", "--dry", "-c", "a.toml", "-c", "b.toml", "list",
        "hello",
    ])
    .unwrap();
    assert_eq!(cli.global.log_level, Some(5));
    assert_eq!(cli.global.account.as_deref(), Some("octocat"));
    assert!(cli.global.dry);
    assert_eq!(cli.global.configs.len(), 2);
    assert_eq!(
        cli.global.to_config_overrides(),
        vec![
            ("github.account".to_string(), "octocat".to_string()),
            ("global.log_level".to_string(), "5".to_string()),
            ("global.dry".to_string(), "true".to_string()),
        ]
    );
}

#[test]
fn test_parse_create_defaults_name_to_tag() {
    let cli = Cli::try_parse_from(["ghrel", "create", "hello", "v0.1.0"]).unwrap();
    match cli.command {
        Some(Command::Create(args)) => {
            assert_eq!(args.release_name(), "v0.1.0");
            assert_eq!(args.body, "");
        }
        other => panic!("expected create, got {other:?}"),
    }
}

#[test]
fn test_parse_push_requires_files() {
    assert!(Cli::try_parse_from(["ghrel", "push", "hello", "v0.1.0"]).is_err());

    let cli = Cli::try_parse_from(["ghrel", "push", "hello", "v0.1.0", "a.bin", "b.bin"]).unwrap();
    match cli.command {
        Some(Command::Push(args)) => assert_eq!(args.files.len(), 2),
        other => panic!("expected push, got {other:?}"),
    }
}

#[test]
fn test_parse_delete_with_tag() {
    let cli = Cli::try_parse_from(["ghrel", "delete", "hello", "v0.1.0", "--with-tag"]).unwrap();
    match cli.command {
        Some(Command::Delete(args)) => {
            assert!(args.with_tag);
            assert_eq!(args.tag, "v0.1.0");
        }
        other => panic!("expected delete, got {other:?}"),
    }
}

#[test]
fn test_token_hidden_in_debug() {
    let cli = Cli::try_parse_from(["ghrel", "--token", "ghp_secret", "list", "hello"]).unwrap();
    let rendered = format!("{cli:?}");
    assert!(!rendered.contains("ghp_secret"));
    assert!(cli.command.unwrap().needs_token());
}

#[test]
fn test_log_level_falls_back_to_config() {
    let config = Config::parse(
        r#"
[global]
log_level = 5

[github]
account = "octocat"
"#,
    )
    .unwrap();

    let cli = Cli::try_parse_from(["ghrel", "list", "hello"]).unwrap();
    assert_eq!(cli.global.console_level(Some(&config)), LogLevel::TRACE);
    assert_eq!(cli.global.file_level(Some(&config)), LogLevel::TRACE);
    assert_eq!(cli.global.console_level(None), LogLevel::INFO);

    let cli = Cli::try_parse_from(["ghrel", "-l", "1", "--file-log-level", "4", "list", "hello"])
        .unwrap();
    assert_eq!(cli.global.console_level(Some(&config)), LogLevel::ERROR);
    assert_eq!(cli.global.file_level(Some(&config)), LogLevel::DEBUG);
}

#[test]
fn test_needs_config() {
    let cli = Cli::try_parse_from(["ghrel", "options"]).unwrap();
    assert!(cli.command.unwrap().needs_config());
    let cli = Cli::try_parse_from(["ghrel", "configs"]).unwrap();
    assert!(!cli.command.unwrap().needs_config());
}
