// ghrel: GitHub release client
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Integration tests for CLI parsing.
//!
//! Tests the CLI module with realistic command-line argument patterns.

use std::path::PathBuf;

use clap::Parser;
use ghrel::cli::{Cli, Command};

// =============================================================================
// Version Command
// =============================================================================

#[test]
fn cli_version_alias() {
    let cli = Cli::try_parse_from(["ghrel", "-v"]).unwrap();
    assert!(matches!(cli.command, Some(Command::Version)));
}

#[test]
fn cli_no_command() {
    let cli = Cli::try_parse_from(["ghrel"]).unwrap();
    assert!(cli.command.is_none());
}

// =============================================================================
// Repository Commands
// =============================================================================

#[test]
fn cli_clone_with_ref() {
    let cli = Cli::try_parse_from(["ghrel", "clone", "hello", "./work/hello", "--ref", "v1.0.0"])
        .unwrap();
    let Some(Command::Clone(args)) = cli.command else {
        panic!("expected clone");
    };
    assert_eq!(args.repository, "hello");
    assert_eq!(args.destination, PathBuf::from("./work/hello"));
    assert_eq!(args.reference.as_deref(), Some("v1.0.0"));
}

#[test]
fn cli_create_with_name_and_body() {
    let cli = Cli::try_parse_from([
        "ghrel",
        "create",
        "hello",
        "v1.0.0",
        "--name",
        "Hello 1.0",
        "--body",
        "First stable release",
    ])
    .unwrap();
    let Some(Command::Create(args)) = cli.command else {
        panic!("expected create");
    };
    assert_eq!(args.release_name(), "Hello 1.0");
    assert_eq!(args.body, "First stable release");
}

#[test]
fn cli_get_and_delete_tag() {
    let cli = Cli::try_parse_from(["ghrel", "get", "hello", "v1.0.0", "dl"]).unwrap();
    let Some(Command::Get(args)) = cli.command else {
        panic!("expected get");
    };
    assert_eq!(args.destination, PathBuf::from("dl"));

    let cli = Cli::try_parse_from(["ghrel", "delete-tag", "hello", "v1.0.0"]).unwrap();
    let Some(Command::DeleteTag(args)) = cli.command else {
        panic!("expected delete-tag");
    };
    assert_eq!(args.tag, "v1.0.0");
}

#[test]
fn cli_missing_positional_fails() {
    for argv in [
        vec!["ghrel", "list"],
        vec!["ghrel", "get", "hello", "v1.0.0"],
        vec!["ghrel", "delete", "hello"],
    ] {
        assert!(Cli::try_parse_from(argv.clone()).is_err(), "{argv:?} should fail");
    }
}

// =============================================================================
// Global Options
// =============================================================================

#[test]
fn cli_log_level_out_of_range() {
    assert!(Cli::try_parse_from(["ghrel", "-l", "7", "version"]).is_err());
}

#[test]
fn cli_file_logging_options() {
    let cli = Cli::try_parse_from([
        "ghrel",
        "--log-file",
        "ghrel.log",
        "--file-log-level",
        "6",
        "--no-default-config",
        "configs",
    ])
    .unwrap();
    assert_eq!(cli.global.log_file, Some(PathBuf::from("ghrel.log")));
    assert_eq!(cli.global.file_log_level, Some(6));
    assert!(cli.global.no_default_config);
    assert!(cli.global.to_config_overrides().is_empty());
}
