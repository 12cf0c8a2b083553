// ghrel: GitHub release client
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{LogConfig, LogLevel};
use tracing::Level;

#[test]
fn test_log_level_filter_strings() {
    let filters: Vec<_> = (0..=6)
        .filter_map(LogLevel::from_u8)
        .map(|level| (level.as_u8(), level.to_filter_string()))
        .collect();

    assert_eq!(
        filters,
        [
            (0, "off"),
            (1, "error"),
            (2, "warn"),
            (3, "info"),
            (4, "debug"),
            (5, "info,ghrel=trace"),
            (6, "trace"),
        ]
    );
}

#[test]
fn test_log_level_out_of_range() {
    assert!(LogLevel::new(7).is_err());
    assert!(LogLevel::from_u8(42).is_none());
    assert_eq!(LogLevel::try_from(4).ok(), Some(LogLevel::DEBUG));
}

#[test]
fn test_log_level_to_tracing() {
    assert_eq!(LogLevel::SILENT.to_tracing_level(), None);
    assert_eq!(LogLevel::WARN.to_tracing_level(), Some(Level::WARN));
    assert_eq!(LogLevel::DUMP.to_tracing_level(), Some(Level::TRACE));
}

#[test]
fn test_log_config_defaults() {
    let config = LogConfig::default();
    assert_eq!(config.console_level(), LogLevel::INFO);
    assert_eq!(config.file_level(), LogLevel::TRACE);
    assert!(config.log_file().is_none());
    assert!(!config.show_target());
}

#[test]
fn test_log_level_deserialize_rejects_invalid() {
    let ok: LogLevel = serde_json::from_str("5").unwrap();
    assert_eq!(ok, LogLevel::TRACE);
    assert!(serde_json::from_str::<LogLevel>("9").is_err());
}
