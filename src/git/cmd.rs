// ghrel: GitHub release client
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Git command operations using shell backend.
//!
//! ```text
//! cmd.rs --> ShellBackend --> git (credential helpers, proxies)
//! ```

use crate::error::GhrelResult;
use std::path::Path;

use super::backend::{GitMutation, ShellBackend};

/// Clone a repository.
///
/// Passwords embedded in `url` are masked in any returned error.
///
/// # Errors
///
/// Returns a `GitError` if the clone operation fails or the destination path is invalid.
pub fn clone(url: &str, dest: &Path) -> GhrelResult<()> {
    ShellBackend::clone(url, dest)
}

/// Checkout a branch, tag, or commit.
///
/// # Errors
///
/// Returns a `GitError` if the checkout operation fails.
pub fn checkout(repo_path: &Path, what: &str) -> GhrelResult<()> {
    ShellBackend::checkout(repo_path, what)
}
