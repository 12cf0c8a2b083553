// ghrel: GitHub release client
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Git query operations using gix backend.
//!
//! ```text
//! query.rs --> GixBackend --> .git/ (no subprocess)
//! ```

use crate::error::GhrelResult;
use std::path::Path;

use super::backend::{GitQuery, GixBackend};

#[must_use]
pub fn is_git_repo(path: &Path) -> bool {
    GixBackend::is_git_repo(path)
}

/// Commit id HEAD points at.
///
/// # Errors
///
/// Returns a `GitError` if repository discovery or head resolution fails.
pub fn head_commit(path: &Path) -> GhrelResult<String> {
    GixBackend::head_commit(path)
}
