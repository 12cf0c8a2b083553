// ghrel: GitHub release client
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Wire and result types of the release API.
//!
//! ```text
//! Release  <-- GET/POST  /repos/{owner}/{repo}/releases
//! Asset    <-- GET       /repos/{owner}/{repo}/releases/{id}/assets
//! ReleaseIndex   tag -> id, built from one listing
//! TransferReport per-file outcome of uploads/downloads
//! ```

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::error::ReleaseError;

/// A release as returned by the API. Does not contain all fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Release {
    pub id: u64,
    pub tag_name: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub body: Option<String>,
    pub html_url: String,
    #[serde(default)]
    pub draft: bool,
    #[serde(default)]
    pub prerelease: bool,
}

/// A release asset. Does not contain all fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Asset {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub size: u64,
    pub browser_download_url: String,
}

/// Payload of the create-release request.
#[derive(Debug, Serialize)]
pub(crate) struct NewRelease<'a> {
    pub(crate) tag_name: &'a str,
    pub(crate) name: &'a str,
    pub(crate) body: &'a str,
}

/// Tag name -> release id for one repository, from a single listing.
///
/// Reuse one index across several by-id calls to avoid listing repeatedly.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReleaseIndex {
    repository: String,
    ids: BTreeMap<String, u64>,
}

impl ReleaseIndex {
    /// Build an index for `repository` (`owner/name`, used in errors).
    #[must_use]
    pub fn new<'a>(
        repository: impl Into<String>,
        releases: impl IntoIterator<Item = &'a Release>,
    ) -> Self {
        Self {
            repository: repository.into(),
            ids: releases
                .into_iter()
                .map(|r| (r.tag_name.clone(), r.id))
                .collect(),
        }
    }

    /// Release id for `tag`.
    ///
    /// # Errors
    ///
    /// Returns `ReleaseError::TagNotFound` if the listing had no such tag.
    pub fn resolve(&self, tag: &str) -> Result<u64, ReleaseError> {
        self.get(tag).ok_or_else(|| ReleaseError::TagNotFound {
            repository: self.repository.clone(),
            tag: tag.to_string(),
        })
    }

    #[must_use]
    pub fn get(&self, tag: &str) -> Option<u64> {
        self.ids.get(tag).copied()
    }

    #[must_use]
    pub fn contains(&self, tag: &str) -> bool {
        self.ids.contains_key(tag)
    }

    #[must_use]
    pub fn repository(&self) -> &str {
        &self.repository
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Iterate `(tag, id)` pairs in tag order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.ids.iter().map(|(tag, id)| (tag.as_str(), *id))
    }
}

/// One file that could not be transferred.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferFailure {
    pub path: PathBuf,
    pub error: String,
}

/// Outcome of a multi-file upload or download.
///
/// Transfers are independent: a failure never rolls back earlier successes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransferReport {
    pub completed: Vec<PathBuf>,
    pub failed: Vec<TransferFailure>,
}

impl TransferReport {
    pub(crate) fn record_success(&mut self, path: &Path) {
        self.completed.push(path.to_path_buf());
    }

    pub(crate) fn record_failure(&mut self, path: &Path, error: &impl std::fmt::Display) {
        self.failed.push(TransferFailure {
            path: path.to_path_buf(),
            error: error.to_string(),
        });
    }

    /// True when every file was transferred.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }
}
