// ghrel: GitHub release client
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Git backend abstraction layer.
//!
//! ```text
//! GitQuery (read)     --> GixBackend (pure Rust gix)
//! GitMutation (write) --> ShellBackend (git CLI)
//! ```

use crate::error::{GhrelResult, GitError, GixError, ProcessError};
use std::path::{Path, PathBuf};
use std::process::Command;

// --- Query Trait (Read-only operations) ---

/// Read-only git query operations.
pub trait GitQuery {
    /// Check if path is inside a git work tree.
    fn is_git_repo(path: &Path) -> bool;

    /// Full hex id of the commit HEAD points at.
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if discovery fails or HEAD is unborn.
    fn head_commit(path: &Path) -> GhrelResult<String>;
}

// --- Mutation Trait (Write operations) ---

/// Git operations that write to disk.
pub trait GitMutation {
    /// Clone a repository into `dest`.
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if the clone operation fails or the destination path is invalid.
    fn clone(url: &str, dest: &Path) -> GhrelResult<()>;

    /// Checkout a branch, tag, or commit.
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if the checkout operation fails.
    fn checkout(repo_path: &Path, what: &str) -> GhrelResult<()>;
}

// --- GixBackend Implementation (Pure Rust) ---

/// Pure Rust git backend using gix, read-only.
pub struct GixBackend;

impl GitQuery for GixBackend {
    fn is_git_repo(path: &Path) -> bool {
        gix::discover(path).is_ok()
    }

    fn head_commit(path: &Path) -> GhrelResult<String> {
        let repo =
            gix::discover(path).map_err(|e| GitError::Gix(GixError::Discover(Box::new(e))))?;
        let id = repo
            .head_id()
            .map_err(|e| GitError::Gix(GixError::HeadId(Box::new(e))))?;
        Ok(id.to_string())
    }
}

// --- ShellBackend Implementation (Git CLI) ---

/// Shell-based git backend using the git CLI.
///
/// Used for clone/checkout so credential helpers, proxies and TLS settings of
/// the user's git installation apply.
pub struct ShellBackend;

impl ShellBackend {
    /// Locate the git executable on PATH.
    fn git_executable() -> GhrelResult<PathBuf> {
        which::which("git").map_err(|_| {
            ProcessError::ExecutableNotFound {
                name: "git".to_string(),
            }
            .into()
        })
    }

    /// Execute a git command. Sets `GCM_INTERACTIVE=never` and `GIT_TERMINAL_PROMPT=0`.
    ///
    /// `secret` is masked in the reported command line and stderr.
    pub(crate) fn git_command(
        args: &[&str],
        cwd: &Path,
        secret: Option<&str>,
    ) -> GhrelResult<String> {
        let git = Self::git_executable()?;
        let command_line = mask(&format!("git {}", args.join(" ")), secret);

        let output = Command::new(git)
            .args(args)
            .current_dir(cwd)
            .env("GCM_INTERACTIVE", "never")
            .env("GIT_TERMINAL_PROMPT", "0")
            .output()
            .map_err(|source| ProcessError::SpawnFailed {
                command: command_line.clone(),
                source,
            })?;

        if !output.status.success() {
            return Err(GitError::CommandFailed {
                command: command_line,
                message: mask(String::from_utf8_lossy(&output.stderr).trim(), secret),
            }
            .into());
        }
        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }
}

impl GitMutation for ShellBackend {
    fn clone(url: &str, dest: &Path) -> GhrelResult<()> {
        let display_url = redact_url(url);
        let dest_name = dest
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| GitError::CloneFailed {
                url: display_url.clone(),
                message: "invalid destination path".to_string(),
            })?;

        let parent = match dest.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };
        if !parent.exists() {
            std::fs::create_dir_all(parent)?;
        }

        let secret = url_password(url);
        let args = [
            "-c",
            "advice.detachedHead=false",
            "clone",
            "--quiet",
            url,
            dest_name,
        ];
        Self::git_command(&args, parent, secret.as_deref()).map_err(|e| match e {
            crate::error::GhrelError::Git(inner) => match *inner {
                GitError::CommandFailed { message, .. } => GitError::CloneFailed {
                    url: display_url,
                    message,
                }
                .into(),
                other => other.into(),
            },
            other => other,
        })?;
        Ok(())
    }

    fn checkout(repo_path: &Path, what: &str) -> GhrelResult<()> {
        Self::git_command(
            &["-c", "advice.detachedHead=false", "checkout", "-q", what],
            repo_path,
            None,
        )
        .map_err(|e| match e {
            crate::error::GhrelError::Git(inner) => match *inner {
                GitError::CommandFailed { message, .. } => GitError::CheckoutFailed {
                    what: what.to_string(),
                    message,
                }
                .into(),
                other => other.into(),
            },
            other => other,
        })?;
        Ok(())
    }
}

impl GitQuery for ShellBackend {
    fn is_git_repo(path: &Path) -> bool {
        Self::git_command(&["rev-parse", "--is-inside-work-tree"], path, None).is_ok()
    }

    fn head_commit(path: &Path) -> GhrelResult<String> {
        Self::git_command(&["rev-parse", "HEAD"], path, None)
    }
}

/// Replace any password in the URL's userinfo with `***`.
///
/// Strings that are not URLs are returned unchanged.
#[must_use]
pub fn redact_url(url: &str) -> String {
    match reqwest::Url::parse(url) {
        Ok(mut parsed) if parsed.password().is_some() => {
            let _ = parsed.set_password(Some("***"));
            parsed.to_string()
        }
        _ => url.to_string(),
    }
}

fn url_password(url: &str) -> Option<String> {
    reqwest::Url::parse(url)
        .ok()
        .and_then(|u| u.password().map(ToString::to_string))
}

fn mask(text: &str, secret: Option<&str>) -> String {
    match secret {
        Some(s) if !s.is_empty() => text.replace(s, "***"),
        _ => text.to_string(),
    }
}
