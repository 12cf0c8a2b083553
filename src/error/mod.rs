// ghrel: GitHub release client
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Error handling module.
//!
//! ```text
//!             GhrelError (~24 bytes)
//!                     |
//!   +------+------+---+---+------+------+------+
//!   |      |      |       |      |      |      |
//!   v      v      v       v      v      v      v
//!  Git    Net    Cfg   Release  Proc    Fs     Io
//!  Box    Box    Box     Box    Box    Box    Box
//!
//! Sub-errors (unboxed internally):
//!   Git     Gix, CommandFailed, CloneFailed
//!   Network Reqwest, HttpError, DownloadFailed
//!   Config  MissingKey, InvalidValue
//!   Release TagNotFound, UnexpectedStatus, NotReady
//!   Process ExecutableNotFound, SpawnFailed
//!   Fs      IoError
//!
//! All variants boxed => GhrelError fits in 24 bytes.
//! ```

use thiserror::Error;

/// Convenience alias for `anyhow::Result`.
pub type Result<T> = anyhow::Result<T>;

/// Result type using [`GhrelError`].
pub type GhrelResult<T> = std::result::Result<T, GhrelError>;

/// Top-level library error type.
///
/// All sub-errors are boxed to keep this enum at ~24 bytes on the stack.
#[derive(Debug, Error)]
pub enum GhrelError {
    /// Git operation failed.
    #[error("git error: {0}")]
    Git(#[from] Box<GitError>),

    /// Network operation failed.
    #[error("network error: {0}")]
    Network(#[from] Box<NetworkError>),

    /// Configuration error.
    #[error("config error: {0}")]
    Config(#[from] Box<ConfigError>),

    /// Release API operation failed.
    #[error("release error: {0}")]
    Release(#[from] Box<ReleaseError>),

    /// Process execution error.
    #[error("process error: {0}")]
    Process(#[from] Box<ProcessError>),

    /// Filesystem error.
    #[error("filesystem error: {0}")]
    Fs(#[from] Box<FsError>),

    /// I/O error.
    #[error("io error: {0}")]
    Io(Box<std::io::Error>),
}

impl GhrelError {
    /// Returns the release error, if this is one.
    #[must_use]
    pub fn as_release(&self) -> Option<&ReleaseError> {
        match self {
            Self::Release(err) => Some(err),
            _ => None,
        }
    }

    /// True if this error reports a tag missing from the release listing.
    #[must_use]
    pub fn is_tag_not_found(&self) -> bool {
        matches!(self.as_release(), Some(ReleaseError::TagNotFound { .. }))
    }
}

// --- From implementations for boxing ---

/// Macro to generate `From` implementations that box the source error.
macro_rules! impl_from_boxed {
    ($($error:ty => $variant:ident),+ $(,)?) => {
        $(
            impl From<$error> for GhrelError {
                fn from(err: $error) -> Self {
                    GhrelError::$variant(Box::new(err))
                }
            }
        )+
    };
}

impl_from_boxed! {
    GitError => Git,
    NetworkError => Network,
    ConfigError => Config,
    ReleaseError => Release,
    ProcessError => Process,
    FsError => Fs,
    std::io::Error => Io,
}

impl From<reqwest::Error> for GhrelError {
    fn from(err: reqwest::Error) -> Self {
        NetworkError::Reqwest(err).into()
    }
}

// --- Gix Errors ---

/// Wrapper for gix-specific errors.
#[derive(Debug, Error)]
pub enum GixError {
    /// Failed to discover repository from path.
    #[error("failed to discover repository: {0}")]
    Discover(#[from] Box<gix::discover::Error>),

    /// Failed to resolve HEAD to a commit.
    #[error("failed to resolve head: {0}")]
    HeadId(#[from] Box<gix::reference::head_id::Error>),
}

// --- Git Errors ---

/// Git operation errors.
#[derive(Debug, Error)]
pub enum GitError {
    /// Git command execution failed.
    #[error("git command failed: {command} - {message}")]
    CommandFailed { command: String, message: String },

    /// Error from gix library.
    #[error("gix error: {0}")]
    Gix(#[from] GixError),

    /// Clone operation failed.
    #[error("failed to clone {url}: {message}")]
    CloneFailed { url: String, message: String },

    /// Checkout operation failed.
    #[error("failed to checkout {what}: {message}")]
    CheckoutFailed { what: String, message: String },
}

// --- Network Errors ---

/// Network operation errors.
#[derive(Debug, Error)]
pub enum NetworkError {
    /// Download failed.
    #[error("download failed: {url} - {message}")]
    DownloadFailed { url: String, message: String },

    /// HTTP error response.
    #[error("http error {status}: {url}")]
    HttpError { status: u16, url: String },

    /// Error from reqwest library.
    #[error("reqwest error: {0}")]
    Reqwest(#[from] reqwest::Error),

    /// Invalid URL.
    #[error("invalid url: {0}")]
    InvalidUrl(String),
}

// --- Config Errors ---

/// Configuration-related errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Missing required configuration key.
    #[error("missing required config key '{key}' in section '[{section}]'")]
    MissingKey { section: String, key: String },

    /// Invalid configuration value.
    #[error("invalid value for '{key}' in section '[{section}]': {message}")]
    InvalidValue {
        section: String,
        key: String,
        message: String,
    },
}

// --- Release Errors ---

/// Errors reported by the release API.
#[derive(Debug, Error)]
pub enum ReleaseError {
    /// The tag is absent from the repository's release listing.
    #[error("no release tagged '{tag}' in {repository}")]
    TagNotFound { repository: String, tag: String },

    /// The API answered with a status other than the expected one.
    #[error("{operation} failed with status {status}: {body}")]
    UnexpectedStatus {
        operation: String,
        status: u16,
        body: String,
    },

    /// A freshly created release never showed up in the listing.
    #[error("release '{tag}' in {repository} not visible after {attempts} attempts")]
    NotReady {
        repository: String,
        tag: String,
        attempts: u32,
    },

    /// Asset name from the server cannot be used as a file name.
    #[error("refusing to write asset with unsafe name '{name}'")]
    InvalidAssetName { name: String },

    /// Local path has no usable file name to upload under.
    #[error("cannot derive asset name from '{path}'")]
    InvalidAssetPath { path: String },
}

impl ReleaseError {
    /// HTTP status carried by the error, if any.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::UnexpectedStatus { status, .. } => Some(*status),
            _ => None,
        }
    }
}

// --- Process Errors ---

/// Process execution errors.
#[derive(Debug, Error)]
pub enum ProcessError {
    /// Executable not found in PATH.
    #[error("executable not found: '{name}' (not in PATH)")]
    ExecutableNotFound { name: String },

    /// Failed to spawn process.
    #[error("failed to spawn process '{command}': {source}")]
    SpawnFailed {
        command: String,
        #[source]
        source: std::io::Error,
    },
}

// --- Filesystem Errors ---

/// Filesystem operation errors.
#[derive(Debug, Error)]
pub enum FsError {
    /// General I/O error.
    #[error("I/O error on '{path}': {source}")]
    IoError {
        path: String,
        #[source]
        source: std::io::Error,
    },
}
