// ghrel: GitHub release client
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Arguments of the repository, release, tag and asset commands.
//!
//! ```text
//! $ ghrel clone jetson-config ./jetson-config --ref v0.1.0
//! $ ghrel create jetson-config v0.1.0 --body "Initial release"
//! $ ghrel list jetson-config
//! $ ghrel push jetson-config v0.1.0 README.md LICENSE
//! $ ghrel get jetson-config v0.1.0 ./downloads
//! $ ghrel delete jetson-config v0.1.0 --with-tag
//! $ ghrel delete-tag jetson-config v0.1.0
//! ```

use clap::Args;
use std::path::PathBuf;

/// Arguments for `clone`.
#[derive(Debug, Clone, Args)]
pub struct CloneArgs {
    /// Repository name (owned by the account).
    #[arg(value_name = "REPO")]
    pub repository: String,

    /// Directory to clone into.
    #[arg(value_name = "DEST")]
    pub destination: PathBuf,

    /// Branch, tag or commit to check out after cloning.
    #[arg(long = "ref", value_name = "REF")]
    pub reference: Option<String>,
}

/// Arguments for `create`.
#[derive(Debug, Clone, Args)]
pub struct CreateArgs {
    #[arg(value_name = "REPO")]
    pub repository: String,

    /// Tag for the release; created by the server if missing.
    #[arg(value_name = "TAG")]
    pub tag: String,

    /// Release title (defaults to the tag).
    #[arg(long, value_name = "NAME")]
    pub name: Option<String>,

    /// Release notes.
    #[arg(long, value_name = "TEXT", default_value = "")]
    pub body: String,
}

impl CreateArgs {
    /// Title to use, falling back to the tag.
    #[must_use]
    pub fn release_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.tag)
    }
}

/// Arguments for `list`.
#[derive(Debug, Clone, Args)]
pub struct ListArgs {
    #[arg(value_name = "REPO")]
    pub repository: String,
}

/// Arguments for `push`.
#[derive(Debug, Clone, Args)]
pub struct PushArgs {
    #[arg(value_name = "REPO")]
    pub repository: String,

    #[arg(value_name = "TAG")]
    pub tag: String,

    /// Files to upload; each becomes an asset named after its base name.
    #[arg(value_name = "FILE", required = true, num_args = 1..)]
    pub files: Vec<PathBuf>,
}

/// Arguments for `get`.
#[derive(Debug, Clone, Args)]
pub struct GetArgs {
    #[arg(value_name = "REPO")]
    pub repository: String,

    #[arg(value_name = "TAG")]
    pub tag: String,

    /// Directory receiving the assets (created if missing).
    #[arg(value_name = "DEST")]
    pub destination: PathBuf,
}

/// Arguments for `delete`.
#[derive(Debug, Clone, Args)]
pub struct DeleteArgs {
    #[arg(value_name = "REPO")]
    pub repository: String,

    #[arg(value_name = "TAG")]
    pub tag: String,

    /// Also delete the git tag.
    #[arg(long = "with-tag")]
    pub with_tag: bool,
}

/// Arguments for `delete-tag`.
#[derive(Debug, Clone, Args)]
pub struct DeleteTagArgs {
    #[arg(value_name = "REPO")]
    pub repository: String,

    #[arg(value_name = "TAG")]
    pub tag: String,
}
