// ghrel: GitHub release client
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI module for ghrel using clap derive.
//!
//! # Command Structure
//!
//! ```text
//! ghrel [global options] <command>
//! clone <repo> <dest> [--ref REF]
//! create <repo> <tag> [--name NAME] [--body TEXT]
//! list <repo>
//! push <repo> <tag> <file>...
//! get <repo> <tag> <dest>
//! delete <repo> <tag> [--with-tag]
//! delete-tag <repo> <tag>
//! options | configs | version
//! ```

pub mod global;
pub mod release;

#[cfg(test)]
mod tests;

use crate::cli::global::GlobalOptions;
use crate::cli::release::{
    CloneArgs, CreateArgs, DeleteArgs, DeleteTagArgs, GetArgs, ListArgs, PushArgs,
};
use clap::{Parser, Subcommand};

/// GitHub release client.
///
/// Clones repositories and manages releases, tags and release assets of one
/// account.
#[derive(Debug, Parser)]
#[command(
    name = "ghrel",
    author,
    version,
    about = "GitHub release client",
    long_about = "ghrel Copyright (C) 2026 Romeo Ahmed\n\
                  This program comes with ABSOLUTELY NO WARRANTY\n\
                  This is free software, and you are welcome to redistribute it\n\
                  under certain conditions; see LICENSE for details.\n\n\
                  Clones repositories and manages releases, tags and release\n\
                  assets of one GitHub account. The access token is read from\n\
                  --token or GITHUB_TOKEN.",
    after_help = "CONFIG FILES:\n\n\
                  ghrel reads `ghrel.toml` from the current directory if present.\n\
                  Additional files can be given with --config; later files\n\
                  override earlier ones. GHREL_<SECTION>__<KEY> environment\n\
                  variables override files, and --account overrides everything."
)]
pub struct Cli {
    /// Global options shared by all commands
    #[command(flatten)]
    pub global: GlobalOptions,

    /// Command to execute
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Shows the version.
    #[command(visible_alias = "-v")]
    Version,

    /// Lists all options and their effective values.
    Options,

    /// Lists the config files used.
    Configs,

    /// Clones a repository of the account.
    Clone(CloneArgs),

    /// Creates a release.
    Create(CreateArgs),

    /// Lists releases of a repository.
    List(ListArgs),

    /// Uploads files as assets of a release.
    Push(PushArgs),

    /// Downloads all assets of a release.
    Get(GetArgs),

    /// Deletes a release, optionally with its tag.
    Delete(DeleteArgs),

    /// Deletes a tag.
    #[command(name = "delete-tag")]
    DeleteTag(DeleteTagArgs),
}

impl Command {
    /// True for commands that talk to the API and need a token.
    #[must_use]
    pub const fn needs_token(&self) -> bool {
        !matches!(self, Self::Version | Self::Options | Self::Configs)
    }

    /// True for commands that read the merged configuration.
    #[must_use]
    pub const fn needs_config(&self) -> bool {
        !matches!(self, Self::Version | Self::Configs)
    }
}

/// Parses command-line arguments.
#[must_use]
pub fn parse() -> Cli {
    Cli::parse()
}

/// Parses command-line arguments from an iterator.
pub fn parse_from<I, T>(iter: I) -> Cli
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::parse_from(iter)
}

/// Tries to parse command-line arguments, returning an error on failure.
///
/// # Errors
///
/// Returns a `clap::Error` if the arguments are invalid or if help/version information
/// was requested.
pub fn try_parse() -> Result<Cli, clap::Error> {
    Cli::try_parse()
}
