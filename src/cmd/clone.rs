// ghrel: GitHub release client
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Clone command.

use anyhow::Context;
use tracing::info;

use crate::cli::release::CloneArgs;
use crate::error::Result;
use crate::github::ReleaseClient;

/// Clone a repository of the account and optionally check out a ref.
///
/// # Errors
///
/// Returns an error if the destination already holds a non-empty directory,
/// or if git fails.
pub async fn run_clone_command(
    args: &CloneArgs,
    client: &ReleaseClient,
    dry_run: bool,
) -> Result<()> {
    let destination = &args.destination;

    if dry_run {
        println!(
            "[DRY-RUN] Would clone {}/{} into {}{}",
            client.credential().account(),
            args.repository,
            destination.display(),
            args.reference
                .as_deref()
                .map(|r| format!(" and check out {r}"))
                .unwrap_or_default()
        );
        return Ok(());
    }

    if destination.is_dir()
        && destination
            .read_dir()
            .with_context(|| format!("cannot read {}", destination.display()))?
            .next()
            .is_some()
    {
        anyhow::bail!("destination {} is not empty", destination.display());
    }

    let head = client
        .clone_repository(&args.repository, destination, args.reference.as_deref())
        .await?;

    match head {
        Some(commit) => info!(commit = %commit, "HEAD"),
        None => info!("repository is empty"),
    }
    Ok(())
}
