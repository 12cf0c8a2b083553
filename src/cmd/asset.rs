// ghrel: GitHub release client
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Asset commands: upload files to a release, download all of its assets.

use anyhow::anyhow;
use tracing::info;

use crate::cli::release::{GetArgs, PushArgs};
use crate::error::Result;
use crate::github::{ReleaseClient, TransferReport};

/// Upload files as assets of a release.
///
/// # Errors
///
/// Returns an error if the tag has no release or any file fails to upload.
pub async fn run_push_command(args: &PushArgs, client: &ReleaseClient, dry_run: bool) -> Result<()> {
    if dry_run {
        for file in &args.files {
            println!(
                "[DRY-RUN] Would upload {} to {} in {}",
                file.display(),
                args.tag,
                args.repository
            );
        }
        return Ok(());
    }

    let report = client
        .push_assets(&args.repository, &args.tag, args.files.as_slice())
        .await?;
    finish(&report, "uploaded")
}

/// Download every asset of a release.
///
/// # Errors
///
/// Returns an error if the tag has no release, the asset listing fails or any
/// asset fails to download.
pub async fn run_get_command(args: &GetArgs, client: &ReleaseClient) -> Result<()> {
    let report = client
        .get_assets(&args.repository, &args.tag, &args.destination)
        .await?;
    finish(&report, "downloaded")
}

fn finish(report: &TransferReport, verb: &str) -> Result<()> {
    info!(completed = report.completed.len(), failed = report.failed.len(), "{verb}");

    if report.is_complete() {
        return Ok(());
    }
    for failure in &report.failed {
        eprintln!("  {}: {}", failure.path.display(), failure.error);
    }
    Err(anyhow!(
        "{} of {} file(s) failed",
        report.failed.len(),
        report.completed.len() + report.failed.len()
    ))
}
