// ghrel: GitHub release client
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Release and tag commands.
//!
//! ```text
//! create     --> POST release, wait until listed
//! list       --> GET releases, print tag / id / url
//! delete     --> resolve tag --> DELETE release [--> DELETE tag ref]
//! delete-tag --> DELETE tag ref
//! ```

use tracing::info;

use crate::cli::release::{CreateArgs, DeleteArgs, DeleteTagArgs, ListArgs};
use crate::error::Result;
use crate::github::{Release, ReleaseClient};

/// Create a release.
///
/// # Errors
///
/// Returns an error if the server rejects the release or it never shows up
/// in the listing.
pub async fn run_create_command(
    args: &CreateArgs,
    client: &ReleaseClient,
    dry_run: bool,
) -> Result<()> {
    if dry_run {
        println!(
            "[DRY-RUN] Would create release '{}' for tag {} in {}",
            args.release_name(),
            args.tag,
            args.repository
        );
        return Ok(());
    }

    let release = client
        .create_release(&args.repository, &args.tag, args.release_name(), &args.body)
        .await?;
    println!("{}", release.html_url);
    Ok(())
}

/// List releases as a table.
///
/// # Errors
///
/// Returns an error if the listing request fails.
pub async fn run_list_command(args: &ListArgs, client: &ReleaseClient) -> Result<()> {
    let releases = client.releases(&args.repository).await?;
    info!(repository = %args.repository, count = releases.len(), "listed releases");

    for line in format_release_table(&releases) {
        println!("{line}");
    }
    Ok(())
}

/// Delete a release, optionally with its tag.
///
/// # Errors
///
/// Returns an error if the tag has no release or a delete is rejected.
pub async fn run_delete_command(
    args: &DeleteArgs,
    client: &ReleaseClient,
    dry_run: bool,
) -> Result<()> {
    if dry_run {
        println!(
            "[DRY-RUN] Would delete release {} in {}{}",
            args.tag,
            args.repository,
            if args.with_tag { " and its tag" } else { "" }
        );
        return Ok(());
    }

    client
        .delete_release(&args.repository, &args.tag, args.with_tag)
        .await?;
    Ok(())
}

/// Delete a tag reference.
///
/// # Errors
///
/// Returns an error if the delete is rejected.
pub async fn run_delete_tag_command(
    args: &DeleteTagArgs,
    client: &ReleaseClient,
    dry_run: bool,
) -> Result<()> {
    if dry_run {
        println!(
            "[DRY-RUN] Would delete tag {} in {}",
            args.tag, args.repository
        );
        return Ok(());
    }

    client.delete_tag(&args.repository, &args.tag).await?;
    Ok(())
}

/// Aligned `TAG  ID  URL` rows, header first.
fn format_release_table(releases: &[Release]) -> Vec<String> {
    if releases.is_empty() {
        return vec!["No releases".to_string()];
    }

    let tag_width = releases
        .iter()
        .map(|r| r.tag_name.len())
        .max()
        .unwrap_or(0)
        .max("TAG".len());
    let id_width = releases
        .iter()
        .map(|r| r.id.to_string().len())
        .max()
        .unwrap_or(0)
        .max("ID".len());

    let mut lines = Vec::with_capacity(releases.len() + 1);
    lines.push(format!("{:<tag_width$}  {:<id_width$}  URL", "TAG", "ID"));
    for release in releases {
        let marker = match (release.draft, release.prerelease) {
            (true, _) => " (draft)",
            (false, true) => " (prerelease)",
            _ => "",
        };
        lines.push(format!(
            "{:<tag_width$}  {:<id_width$}  {}{marker}",
            release.tag_name, release.id, release.html_url
        ));
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    fn release(tag: &str, id: u64, prerelease: bool) -> Release {
        Release {
            id,
            tag_name: tag.to_string(),
            name: None,
            body: None,
            html_url: format!("https://github.com/octocat/hello/releases/tag/{tag}"),
            draft: false,
            prerelease,
        }
    }

    #[test]
    fn test_release_table() {
        let lines = format_release_table(&[release("v1.0.0", 7, false), release("v1.1.0-rc1", 1234, true)]);
        assert_eq!(
            lines,
            vec![
                "TAG         ID    URL".to_string(),
                "v1.0.0      7     https://github.com/octocat/hello/releases/tag/v1.0.0".to_string(),
                "v1.1.0-rc1  1234  https://github.com/octocat/hello/releases/tag/v1.1.0-rc1 (prerelease)"
                    .to_string(),
            ]
        );
    }

    #[test]
    fn test_release_table_empty() {
        assert_eq!(format_release_table(&[]), vec!["No releases".to_string()]);
    }
}
