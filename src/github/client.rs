// ghrel: GitHub release client
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Release client: one authenticated request per step, typed results.
//!
//! ```text
//! tag-keyed op ──> list_releases ──> ReleaseIndex.resolve(tag) ──> by-id op
//!
//! create_release ──> POST ──> 201 ──> poll listing until tag shows up
//!                                      (ReadinessPolicy, NotReady on exhaustion)
//! ```

use bon::Builder;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::{Client, RequestBuilder, Response, StatusCode, Url};
use std::path::Path;
use std::time::Duration;
use tracing::{debug, error, info, warn};

use super::credential::Credential;
use super::types::{Asset, NewRelease, Release, ReleaseIndex, TransferReport};
use crate::config::Config;
use crate::config::types::{
    DEFAULT_API_URL, DEFAULT_HOST, DEFAULT_UPLOAD_URL, GitHubConfig, ReadinessConfig,
};
use crate::error::{FsError, GhrelResult, NetworkError, ProcessError, ReleaseError};
use crate::git::{cmd, query};
use crate::net::{Downloader, ProgressDisplay, shared_client};

/// Content negotiation header for the v3 REST API.
pub const API_ACCEPT: &str = "application/vnd.github.v3+json";

/// Base URLs of the hosting service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    api_url: String,
    upload_url: String,
    host: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL, DEFAULT_UPLOAD_URL, DEFAULT_HOST)
    }
}

impl Endpoints {
    /// Trailing slashes are stripped from both base URLs.
    #[must_use]
    pub fn new(api_url: &str, upload_url: &str, host: &str) -> Self {
        Self {
            api_url: api_url.trim_end_matches('/').to_string(),
            upload_url: upload_url.trim_end_matches('/').to_string(),
            host: host.to_string(),
        }
    }

    /// Point both API and uploads at one server (test doubles, GHES proxies).
    #[must_use]
    pub fn single(base_url: &str, host: &str) -> Self {
        Self::new(base_url, base_url, host)
    }

    #[must_use]
    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    #[must_use]
    pub fn upload_url(&self) -> &str {
        &self.upload_url
    }

    #[must_use]
    pub fn host(&self) -> &str {
        &self.host
    }
}

impl From<&GitHubConfig> for Endpoints {
    fn from(config: &GitHubConfig) -> Self {
        Self::new(&config.api_url, &config.upload_url, &config.host)
    }
}

/// How long to wait for a created release to become visible in listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReadinessPolicy {
    attempts: u32,
    interval: Duration,
}

impl Default for ReadinessPolicy {
    fn default() -> Self {
        ReadinessConfig::default().into()
    }
}

impl ReadinessPolicy {
    /// At least one attempt is always made.
    #[must_use]
    pub fn new(attempts: u32, interval: Duration) -> Self {
        Self {
            attempts: attempts.max(1),
            interval,
        }
    }

    #[must_use]
    pub const fn attempts(&self) -> u32 {
        self.attempts
    }

    #[must_use]
    pub const fn interval(&self) -> Duration {
        self.interval
    }
}

impl From<ReadinessConfig> for ReadinessPolicy {
    fn from(config: ReadinessConfig) -> Self {
        Self::new(config.attempts, config.interval())
    }
}

/// Authenticated client for releases, tags and assets of one account.
///
/// # Example
/// ```ignore
/// use ghrel::github::{Credential, ReleaseClient};
///
/// let client = ReleaseClient::new(Credential::new("octocat", token));
/// let index = client.list_releases("hello-world", false).await?;
/// let report = client.push_assets("hello-world", "v1.0.0", &["dist/app.tar.gz"]).await?;
/// ```
#[derive(Debug, Builder)]
pub struct ReleaseClient {
    credential: Credential,
    #[builder(default)]
    endpoints: Endpoints,
    #[builder(default)]
    readiness: ReadinessPolicy,
    #[builder(default = shared_client().clone())]
    http: Client,
    #[builder(default)]
    progress: ProgressDisplay,
}

impl ReleaseClient {
    /// Client against the public service with default settings.
    #[must_use]
    pub fn new(credential: Credential) -> Self {
        Self::builder().credential(credential).build()
    }

    /// Client using endpoints and readiness settings from `config`.
    #[must_use]
    pub fn from_config(config: &Config, credential: Credential) -> Self {
        Self::builder()
            .credential(credential)
            .endpoints(Endpoints::from(&config.github))
            .readiness(config.readiness.into())
            .build()
    }

    #[must_use]
    pub const fn credential(&self) -> &Credential {
        &self.credential
    }

    #[must_use]
    pub const fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    fn full_name(&self, repository: &str) -> String {
        format!("{}/{repository}", self.credential.account())
    }

    fn repo_url(&self, repository: &str) -> String {
        format!(
            "{}/repos/{}/{repository}",
            self.endpoints.api_url,
            self.credential.account()
        )
    }

    /// `.../git/refs/tags/{tag}` with every tag segment percent-encoded;
    /// `/` inside a tag stays a separator.
    fn tag_ref_url(&self, repository: &str, tag: &str) -> GhrelResult<Url> {
        let base = self.repo_url(repository);
        let mut url =
            Url::parse(&base).map_err(|e| NetworkError::InvalidUrl(format!("{base}: {e}")))?;
        url.path_segments_mut()
            .map_err(|()| NetworkError::InvalidUrl(base.clone()))?
            .pop_if_empty()
            .extend(["git", "refs", "tags"])
            .extend(tag.split('/'));
        Ok(url)
    }

    fn authed(&self, request: RequestBuilder) -> RequestBuilder {
        request
            .bearer_auth(self.credential.token())
            .header(ACCEPT, API_ACCEPT)
    }

    // --- Clone ---

    /// Clone `repository` of the account into `destination`, then check out
    /// `reference` if given.
    ///
    /// git runs on the blocking pool. Returns the commit HEAD points at
    /// afterwards, or `None` for an empty repository.
    ///
    /// # Errors
    ///
    /// Returns an error if git is missing, the clone or checkout fails. The
    /// token never appears in the error.
    pub async fn clone_repository(
        &self,
        repository: &str,
        destination: &Path,
        reference: Option<&str>,
    ) -> GhrelResult<Option<String>> {
        let url = self
            .credential
            .clone_url(&self.endpoints.host, repository)?;
        let full_name = self.full_name(repository);

        debug!(repository = %full_name, dest = %destination.display(), "cloning");
        let dest = destination.to_path_buf();
        let reference = reference.map(ToString::to_string);
        let head = tokio::task::spawn_blocking(move || {
            clone_and_checkout(&url, &dest, reference.as_deref())
        })
        .await
        .map_err(|e| ProcessError::SpawnFailed {
            command: "git clone".to_string(),
            source: std::io::Error::other(e),
        })?
        .inspect_err(|e| error!(repository = %full_name, error = %e, "clone failed"))?;

        info!(
            repository = %full_name,
            dest = %destination.display(),
            head = head.as_deref().unwrap_or("(empty)"),
            "cloned"
        );
        Ok(head)
    }

    // --- Releases ---

    /// Create a release and wait until it appears in the release listing.
    ///
    /// # Errors
    ///
    /// - `ReleaseError::UnexpectedStatus` if the server does not answer 201.
    /// - `ReleaseError::NotReady` if the tag never shows up in the listing.
    /// - `NetworkError` on transport or decoding failures.
    pub async fn create_release(
        &self,
        repository: &str,
        tag_name: &str,
        release_name: &str,
        body: &str,
    ) -> GhrelResult<Release> {
        let full_name = self.full_name(repository);
        let url = format!("{}/releases", self.repo_url(repository));
        let payload = NewRelease {
            tag_name,
            name: release_name,
            body,
        };

        debug!(repository = %full_name, tag = tag_name, "creating release");
        let response = self.authed(self.http.post(&url)).json(&payload).send().await?;
        let response = expect_status(response, StatusCode::CREATED, "create release")
            .await
            .inspect_err(|e| {
                error!(repository = %full_name, release = release_name, error = %e, "failed to create release");
            })?;
        let release: Release = response.json().await?;

        info!(
            repository = %full_name,
            release = release_name,
            id = release.id,
            url = %release.html_url,
            "created release"
        );

        self.wait_until_listed(repository, &release.tag_name).await?;
        Ok(release)
    }

    /// Poll the listing until `tag` is present.
    async fn wait_until_listed(&self, repository: &str, tag: &str) -> GhrelResult<()> {
        let attempts = self.readiness.attempts();
        for attempt in 1..=attempts {
            if self.list_releases(repository, false).await?.contains(tag) {
                debug!(tag, attempt, "release visible");
                return Ok(());
            }
            if attempt < attempts {
                debug!(tag, attempt, "release not listed yet");
                tokio::time::sleep(self.readiness.interval()).await;
            }
        }

        warn!(repository = %self.full_name(repository), tag, attempts, "release never became visible");
        Err(ReleaseError::NotReady {
            repository: self.full_name(repository),
            tag: tag.to_string(),
            attempts,
        }
        .into())
    }

    /// Every release of `repository`, as listed by the API (first page only).
    ///
    /// # Errors
    ///
    /// `ReleaseError::UnexpectedStatus` on a non-200 answer, `NetworkError`
    /// on transport or decoding failures.
    pub async fn releases(&self, repository: &str) -> GhrelResult<Vec<Release>> {
        let url = format!("{}/releases", self.repo_url(repository));
        let response = self.authed(self.http.get(&url)).send().await?;
        let response = expect_status(response, StatusCode::OK, "list releases")
            .await
            .inspect_err(|e| {
                error!(repository = %self.full_name(repository), error = %e, "failed to list releases");
            })?;
        Ok(response.json().await?)
    }

    /// Tag -> id mapping of `repository`. With `verbose`, each release is
    /// logged at info level.
    ///
    /// # Errors
    ///
    /// Same as [`Self::releases`].
    pub async fn list_releases(&self, repository: &str, verbose: bool) -> GhrelResult<ReleaseIndex> {
        let full_name = self.full_name(repository);
        let releases = self.releases(repository).await?;

        if verbose {
            info!(repository = %full_name, count = releases.len(), "listing releases");
            for release in &releases {
                info!(tag = %release.tag_name, id = release.id, url = %release.html_url, "release");
            }
        }

        Ok(ReleaseIndex::new(full_name, &releases))
    }

    /// Resolve `tag` to its release id with one listing.
    ///
    /// # Errors
    ///
    /// `ReleaseError::TagNotFound` if no release carries the tag, plus the
    /// errors of [`Self::releases`].
    pub async fn resolve_release(&self, repository: &str, tag: &str) -> GhrelResult<u64> {
        let index = self.list_releases(repository, false).await?;
        let id = index
            .resolve(tag)
            .inspect_err(|e| error!(error = %e, "cannot resolve tag"))?;
        Ok(id)
    }

    /// Delete the release tagged `tag`; with `include_tag`, delete the tag ref
    /// afterwards.
    ///
    /// # Errors
    ///
    /// `TagNotFound` if unresolvable, `UnexpectedStatus` if either delete is
    /// not answered with 204. The tag is left alone when the release delete
    /// fails.
    pub async fn delete_release(
        &self,
        repository: &str,
        tag: &str,
        include_tag: bool,
    ) -> GhrelResult<()> {
        let release_id = self.resolve_release(repository, tag).await?;
        self.delete_release_by_id(repository, release_id).await?;
        info!(repository = %self.full_name(repository), tag, "deleted release");

        if include_tag {
            self.delete_tag(repository, tag).await?;
        }
        Ok(())
    }

    /// Delete a release by id.
    ///
    /// # Errors
    ///
    /// `UnexpectedStatus` on anything but 204.
    pub async fn delete_release_by_id(&self, repository: &str, release_id: u64) -> GhrelResult<()> {
        let url = format!("{}/releases/{release_id}", self.repo_url(repository));
        let response = self.authed(self.http.delete(&url)).send().await?;
        expect_status(response, StatusCode::NO_CONTENT, "delete release")
            .await
            .inspect_err(|e| {
                error!(repository = %self.full_name(repository), release_id, error = %e, "failed to delete release");
            })?;
        Ok(())
    }

    /// Delete the tag reference `tag` (no release lookup).
    ///
    /// # Errors
    ///
    /// `UnexpectedStatus` on anything but 204.
    pub async fn delete_tag(&self, repository: &str, tag: &str) -> GhrelResult<()> {
        let url = self.tag_ref_url(repository, tag)?;
        let response = self.authed(self.http.delete(url)).send().await?;
        expect_status(response, StatusCode::NO_CONTENT, "delete tag")
            .await
            .inspect_err(|e| {
                error!(repository = %self.full_name(repository), tag, error = %e, "failed to delete tag");
            })?;
        info!(repository = %self.full_name(repository), tag, "deleted tag");
        Ok(())
    }

    // --- Assets ---

    /// Upload each file to the release tagged `tag`.
    ///
    /// # Errors
    ///
    /// Fails only if the tag cannot be resolved; per-file failures land in
    /// the returned report.
    pub async fn push_assets<P: AsRef<Path>>(
        &self,
        repository: &str,
        tag: &str,
        paths: &[P],
    ) -> GhrelResult<TransferReport> {
        let release_id = self.resolve_release(repository, tag).await?;
        Ok(self.upload_assets(repository, release_id, paths).await)
    }

    /// Upload each file to release `release_id`, named after its base name.
    pub async fn upload_assets<P: AsRef<Path>>(
        &self,
        repository: &str,
        release_id: u64,
        paths: &[P],
    ) -> TransferReport {
        let full_name = self.full_name(repository);
        let mut report = TransferReport::default();

        for path in paths {
            let path = path.as_ref();
            match self.upload_asset(repository, release_id, path).await {
                Ok(asset) => {
                    info!(repository = %full_name, file = %path.display(), asset_id = asset.id, "uploaded asset");
                    report.record_success(path);
                }
                Err(e) => {
                    error!(repository = %full_name, file = %path.display(), error = %e, "failed to upload asset");
                    report.record_failure(path, &e);
                }
            }
        }

        report
    }

    /// Upload one file's exact bytes.
    ///
    /// # Errors
    ///
    /// `InvalidAssetPath` without a UTF-8 base name, `FsError` if unreadable,
    /// `UnexpectedStatus` on anything but 201.
    pub async fn upload_asset(
        &self,
        repository: &str,
        release_id: u64,
        path: &Path,
    ) -> GhrelResult<Asset> {
        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| ReleaseError::InvalidAssetPath {
                path: path.display().to_string(),
            })?;

        let bytes = tokio::fs::read(path)
            .await
            .map_err(|source| FsError::IoError {
                path: path.display().to_string(),
                source,
            })?;

        let base = format!(
            "{}/repos/{}/{repository}/releases/{release_id}/assets",
            self.endpoints.upload_url,
            self.credential.account()
        );
        let url = Url::parse_with_params(&base, &[("name", name)])
            .map_err(|e| NetworkError::InvalidUrl(format!("{base}: {e}")))?;

        debug!(file = %path.display(), size = bytes.len(), "uploading asset");
        let response = self
            .authed(self.http.post(url))
            .header(CONTENT_TYPE, "application/octet-stream")
            .body(bytes)
            .send()
            .await?;
        let response = expect_status(response, StatusCode::CREATED, "upload asset").await?;
        Ok(response.json().await?)
    }

    /// Assets attached to release `release_id`.
    ///
    /// # Errors
    ///
    /// `UnexpectedStatus` on anything but 200.
    pub async fn assets(&self, repository: &str, release_id: u64) -> GhrelResult<Vec<Asset>> {
        let url = format!("{}/releases/{release_id}/assets", self.repo_url(repository));
        let response = self.authed(self.http.get(&url)).send().await?;
        let response = expect_status(response, StatusCode::OK, "list assets")
            .await
            .inspect_err(|e| {
                error!(repository = %self.full_name(repository), release_id, error = %e, "failed to list assets");
            })?;
        Ok(response.json().await?)
    }

    /// Download every asset of the release tagged `tag` into `destination`.
    ///
    /// # Errors
    ///
    /// Fails if the tag cannot be resolved, the asset listing fails or the
    /// destination cannot be created; per-file failures land in the report.
    pub async fn get_assets(
        &self,
        repository: &str,
        tag: &str,
        destination: &Path,
    ) -> GhrelResult<TransferReport> {
        let release_id = self.resolve_release(repository, tag).await?;
        self.download_assets(repository, release_id, destination).await
    }

    /// Download every asset of release `release_id` into `destination`.
    ///
    /// Downloads follow `browser_download_url` without credentials and are
    /// written byte for byte.
    ///
    /// # Errors
    ///
    /// Same as [`Self::get_assets`] minus resolution.
    pub async fn download_assets(
        &self,
        repository: &str,
        release_id: u64,
        destination: &Path,
    ) -> GhrelResult<TransferReport> {
        let assets = self.assets(repository, release_id).await?;

        tokio::fs::create_dir_all(destination)
            .await
            .map_err(|source| FsError::IoError {
                path: destination.display().to_string(),
                source,
            })?;

        let mut report = TransferReport::default();
        for asset in &assets {
            let target = destination.join(&asset.name);

            if !is_plain_file_name(&asset.name) {
                let err = ReleaseError::InvalidAssetName {
                    name: asset.name.clone(),
                };
                warn!(error = %err, "skipping asset");
                report.record_failure(&target, &err);
                continue;
            }

            let result = Downloader::with_client(self.http.clone())
                .url(&asset.browser_download_url)
                .file(&target)
                .progress(self.progress)
                .download()
                .await;

            match result {
                Ok(bytes) => {
                    info!(asset = %asset.name, path = %target.display(), bytes, "downloaded asset");
                    report.record_success(&target);
                }
                Err(e) => {
                    error!(asset = %asset.name, error = %e, "failed to download asset");
                    report.record_failure(&target, &e);
                }
            }
        }

        Ok(report)
    }
}

fn clone_and_checkout(
    url: &str,
    destination: &Path,
    reference: Option<&str>,
) -> GhrelResult<Option<String>> {
    cmd::clone(url, destination)?;
    if let Some(reference) = reference {
        cmd::checkout(destination, reference)?;
    }

    match query::head_commit(destination) {
        Ok(head) => Ok(Some(head)),
        Err(e) => {
            debug!(error = %e, "no HEAD commit after clone");
            Ok(None)
        }
    }
}

/// Pass the response through if it carries `expected`, otherwise turn it
/// into `UnexpectedStatus` with the body text.
async fn expect_status(
    response: Response,
    expected: StatusCode,
    operation: &str,
) -> GhrelResult<Response> {
    let status = response.status();
    if status == expected {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(ReleaseError::UnexpectedStatus {
        operation: operation.to_string(),
        status: status.as_u16(),
        body,
    }
    .into())
}

/// A single normal path component: no separators, not `.` or `..`.
pub(super) fn is_plain_file_name(name: &str) -> bool {
    let mut components = Path::new(name).components();
    matches!(
        (components.next(), components.next()),
        (Some(std::path::Component::Normal(_)), None)
    ) && !name.contains(['/', '\\'])
}
