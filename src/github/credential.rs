// ghrel: GitHub release client
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Account name + access token.

use crate::error::{GhrelResult, NetworkError};

/// Identity and secret used for every authenticated call.
///
/// Built once by the caller and handed to the client; never persisted.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential {
    account: String,
    token: String,
}

impl Credential {
    #[must_use]
    pub fn new(account: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            account: account.into(),
            token: token.into(),
        }
    }

    /// Account name (owner of the repositories).
    #[must_use]
    pub fn account(&self) -> &str {
        &self.account
    }

    /// Raw access token.
    #[must_use]
    pub fn token(&self) -> &str {
        &self.token
    }

    /// `https://<account>:<token>@<host>/<account>/<repository>.git`
    ///
    /// # Errors
    ///
    /// Returns `NetworkError::InvalidUrl` if the host or repository produce an
    /// unparsable URL.
    pub fn clone_url(&self, host: &str, repository: &str) -> GhrelResult<String> {
        let raw = format!("https://{host}/{}/{repository}.git", self.account);
        let mut url = reqwest::Url::parse(&raw)
            .map_err(|e| NetworkError::InvalidUrl(format!("{raw}: {e}")))?;
        if url.set_username(&self.account).is_err()
            || url.set_password(Some(&self.token)).is_err()
        {
            return Err(NetworkError::InvalidUrl(format!("{raw}: cannot carry credentials")).into());
        }
        Ok(url.to_string())
    }
}

impl std::fmt::Debug for Credential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credential")
            .field("account", &self.account)
            .field("token", &"***")
            .finish()
    }
}
