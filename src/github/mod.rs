// ghrel: GitHub release client
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! GitHub release client.
//!
//! ```text
//!                 ReleaseClient
//!   Credential + Endpoints + ReadinessPolicy
//!          |                       |
//!          v                       v
//!     git (clone,            REST API (reqwest)
//!      checkout)     releases / assets / git refs
//! ```
//!
//! # Key Types
//!
//! | Type             | Purpose                                  |
//! |------------------|------------------------------------------|
//! | `Credential`     | Account + token, redacted in `Debug`     |
//! | `ReleaseClient`  | All remote operations                    |
//! | `ReleaseIndex`   | Tag -> release id from one listing       |
//! | `TransferReport` | Per-file outcome of uploads or downloads |

mod client;
mod credential;
mod types;

pub use client::{API_ACCEPT, Endpoints, ReadinessPolicy, ReleaseClient};
pub use credential::Credential;
pub use types::{Asset, Release, ReleaseIndex, TransferFailure, TransferReport};

#[cfg(test)]
mod tests;
