// ghrel: GitHub release client
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Command implementations.
//!
//! ```text
//! CLI args --> cmd::run_* handlers --> ReleaseClient
//!   clone, release (create/list/delete/delete-tag), asset (push/get), config
//! ```

pub mod asset;
pub mod clone;
pub mod config;
pub mod release;
