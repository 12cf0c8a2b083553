// ghrel: GitHub release client
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Version-control backend.
//!
//! ```text
//!      Public API
//!   query.rs   cmd.rs
//!        \      /
//!         v    v
//!   ,------------------,
//!   | backend (traits) |
//!   '--+----------+----'
//!      |          |
//!      v          v
//!  GitQuery    GitMutation
//! (gix, read)  (CLI, write)
//!      |          |
//!      v          v
//!  GixBackend  ShellBackend
//!  .is_repo    .clone
//!  .head       .checkout
//! ```

pub mod backend;
pub mod cmd;
pub mod query;
