// ghrel: GitHub release client
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Library root.
//!
//! # Crate Architecture
//!
//! ```text
//!                        main.rs
//!                           |
//!                +----------+----------+
//!                v                     v
//!             cli (clap)          cmd (handlers)
//!                |        clone / release / asset
//!                +----------+----------+
//!                           v
//!              ,---------------------------,
//!              |          github           |
//!              |  ReleaseClient, Credential|
//!              '--+-----------+--------+---'
//!                 |           |        |
//!                 v           v        v
//!              config        git       net
//!            TOML + env   gix/CLI   HTTP/DL
//!
//!   +-----------------------------------------+
//!   |  foundation   error, logging            |
//!   +-----------------------------------------+
//! ```

pub mod cli;
pub mod cmd;
pub mod config;
pub mod error;
pub mod git;
pub mod github;
pub mod logging;
pub mod net;
