// ghrel: GitHub release client
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Entry point.
//!
//! ```text
//! cli::parse() --> Logging --> Config --> ReleaseClient --> Command Dispatch
//!   Clone | Create | List | Push | Get | Delete | DeleteTag | Options | Configs
//! ```

use std::process::ExitCode;

use anyhow::anyhow;
use ghrel::cli::global::GlobalOptions;
use ghrel::cli::{self, Command};
use ghrel::cmd::asset::{run_get_command, run_push_command};
use ghrel::cmd::clone::run_clone_command;
use ghrel::cmd::config::{run_configs_command, run_options_command};
use ghrel::cmd::release::{
    run_create_command, run_delete_command, run_delete_tag_command, run_list_command,
};
use ghrel::config::loader::ConfigLoader;
use ghrel::config::{Config, DEFAULT_CONFIG_FILE, ENV_PREFIX};
use ghrel::github::{Credential, ReleaseClient};
use ghrel::logging::init_logging;
use ghrel::logging::LogConfig;

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = cli::parse();

    let config = cli
        .command
        .as_ref()
        .filter(|command| command.needs_config())
        .map(|_| load_config(&cli.global));

    let log_config = build_log_config(&cli.global, config.as_ref().and_then(|c| c.as_ref().ok()));
    let _log_guard = match init_logging(&log_config) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            return ExitCode::FAILURE;
        }
    };

    dispatch_command(&cli, config).await
}

fn build_log_config(global: &GlobalOptions, config: Option<&Config>) -> LogConfig {
    LogConfig::builder()
        .with_console_level(global.console_level(config))
        .with_file_level(global.file_level(config))
        .maybe_with_log_file(global.log_file.as_ref().map(|p| p.display().to_string()))
        .build()
}

async fn dispatch_command(
    cli: &cli::Cli,
    config: Option<ghrel::error::Result<Config>>,
) -> ExitCode {
    let result = match &cli.command {
        Some(Command::Version) => {
            handle_version_command();
            Ok(())
        }
        Some(Command::Configs) => {
            let loader = build_config_loader(&cli.global);
            run_configs_command(&loader.format_loaded_files());
            Ok(())
        }
        Some(command) => {
            match config.unwrap_or_else(|| load_config(&cli.global)) {
                Ok(config) => run_config_command(command, &config, &cli.global).await,
                Err(e) => Err(e),
            }
        }
        None => {
            eprintln!("No command specified. Use --help for usage information.");
            Err(anyhow!("No command specified"))
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run_config_command(
    command: &Command,
    config: &Config,
    global: &GlobalOptions,
) -> ghrel::error::Result<()> {
    if let Command::Options = command {
        run_options_command(config);
        return Ok(());
    }

    let client = build_client(config, global)?;
    let dry = config.global.dry;

    match command {
        Command::Clone(args) => run_clone_command(args, &client, dry).await,
        Command::Create(args) => run_create_command(args, &client, dry).await,
        Command::List(args) => run_list_command(args, &client).await,
        Command::Push(args) => run_push_command(args, &client, dry).await,
        Command::Get(args) => run_get_command(args, &client).await,
        Command::Delete(args) => run_delete_command(args, &client, dry).await,
        Command::DeleteTag(args) => run_delete_tag_command(args, &client, dry).await,
        Command::Version | Command::Options | Command::Configs => Ok(()),
    }
}

fn build_client(config: &Config, global: &GlobalOptions) -> ghrel::error::Result<ReleaseClient> {
    let token = global
        .token
        .as_deref()
        .filter(|t| !t.trim().is_empty())
        .ok_or_else(|| anyhow!("GitHub token required (use --token or GITHUB_TOKEN env)"))?;

    let credential = Credential::new(config.github.account.clone(), token);
    Ok(ReleaseClient::from_config(config, credential))
}

fn handle_version_command() {
    println!("{}", env!("CARGO_PKG_VERSION"));
}

fn build_config_loader(global: &GlobalOptions) -> ConfigLoader {
    let mut loader = ConfigLoader::new();
    if !global.no_default_config {
        loader = loader.add_toml_file_optional(DEFAULT_CONFIG_FILE);
    }
    for config_path in &global.configs {
        loader = loader.add_toml_file(config_path);
    }
    loader.with_env_prefix(ENV_PREFIX)
}

fn load_config(global: &GlobalOptions) -> ghrel::error::Result<Config> {
    let mut loader = build_config_loader(global);
    for (key, value) in global.to_config_overrides() {
        loader = loader.set(&key, value)?;
    }
    loader.build().inspect_err(|e| eprintln!("Failed to load config: {e}"))
}
