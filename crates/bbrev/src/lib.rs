//! CLI module.

use anyhow::Result;
use args::{Args, CommandExecutor};
use bbrev_config::Config;
use bbrev_logging::configure_logging;
use clap::Parser;
use tracing::info;

pub(crate) mod args;
mod commands;
#[cfg(test)]
mod testutils;

/// Initialize command line.
pub fn initialize_command_line() -> Result<()> {
    dotenv::dotenv().ok();

    let config = Config::from_env(env!("CARGO_PKG_VERSION").to_string());
    configure_logging(&config)?;

    info!("bbrev {}", config.version);

    let args = Args::parse();
    CommandExecutor::parse_args(config, args)
}
