pub mod commands;
pub mod parser;

pub use parser::Cli;

use crate::config::ConfigManager;
use crate::utils::{Result, SweepError};

pub fn execute_command(cli: Cli) -> Result<()> {
    cli.validate()?;

    let config = ConfigManager::load_or_create()
        .map_err(|e| SweepError::config_error(format!("Failed to load config: {}", e)))?;

    commands::sweep::execute(config, cli)
}

pub fn execute_command_with_config(cli: Cli, config: crate::config::Config) -> Result<()> {
    cli.validate()?;
    commands::sweep::execute(config, cli)
}
