use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::info;

/// Handle the `config` subcommand
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Config { print_config } = &cli.command {
        match &cli.config {
            Some(path) => info(format!("Config file: {}", path)),
            None => info(format!("Config file: {}", Config::config_file().display())),
        }

        if *print_config {
            println!("📄 Current configuration:\n");
            println!("{}", cfg.to_yaml()?);
        }
    }

    Ok(())
}
