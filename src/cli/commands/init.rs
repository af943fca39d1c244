use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{success, warning};
use std::path::PathBuf;

/// Handle the `init` command
///
/// Writes the default configuration (sample dashboard data included) to
/// `--config` or the standard location. In test mode the YAML is only printed.
pub fn handle(cli: &Cli) -> AppResult<()> {
    if let Commands::Init { force } = &cli.command {
        let path = cli
            .config
            .as_deref()
            .map(PathBuf::from)
            .unwrap_or_else(Config::config_file);

        if cli.test {
            println!("{}", Config::default().to_yaml()?);
            return Ok(());
        }

        if Config::init_at(&path, *force)? {
            success(format!("Config file: {}", path.display()));
        } else {
            warning(format!(
                "Config file already exists: {} (use --force to overwrite)",
                path.display()
            ));
        }
    }

    Ok(())
}
