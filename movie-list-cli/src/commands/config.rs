use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use crate::CliError;
use crate::config::{Config, config_path};

/// Show the resolved database path and where it came from.
pub(crate) fn run_config_show(config: &Config) {
    log::info!(
        "{}",
        "Movie List Configuration".if_supports_color(Stdout, |t| t.bold()),
    );
    crate::log_blank();

    match config_path() {
        Some(p) if p.exists() => {
            log::info!(
                "  Config file: {} {}",
                p.display().if_supports_color(Stdout, |t| t.cyan()),
                "(exists)".if_supports_color(Stdout, |t| t.green()),
            );
        }
        Some(p) => {
            log::info!(
                "  Config file: {} {}",
                p.display().if_supports_color(Stdout, |t| t.cyan()),
                "(not found)".if_supports_color(Stdout, |t| t.dimmed()),
            );
        }
        None => {
            log::info!(
                "  Config file: {}",
                "could not determine path".if_supports_color(Stdout, |t| t.red()),
            );
        }
    }

    let status = if config.database.exists() {
        "(exists)".if_supports_color(Stdout, |t| t.green()).to_string()
    } else {
        "(will be created)".if_supports_color(Stdout, |t| t.dimmed()).to_string()
    };
    log::info!(
        "  {} {} {} {}",
        "database:".if_supports_color(Stdout, |t| t.cyan()),
        config.database.display(),
        format!("({})", config.source).if_supports_color(Stdout, |t| t.dimmed()),
        status,
    );
}

/// Print the config file path.
pub(crate) fn run_config_path() -> Result<(), CliError> {
    match config_path() {
        Some(path) => {
            log::info!("{}", path.display());
            Ok(())
        }
        None => Err(CliError::not_found("Could not determine config directory")),
    }
}
