//! movie-list CLI
//!
//! Command-line interface for a small SQLite catalog of movies and categories.

mod cli_types;
mod commands;
mod config;
mod error;
mod logger;
mod render;
mod shell;

use std::io;

use clap::Parser;

use movie_list_catalog::NewMovie;
use movie_list_db::MovieRepository;

use cli_types::{Cli, Commands, ConfigAction};
use config::Config;
pub(crate) use error::CliError;

/// Log an empty line at info level.
pub(crate) fn log_blank() {
    log::info!("");
}

fn main() {
    let cli = Cli::parse();
    logger::init(cli.quiet, cli.verbose);

    if let Err(e) = run(cli) {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let config = Config::resolve(cli.db);
    log::debug!(
        "Using database {} ({})",
        config.database.display(),
        config.source
    );

    match cli.command.unwrap_or(Commands::Shell) {
        Commands::Shell => {
            let repo = open_repository(&config)?;
            let stdin = io::stdin();
            shell::Shell::new(repo, stdin.lock(), io::stdout()).run()
        }
        Commands::Categories => with_repository(&config, commands::movies::run_categories),
        Commands::Cat { category_id } => with_repository(&config, |repo| {
            commands::movies::run_movies_by_category(repo, category_id)
        }),
        Commands::Year { year } => with_repository(&config, |repo| {
            commands::movies::run_movies_by_year(repo, year)
        }),
        Commands::Add {
            name,
            year,
            minutes,
            category,
        } => with_repository(&config, |repo| {
            commands::movies::run_add(repo, NewMovie::new(name, year, minutes, category))
        }),
        Commands::Del { movie_id } => with_repository(&config, |repo| {
            commands::movies::run_delete(repo, movie_id)
        }),
        Commands::Config { action } => match action {
            ConfigAction::Show => {
                commands::config::run_config_show(&config);
                Ok(())
            }
            ConfigAction::Path => commands::config::run_config_path(),
        },
    }
}

fn open_repository(config: &Config) -> Result<MovieRepository, CliError> {
    MovieRepository::open(&config.database).map_err(|e| {
        CliError::database(format!(
            "Failed to open {}: {}",
            config.database.display(),
            e
        ))
    })
}

/// Open the repository, run one command against it, and close it.
fn with_repository(
    config: &Config,
    f: impl FnOnce(&MovieRepository) -> Result<(), CliError>,
) -> Result<(), CliError> {
    let repo = open_repository(config)?;
    let result = f(&repo);
    repo.close();
    result
}
