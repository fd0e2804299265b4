//! CLI type definitions: command enums and argument structs.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "movie-list")]
#[command(about = "Manage a small catalog of movies and categories", long_about = None)]
pub(crate) struct Cli {
    /// SQLite database file (defaults to the config file setting, then ./movies.sqlite)
    #[arg(long, global = true)]
    pub db: Option<PathBuf>,

    /// Only show warnings and errors (suppress normal output)
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Enable verbose/debug logging (timestamps + debug-level messages)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Defaults to the interactive shell
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Interactive command loop (cat, year, add, del, exit)
    Shell,

    /// List all categories
    Categories,

    /// View movies by category
    Cat {
        /// Category ID
        category_id: i64,
    },

    /// View movies by release year
    Year {
        /// Release year
        year: i64,
    },

    /// Add a movie
    Add {
        /// Movie name
        #[arg(long)]
        name: String,

        /// Release year
        #[arg(long)]
        year: i64,

        /// Runtime in minutes
        #[arg(long)]
        minutes: i64,

        /// Category ID
        #[arg(long)]
        category: i64,
    },

    /// Delete a movie
    Del {
        /// Movie ID
        movie_id: i64,
    },

    /// Inspect configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
pub(crate) enum ConfigAction {
    /// Show the resolved database path and where it came from
    Show,

    /// Print the config file path
    Path,
}
