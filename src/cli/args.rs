//! CLI argument definitions using clap
//!
//! Commands:
//! - menagerie serve [--config <path>] [--port <n>] [--data <path>]
//! - menagerie init [--data <path>] [--force]

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Menagerie - a small JSON API over a file of animal records
#[derive(Parser, Debug)]
#[command(name = "menagerie")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Load the data file and start the HTTP server
    Serve {
        /// Path to JSON configuration file
        #[arg(long)]
        config: Option<PathBuf>,

        /// Port to listen on (overrides config and PORT)
        #[arg(long)]
        port: Option<u16>,

        /// Path to the animals data file (overrides config)
        #[arg(long)]
        data: Option<PathBuf>,
    },

    /// Create a data file holding an empty collection
    Init {
        /// Path to the animals data file
        #[arg(long, default_value = "./data/animals.json")]
        data: PathBuf,

        /// Overwrite an existing data file
        #[arg(long)]
        force: bool,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
