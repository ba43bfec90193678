//! CLI argument parsing using clap derive

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// kvdata - Load and save .env, .ini and .properties data
#[derive(Parser, Debug)]
#[command(name = "kvdata")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to a TOML configuration file
    #[arg(short, long, global = true, env = "KVDATA_CONFIG")]
    pub config: Option<PathBuf>,

    /// The command to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Load a data file and print its records as JSON
    ///
    /// Examples:
    ///   kvdata load .env
    ///   kvdata load config/setup.ini --pretty
    Load {
        /// Data file to load
        path: String,

        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,
    },

    /// Save JSON records as a .properties file
    ///
    /// Records are read from --input, or from stdin when omitted. Each record
    /// needs a "key" and a "value" field; a JSON object is accepted as well
    /// and saved one property per field.
    Save {
        /// Data file to write
        path: String,

        /// JSON file holding the records
        #[arg(short, long)]
        input: Option<PathBuf>,
    },

    /// Show the parse options used for a path
    Resolve {
        /// Path or URL to resolve
        path: String,
    },

    /// List supported file extensions
    Formats,
}
