//! Core CLI definitions

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::format::OutputFormat;

#[derive(Parser)]
#[command(name = "sdds")]
#[command(about = "Decode SDDS self-describing data files", long_about = None)]
pub struct Cli {
    /// Log decoder progress to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Decode a file and print its rows
    #[command(visible_alias = "d")]
    Decode(DecodeArgs),

    /// Show the parsed header and field definitions
    #[command(visible_alias = "s")]
    Schema {
        /// Path to SDDS file ("-" for stdin)
        path: PathBuf,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Configure default settings
    #[command(visible_alias = "c")]
    Configure {
        /// Default column for keys in pairs output
        #[arg(long)]
        key_column: Option<String>,

        /// Default column for values in pairs output
        #[arg(long)]
        value_column: Option<String>,

        /// Default upper bound on the declared row count
        #[arg(long)]
        max_rows: Option<usize>,

        /// Default output format
        #[arg(long, value_enum)]
        format: Option<OutputFormat>,

        /// Show current configuration
        #[arg(long)]
        show: bool,
    },
}

#[derive(Args)]
pub struct DecodeArgs {
    /// Path to SDDS file ("-" for stdin, gzip is detected)
    pub path: PathBuf,

    /// Output format (uses configured default if not provided)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Column holding the keys for pairs output
    #[arg(short, long)]
    pub key_column: Option<String>,

    /// Column holding the values for pairs output
    #[arg(long)]
    pub value_column: Option<String>,

    /// Reject files declaring more rows than this
    #[arg(long)]
    pub max_rows: Option<usize>,

    /// Skip parameter values instead of keeping them
    #[arg(long)]
    pub no_parameters: bool,

    /// Skip array values instead of keeping them
    #[arg(long)]
    pub no_arrays: bool,
}
