use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// CLI for parsing and validating CUE sheets.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, Eq, PartialEq)]
pub enum Commands {
    Parse(ParseCommand),
    Validate(ValidateCommand),
}

/// Parses a .cue file and prints its contents.
#[derive(Parser, Debug, Clone, Eq, PartialEq)]
pub struct ParseCommand {
    /// Path to the .cue file
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Print the parsed sheet as JSON
    #[arg(long, short = 'j', default_value_t = false)]
    pub json: bool,
}

/// Checks one or more .cue files and reports which ones are invalid.
#[derive(Parser, Debug, Clone, Eq, PartialEq)]
pub struct ValidateCommand {
    /// Paths to the .cue files
    #[arg(value_name = "INPUT", required = true)]
    pub inputs: Vec<PathBuf>,
}
