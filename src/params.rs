//! Use clap crate to parse command line arguments

use std::path::PathBuf;

use clap::Parser;

/// Represents the command line arguments
#[derive(Parser)]
#[command(version, about)]
pub struct Params {
    /// The file with hailstone observations
    #[arg(default_value = "input.txt")]
    pub file_name: PathBuf,
}
