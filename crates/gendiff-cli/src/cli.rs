use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "gendiff",
    about = "Compares two configuration files and shows a difference.",
    version,
)]
pub struct Cli {
    /// First file (JSON, YAML or TOML)
    pub file1: PathBuf,

    /// Second file (JSON, YAML or TOML)
    pub file2: PathBuf,

    /// Output format: stylish, plain or json
    #[arg(short, long, default_value = "stylish")]
    pub format: String,

    /// Log debug output to stderr
    #[arg(short, long)]
    pub verbose: bool,
}
