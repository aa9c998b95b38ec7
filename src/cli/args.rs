//! CLI argument definitions using clap.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "canvas-mirror")]
#[command(author, version, about = "Generate markdown mirrors for canvas files", long_about = None)]
pub struct Cli {
    /// Path to the vault (overrides config default)
    #[arg(long, global = true)]
    pub vault: Option<PathBuf>,

    /// Path to the config file (overrides the default location)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Output as JSON (default)
    #[arg(long, global = true, conflicts_with_all = ["yaml", "toml"])]
    pub json: bool,

    /// Output as YAML
    #[arg(long, global = true, conflicts_with_all = ["json", "toml"])]
    pub yaml: bool,

    /// Output as TOML
    #[arg(long, global = true, conflicts_with_all = ["json", "yaml"])]
    pub toml: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    pub fn output_format(&self) -> OutputFormat {
        if self.yaml {
            OutputFormat::Yaml
        } else if self.toml {
            OutputFormat::Toml
        } else {
            OutputFormat::Json
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Json,
    Yaml,
    Toml,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Regenerate all mirrors (clears stale output first)
    Generate(GenerateArgs),

    /// Delete generated mirrors without regenerating
    Clear(ClearArgs),

    /// Flip whether the destination folder is excluded from scans
    Toggle(ToggleArgs),

    /// List canvases that would be mirrored
    List(ListArgs),
}

#[derive(Parser, Debug)]
pub struct GenerateArgs {
    /// Destination folder for mirrors (overrides config)
    #[arg(long)]
    pub destination: Option<String>,

    /// Prefix for mirror file names (overrides config)
    #[arg(long)]
    pub prefix: Option<String>,
}

#[derive(Parser, Debug)]
pub struct ClearArgs {
    /// Destination folder to clear (overrides config)
    #[arg(long)]
    pub destination: Option<String>,
}

#[derive(Parser, Debug)]
pub struct ToggleArgs {
    /// Destination folder to toggle (overrides config)
    #[arg(long)]
    pub destination: Option<String>,
}

#[derive(Parser, Debug)]
pub struct ListArgs {
    /// Include canvases under ignored prefixes
    #[arg(long)]
    pub all: bool,
}
