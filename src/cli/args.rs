//! CLI argument parsing using clap

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Output format for the list command
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON Lines format (one JSON object per line)
    Jsonl,
}

/// Color output choice
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    /// Automatically detect if terminal supports color
    Auto,
    /// Always use color
    Always,
    /// Never use color
    Never,
}

impl From<ColorChoice> for termcolor::ColorChoice {
    fn from(choice: ColorChoice) -> Self {
        match choice {
            ColorChoice::Auto => termcolor::ColorChoice::Auto,
            ColorChoice::Always => termcolor::ColorChoice::Always,
            ColorChoice::Never => termcolor::ColorChoice::Never,
        }
    }
}

/// fixerset CLI main entry point
#[derive(Parser, Debug)]
#[command(name = "fixerset")]
#[command(about = "Translate a StyleCI preset into PHP-CS-Fixer rule sets")]
#[command(version)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,

    /// Path to fixerset.toml (defaults to ./fixerset.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Output coloring
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Available fixerset subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Write a default fixerset.toml
    Init {
        /// Overwrite an existing fixerset.toml
        #[arg(long)]
        force: bool,
    },

    /// Translate the preset and rewrite the generated block
    Run {
        /// Exit with status 1 if the target file is out of date; write nothing
        #[arg(long)]
        check: bool,

        /// Print the generated block instead of writing it
        #[arg(long, conflicts_with = "check")]
        dry_run: bool,
    },

    /// Print the translated rule groups
    List {
        /// Output format
        #[arg(short, long, default_value = "human")]
        format: OutputFormat,
    },
}
