//! CLI argument parsing using clap

use clap::{Parser, Subcommand, ValueEnum};

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

impl ColorChoice {
    /// Maps to the termcolor choice for stderr status lines
    pub fn for_stderr(self) -> termcolor::ColorChoice {
        match self {
            ColorChoice::Auto => termcolor::ColorChoice::Auto,
            ColorChoice::Always => termcolor::ColorChoice::Always,
            ColorChoice::Never => termcolor::ColorChoice::Never,
        }
    }
}

/// Nameshift CLI main entry point
#[derive(Parser, Debug)]
#[command(name = "nameshift")]
#[command(about = "One-shot, rule-driven rename migration for project sources and engine assets")]
#[command(version)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,

    /// Output coloring
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,
}

/// Available nameshift subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Rewrite the target project in place
    Migrate {
        /// Project root to migrate
        root: String,

        /// Skip the pre-flight cancellation delay
        #[arg(long)]
        yes: bool,
    },

    /// Create nameshift.toml and rule table stubs
    Init {
        /// Overwrite existing files
        #[arg(long)]
        force: bool,
    },

    /// Show the loaded rule tables
    List {
        /// Output format
        #[arg(short, long, default_value = "human")]
        format: OutputFormat,
    },
}
