use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Scan documents and classify every frequency claim
    Scan {
        /// Files to scan (stdin when none are given)
        files: Vec<PathBuf>,
        /// Registry JSON file (defaults to $FREQLENS_REGISTRY, then ~/.freqlens, then builtin)
        #[arg(long)]
        registry: Option<PathBuf>,
        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
        /// Characters of context kept on each side of a claim
        #[arg(long)]
        context_window: Option<usize>,
        /// Exit with status 1 when any claim is flagged as pseudoscience
        #[arg(long)]
        fail_on_flag: bool,
    },
    /// Extract frequency claims without classifying them
    Extract {
        /// Files to read (stdin when none are given)
        files: Vec<PathBuf>,
        /// Characters of context kept on each side of a claim
        #[arg(long)]
        context_window: Option<usize>,
        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Validate a registry and list its entries
    Registry {
        /// Registry JSON file (defaults to $FREQLENS_REGISTRY, then ~/.freqlens, then builtin)
        #[arg(long)]
        registry: Option<PathBuf>,
        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Text,
}
