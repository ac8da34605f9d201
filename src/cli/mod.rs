//! Command-line front end: argument parsing, input loading, output rendering.

pub mod args;
pub mod render;

use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Arc;

pub use args::{Cli, Commands, OutputFormat};

use crate::config::{self, ScanConfig};
use crate::registry::{ConfigurationError, Registries};
use crate::extraction::{extract_claims, ExtractorOptions};
use crate::scanner::{Document, ScanError, ScanOutcome, Scanner};

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Registry configuration error: {0}")]
    Configuration(#[from] ConfigurationError),

    #[error("Cannot read '{path}': {reason}")]
    Input { path: String, reason: String },

    #[error("Failed to serialize output: {0}")]
    Output(#[from] serde_json::Error),
}

/// Process exit status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Clean,
    Flagged,
    /// At least one document could not be scanned; the rest were reported.
    Failed,
}

impl Outcome {
    pub fn exit_code(self) -> ExitCode {
        match self {
            Self::Clean => ExitCode::SUCCESS,
            Self::Flagged => ExitCode::from(1),
            Self::Failed => error_exit_code(),
        }
    }
}

/// Exit status used for configuration and I/O failures.
pub fn error_exit_code() -> ExitCode {
    ExitCode::from(2)
}

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

/// Run one command, writing results to stdout.
pub async fn run(cli: Cli) -> Result<Outcome, AppError> {
    match cli.command {
        Commands::Scan {
            files,
            registry,
            format,
            context_window,
            fail_on_flag,
        } => {
            let registries = Arc::new(load_registries(registry.as_deref())?);
            let scanner = Scanner::new(registries, scan_config(context_window));
            let documents = read_documents(&files)?;

            let batch = BatchSummary::collect(scanner.scan_batch(documents).await);

            match format {
                OutputFormat::Json => {
                    println!("{}", serde_json::to_string_pretty(&batch.outcomes)?)
                }
                OutputFormat::Text => {
                    for outcome in &batch.outcomes {
                        print!("{}", render::scan_text(outcome));
                    }
                }
            }
            for failure in &batch.failures {
                eprintln!("error: {failure}");
            }

            Ok(batch.status(fail_on_flag))
        }
        Commands::Extract {
            files,
            context_window,
            format,
        } => {
            let options = ExtractorOptions {
                context_window_chars: scan_config(context_window).context_window_chars,
            };
            for document in read_documents(&files)? {
                let output = extract_claims(&document.text, &options);
                match format {
                    OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&output)?),
                    OutputFormat::Text => {
                        print!("{}", render::extraction_text(&document.label, &output))
                    }
                }
            }
            Ok(Outcome::Clean)
        }
        Commands::Registry { registry, format } => {
            let registries = load_registries(registry.as_deref())?;
            match format {
                OutputFormat::Json => {
                    let listing = serde_json::json!({
                        "verified_ranges": registries.verified.entries(),
                        "red_flag_ranges": registries.red_flags.entries(),
                    });
                    println!("{}", serde_json::to_string_pretty(&listing)?);
                }
                OutputFormat::Text => print!("{}", render::registry_text(&registries)),
            }
            Ok(Outcome::Clean)
        }
    }
}

// ---------------------------------------------------------------------------
// Batch results
// ---------------------------------------------------------------------------

/// Batch results split into finished scans and failed tasks, input order kept.
#[derive(Debug)]
pub struct BatchSummary {
    pub outcomes: Vec<ScanOutcome>,
    pub failures: Vec<ScanError>,
}

impl BatchSummary {
    pub fn collect(results: Vec<Result<ScanOutcome, ScanError>>) -> Self {
        let mut outcomes = Vec::with_capacity(results.len());
        let mut failures = Vec::new();
        for result in results {
            match result {
                Ok(outcome) => outcomes.push(outcome),
                Err(e) => failures.push(e),
            }
        }
        Self { outcomes, failures }
    }

    /// A failed task outranks flagged content.
    pub fn status(&self, fail_on_flag: bool) -> Outcome {
        if !self.failures.is_empty() {
            Outcome::Failed
        } else if fail_on_flag && self.outcomes.iter().any(|o| o.report.has_pseudoscience()) {
            Outcome::Flagged
        } else {
            Outcome::Clean
        }
    }
}

fn scan_config(context_window: Option<usize>) -> ScanConfig {
    let mut config = ScanConfig::default();
    if let Some(chars) = context_window {
        config.context_window_chars = chars;
    }
    config
}

/// Explicit path, `FREQLENS_REGISTRY`, `~/.freqlens`, then the embedded table.
pub fn load_registries(explicit: Option<&Path>) -> Result<Registries, ConfigurationError> {
    match config::resolve_registry_path(explicit) {
        Some(path) => {
            tracing::info!(path = %path.display(), "Loading frequency registry");
            Registries::load(&path)
        }
        None => Registries::builtin(),
    }
}

/// Read each file, or stdin when the list is empty.
pub fn read_documents(files: &[PathBuf]) -> Result<Vec<Document>, AppError> {
    if files.is_empty() {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .map_err(|e| AppError::Input {
                path: "<stdin>".to_string(),
                reason: e.to_string(),
            })?;
        return Ok(vec![Document::new("<stdin>", text)]);
    }

    files
        .iter()
        .map(|path| {
            let text = std::fs::read_to_string(path).map_err(|e| AppError::Input {
                path: path.display().to_string(),
                reason: e.to_string(),
            })?;
            Ok(Document::new(path.display().to_string(), text))
        })
        .collect()
}
