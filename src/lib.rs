pub mod classifier;
pub mod cli;
pub mod config;
pub mod extraction;
pub mod model;
pub mod registry;
pub mod report;
pub mod scanner;

use tracing_subscriber::EnvFilter;

pub use classifier::classify;
pub use extraction::extract_claims;
pub use model::{FrequencyClaim, Verdict, VerdictStatus};
pub use registry::Registries;
pub use report::{build_report, VerdictReport};
pub use scanner::{Document, ScanOutcome, Scanner};

/// Install the global subscriber. Logs go to stderr so stdout carries reports.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .with_writer(std::io::stderr)
        .init();
}
