use std::process::ExitCode;

use clap::Parser;
use freqlens::cli::{self, Cli};
use freqlens::config;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    freqlens::init_tracing();

    tracing::debug!("{} starting v{}", config::APP_NAME, config::APP_VERSION);

    match cli::run(cli).await {
        Ok(outcome) => outcome.exit_code(),
        Err(e) => {
            tracing::error!(error = %e, "Command failed");
            eprintln!("error: {e}");
            cli::error_exit_code()
        }
    }
}
