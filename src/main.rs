//! `sandigital` command-line entry point.
//!
//! ```text
//! sandigital extract-abi   artifact JSON → abi/SanDigital_4Funds.json
//! sandigital check-env     .env + process env → presence report
//! sandigital inspect       JSON-RPC eth_call ×3 → state report
//! ```
//!
//! Exits with status 1 on any failure.

use std::process::ExitCode;

use clap::Parser;

use sandigital_tools::cli::{self, Cli};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match cli::run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = ?e, "Command failed");
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
