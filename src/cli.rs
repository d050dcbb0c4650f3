//! Command-line interface.
//!
//! One subcommand per tool. Each loads the shared configuration, applies
//! its own flag overrides, and prints its report to stdout.

use std::io::Write;
use std::path::{Path, PathBuf};

use alloy::primitives::Address;
use clap::{Parser, Subcommand};
use thiserror::Error;

use crate::abi::{self, AbiError, AbiSummary};
use crate::blockchain::{
    BlockchainClient, BlockchainError, InspectError, InspectionReport, Inspector,
    SanDigitalContract, TokenFormat,
};
use crate::config::{self, AbiConfig, ConfigError, EnvConfig, InspectorConfig, ToolsConfig};
use crate::env::{self, EnvReport};
use crate::observability;

#[derive(Parser, Debug)]
#[command(name = "sandigital")]
#[command(about = "Developer tools for the SanDigital_4Funds contract", long_about = None)]
pub struct Cli {
    /// Path to a TOML config file (defaults to ./sandigital.toml when present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Log level when RUST_LOG is unset
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Extract the ABI array from a compiled contract artifact
    ExtractAbi {
        /// Artifact JSON to read
        #[arg(long)]
        artifact: Option<PathBuf>,
        /// File to write the ABI to (overwritten)
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Report which deployment environment variables are set
    CheckEnv {
        /// Dotenv file to load before checking
        #[arg(long)]
        env_file: Option<PathBuf>,
        /// Print secret-like values instead of redacting them
        #[arg(long)]
        reveal: bool,
        /// Variables to check (defaults to the configured list)
        names: Vec<String>,
    },
    /// Print contract state using read-only calls
    Inspect {
        /// JSON-RPC endpoint
        #[arg(long)]
        rpc_url: Option<String>,
        /// Deployed contract address
        #[arg(long)]
        contract: Option<String>,
        /// User whose positions and balance are queried
        #[arg(long)]
        user: Option<String>,
    },
}

/// Errors surfaced by a subcommand.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Abi(#[from] AbiError),

    #[error(transparent)]
    Blockchain(#[from] BlockchainError),

    #[error(transparent)]
    Inspect(#[from] InspectError),

    #[error("Output error: {0}")]
    Output(#[from] std::io::Error),

    /// A setting the command cannot run without is empty.
    #[error("Missing setting '{0}'")]
    MissingSetting(&'static str),
}

impl Commands {
    /// Fold this command's flags into the loaded configuration.
    pub fn apply_overrides(&self, config: &mut ToolsConfig) {
        match self {
            Commands::ExtractAbi { artifact, output } => {
                if let Some(path) = artifact {
                    config.abi.artifact_path = path.display().to_string();
                }
                if let Some(path) = output {
                    config.abi.output_path = path.display().to_string();
                }
            }
            Commands::CheckEnv {
                env_file,
                reveal,
                names,
            } => {
                if let Some(path) = env_file {
                    config.env.env_file = Some(path.display().to_string());
                }
                if *reveal {
                    config.env.reveal_secrets = true;
                }
                if !names.is_empty() {
                    config.env.variables = names.clone();
                }
            }
            Commands::Inspect {
                rpc_url,
                contract,
                user,
            } => {
                if let Some(url) = rpc_url {
                    config.inspector.blockchain.rpc_url = url.clone();
                }
                if let Some(address) = contract {
                    config.inspector.contract_address = address.clone();
                }
                if let Some(address) = user {
                    config.inspector.user_address = address.clone();
                }
            }
        }
    }
}

/// Run a parsed command line.
pub async fn run(cli: Cli) -> Result<(), CommandError> {
    let parsed = config::read_config_file(cli.config.as_deref());
    let level = cli
        .log_level
        .clone()
        .or_else(|| parsed.as_ref().ok().map(|c| c.logging.level.clone()))
        .unwrap_or_else(|| "info".to_string());
    observability::init_logging(&level);

    let mut config = parsed?;
    cli.command.apply_overrides(&mut config);

    // The selected file wins over ./.env; neither overrides the process
    // environment. Both feed the SANDIGITAL_* overrides below.
    if let Some(path) = &config.env.env_file {
        env::load_dotenv(Some(Path::new(path)));
    }
    env::load_dotenv(None);

    config::apply_env_overrides(&mut config, |name| std::env::var(name).ok());
    // Flags beat SANDIGITAL_* variables.
    cli.command.apply_overrides(&mut config);
    config::validate_config(&config).map_err(ConfigError::Validation)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match cli.command {
        Commands::ExtractAbi { .. } => {
            extract_abi(&config.abi, &mut out)?;
        }
        Commands::CheckEnv { .. } => {
            check_env(&config.env, &mut out)?;
        }
        Commands::Inspect { .. } => {
            inspect(&config.inspector, &mut out).await?;
        }
    }
    Ok(())
}

/// `extract-abi`: copy the artifact's ABI to the output file.
pub fn extract_abi<W: Write>(config: &AbiConfig, out: &mut W) -> Result<AbiSummary, CommandError> {
    let summary = abi::extract_to_file(
        Path::new(&config.artifact_path),
        Path::new(&config.output_path),
    )?;
    writeln!(
        out,
        "ABI written to {} ({} entries)",
        config.output_path, summary.entries
    )?;
    Ok(summary)
}

/// `check-env`: report configured variables from the process environment.
pub fn check_env<W: Write>(config: &EnvConfig, out: &mut W) -> Result<EnvReport, CommandError> {
    let report = env::check(config.variables.as_slice());
    out.write_all(report.render(config.reveal_secrets).as_bytes())?;
    tracing::debug!(
        checked = report.entries.len(),
        missing = report.missing(),
        "Environment checked"
    );
    Ok(report)
}

/// `inspect`: bind the contract and print its state for the configured user.
pub async fn inspect<W: Write>(
    config: &InspectorConfig,
    out: &mut W,
) -> Result<InspectionReport, CommandError> {
    config::validate_inspector(config).map_err(ConfigError::Validation)?;
    if config.contract_address.is_empty() {
        return Err(CommandError::MissingSetting("inspector.contract_address"));
    }
    if config.user_address.is_empty() {
        return Err(CommandError::MissingSetting("inspector.user_address"));
    }
    let user: Address = config
        .user_address
        .parse()
        .map_err(|_| BlockchainError::InvalidAddress(config.user_address.clone()))?;

    let client = BlockchainClient::new(config.blockchain.clone())?;
    client.verify_chain_id().await?;
    let contract = SanDigitalContract::at(client, &config.contract_address)?;

    tracing::info!(
        contract = %contract.address(),
        user = %user,
        rpc_url = %config.blockchain.rpc_url,
        "Inspecting contract"
    );

    let token = TokenFormat {
        symbol: config.token_symbol.clone(),
        decimals: config.token_decimals,
    };
    let report = Inspector::new(contract, user, token).run(out).await?;
    Ok(report)
}
