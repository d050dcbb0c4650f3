//! Configuration schema definitions.
//!
//! This module defines the configuration structure shared by the tools.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

/// Root configuration for the SanDigital tools.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct ToolsConfig {
    /// ABI extraction paths.
    pub abi: AbiConfig,

    /// Environment checker settings.
    pub env: EnvConfig,

    /// Contract inspector settings.
    pub inspector: InspectorConfig,

    /// Logging settings.
    pub logging: LoggingConfig,
}

/// ABI extractor configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct AbiConfig {
    /// Compiled artifact to read.
    pub artifact_path: String,

    /// Destination of the extracted ABI (overwritten on every run).
    pub output_path: String,
}

impl Default for AbiConfig {
    fn default() -> Self {
        Self {
            artifact_path: "artifacts/contracts/SanDigital_4Funds.sol/SanDigital_4Funds.json"
                .to_string(),
            output_path: "abi/SanDigital_4Funds.json".to_string(),
        }
    }
}

/// Environment checker configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct EnvConfig {
    /// Optional dotenv file. `None` uses the default `.env` lookup.
    pub env_file: Option<String>,

    /// Variables to report on.
    pub variables: Vec<String>,

    /// Print secret-like values verbatim.
    pub reveal_secrets: bool,
}

impl Default for EnvConfig {
    fn default() -> Self {
        Self {
            env_file: None,
            variables: vec!["PRIVATE_KEY".to_string(), "RPC_URL".to_string()],
            reveal_secrets: false,
        }
    }
}

/// Contract inspector configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct InspectorConfig {
    /// Node connection settings.
    pub blockchain: BlockchainConfig,

    /// Deployed `SanDigital_4Funds` address.
    pub contract_address: String,

    /// User whose positions and balance are queried.
    pub user_address: String,

    /// Symbol printed after the balance.
    pub token_symbol: String,

    /// Fixed-point decimals of the balance token.
    pub token_decimals: u8,
}

impl Default for InspectorConfig {
    fn default() -> Self {
        Self {
            blockchain: BlockchainConfig::default(),
            contract_address: String::new(),
            user_address: String::new(),
            token_symbol: "USDT".to_string(),
            token_decimals: 6,
        }
    }
}

/// Blockchain connection configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct BlockchainConfig {
    /// JSON-RPC endpoint URL.
    pub rpc_url: String,

    /// Expected chain ID. Checked against the node when set.
    pub chain_id: Option<u64>,

    /// RPC request timeout in seconds.
    pub rpc_timeout_secs: u64,
}

impl Default for BlockchainConfig {
    fn default() -> Self {
        Self {
            rpc_url: "http://localhost:8545".to_string(),
            chain_id: None,
            rpc_timeout_secs: 30,
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error).
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}
