//! Chain-specific types and error definitions.

use thiserror::Error;

// Re-export BlockchainConfig from config module to avoid duplication
pub use crate::config::schema::BlockchainConfig;

/// Chain ID type for strong typing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChainId(pub u64);

/// Errors that can occur during blockchain operations.
#[derive(Debug, Error)]
pub enum BlockchainError {
    /// RPC connection or request failed.
    #[error("RPC error: {0}")]
    Rpc(String),

    /// RPC request timed out.
    #[error("RPC timeout after {0} seconds")]
    Timeout(u64),

    /// Contract call reverted or returned data that does not decode.
    #[error("Contract call {method} failed: {reason}")]
    Call { method: &'static str, reason: String },

    /// Address string is not a 20-byte hex address.
    #[error("Invalid address '{0}'")]
    InvalidAddress(String),

    /// Chain configuration mismatch.
    #[error("Chain ID mismatch: expected {expected}, got {actual}")]
    ChainMismatch { expected: u64, actual: u64 },
}

/// Result type for blockchain operations.
pub type BlockchainResult<T> = Result<T, BlockchainError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = BlockchainConfig::default();
        assert_eq!(config.rpc_url, "http://localhost:8545");
        assert_eq!(config.rpc_timeout_secs, 30);
        assert!(config.chain_id.is_none());
    }

    #[test]
    fn test_error_display() {
        let err = BlockchainError::Timeout(10);
        assert_eq!(err.to_string(), "RPC timeout after 10 seconds");

        let err = BlockchainError::Call {
            method: "getUserPositions",
            reason: "execution reverted".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Contract call getUserPositions failed: execution reverted"
        );
    }
}
