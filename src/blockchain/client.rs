//! Blockchain RPC client with timeout and error handling.
//!
//! # Responsibilities
//! - Connect to the JSON-RPC endpoint
//! - Wrap every RPC future in the configured timeout
//! - Optionally verify the node serves the expected chain

use alloy::providers::{DynProvider, Provider, ProviderBuilder};
use std::future::IntoFuture;
use std::time::Duration;
use tokio::time::timeout;

use crate::blockchain::types::{BlockchainConfig, BlockchainError, BlockchainResult, ChainId};

/// Blockchain RPC client wrapper.
#[derive(Clone)]
pub struct BlockchainClient {
    /// Type-erased HTTP provider.
    provider: DynProvider,
    /// Configuration.
    config: BlockchainConfig,
    /// Request timeout duration.
    timeout_duration: Duration,
}

impl BlockchainClient {
    /// Create a new blockchain client.
    ///
    /// Only the URL is checked here; no request is sent until the first call.
    pub fn new(config: BlockchainConfig) -> BlockchainResult<Self> {
        let url: url::Url = config.rpc_url.parse().map_err(|e| {
            BlockchainError::Rpc(format!("Invalid RPC URL '{}': {}", config.rpc_url, e))
        })?;
        // Read-only: no nonce, gas or chain-id fillers.
        let provider = ProviderBuilder::new()
            .disable_recommended_fillers()
            .connect_http(url)
            .erased();

        tracing::debug!(rpc_url = %config.rpc_url, "Blockchain client created");

        Ok(Self {
            provider,
            timeout_duration: Duration::from_secs(config.rpc_timeout_secs),
            config,
        })
    }

    /// Await an RPC future, failing with [`BlockchainError::Timeout`] when it
    /// outlives the configured timeout.
    pub async fn timed<F: IntoFuture>(&self, fut: F) -> BlockchainResult<F::Output> {
        timeout(self.timeout_duration, fut)
            .await
            .map_err(|_| BlockchainError::Timeout(self.config.rpc_timeout_secs))
    }

    /// Get the chain ID from the RPC.
    pub async fn get_chain_id(&self) -> BlockchainResult<ChainId> {
        let id = self
            .timed(self.provider.get_chain_id())
            .await?
            .map_err(|e| BlockchainError::Rpc(e.to_string()))?;
        Ok(ChainId(id))
    }

    /// Verify the connected chain ID matches configuration.
    ///
    /// A no-op when no chain ID is configured.
    pub async fn verify_chain_id(&self) -> BlockchainResult<()> {
        let Some(expected) = self.config.chain_id else {
            return Ok(());
        };
        let actual = self.get_chain_id().await?;
        if actual.0 != expected {
            return Err(BlockchainError::ChainMismatch {
                expected,
                actual: actual.0,
            });
        }
        tracing::debug!(chain_id = expected, "Chain ID verified");
        Ok(())
    }

    /// Get the underlying provider.
    pub fn provider(&self) -> &DynProvider {
        &self.provider
    }
}

impl std::fmt::Debug for BlockchainClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BlockchainClient")
            .field("rpc_url", &self.config.rpc_url)
            .field("chain_id", &self.config.chain_id)
            .field("timeout_secs", &self.config.rpc_timeout_secs)
            .finish()
    }
}
