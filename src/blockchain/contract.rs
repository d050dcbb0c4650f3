//! Read-only binding to the deployed `SanDigital_4Funds` contract.

use alloy::primitives::{Address, U256};
use alloy::sol;

use crate::blockchain::client::BlockchainClient;
use crate::blockchain::types::{BlockchainError, BlockchainResult};

sol! {
    /// The view methods of `SanDigital_4Funds` used by the inspector.
    #[sol(rpc)]
    interface ISanDigital4Funds {
        function getSystemState() external view returns (
            uint256 activePositions,
            uint256 totalPositions,
            uint256 totalDeposited,
            uint256 totalPaidOut
        );

        function getUserPositions(address user) external view returns (uint256[] memory);

        function getUserTotalBalance(address user) external view returns (uint256);
    }
}

/// The three read-only queries the inspector issues.
#[allow(async_fn_in_trait)]
pub trait ContractReader {
    /// First field of `getSystemState()`: count of active positions.
    async fn active_positions(&self) -> BlockchainResult<U256>;

    /// Length of `getUserPositions(user)`.
    async fn user_position_count(&self, user: Address) -> BlockchainResult<usize>;

    /// `getUserTotalBalance(user)` in token base units.
    async fn user_balance(&self, user: Address) -> BlockchainResult<U256>;
}

/// `SanDigital_4Funds` deployed at a fixed address.
#[derive(Debug, Clone)]
pub struct SanDigitalContract {
    client: BlockchainClient,
    address: Address,
}

impl SanDigitalContract {
    pub fn new(client: BlockchainClient, address: Address) -> Self {
        Self { client, address }
    }

    /// Parse `address` and bind the contract.
    pub fn at(client: BlockchainClient, address: &str) -> BlockchainResult<Self> {
        let address = address
            .parse()
            .map_err(|_| BlockchainError::InvalidAddress(address.to_string()))?;
        Ok(Self::new(client, address))
    }

    pub fn address(&self) -> Address {
        self.address
    }

    fn instance(&self) -> ISanDigital4Funds::ISanDigital4FundsInstance<alloy::providers::DynProvider> {
        ISanDigital4Funds::new(self.address, self.client.provider().clone())
    }
}

impl ContractReader for SanDigitalContract {
    async fn active_positions(&self) -> BlockchainResult<U256> {
        let instance = self.instance();
        let state = self
            .client
            .timed(instance.getSystemState().call())
            .await?
            .map_err(|e| call_error("getSystemState", e))?;
        Ok(state.activePositions)
    }

    async fn user_position_count(&self, user: Address) -> BlockchainResult<usize> {
        let instance = self.instance();
        let positions = self
            .client
            .timed(instance.getUserPositions(user).call())
            .await?
            .map_err(|e| call_error("getUserPositions", e))?;
        Ok(positions.len())
    }

    async fn user_balance(&self, user: Address) -> BlockchainResult<U256> {
        let instance = self.instance();
        self.client
            .timed(instance.getUserTotalBalance(user).call())
            .await?
            .map_err(|e| call_error("getUserTotalBalance", e))
    }
}

/// Transport failures without an RPC error payload are network faults;
/// everything else (reverts, undecodable return data) is a call failure.
fn call_error(method: &'static str, err: alloy::contract::Error) -> BlockchainError {
    match err {
        alloy::contract::Error::TransportError(e) if e.as_error_resp().is_none() => {
            BlockchainError::Rpc(e.to_string())
        }
        other => BlockchainError::Call {
            method,
            reason: other.to_string(),
        },
    }
}
