//! Contract state inspection.
//!
//! Issues the three read-only queries one after another and prints each
//! result as soon as it arrives. The first failure stops the run.

use std::io::Write;

use alloy::primitives::{Address, U256};
use thiserror::Error;

use crate::blockchain::contract::ContractReader;
use crate::blockchain::types::BlockchainError;

/// Errors that abort an inspection.
#[derive(Debug, Error)]
pub enum InspectError {
    /// One of the contract queries failed.
    #[error("{query} query failed: {source}")]
    Query {
        query: &'static str,
        #[source]
        source: BlockchainError,
    },

    /// Writing the report failed.
    #[error("Output error: {0}")]
    Output(#[from] std::io::Error),
}

/// Values gathered by a successful inspection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InspectionReport {
    pub active_positions: U256,
    pub user_positions: usize,
    pub user_balance: U256,
}

/// How the balance is printed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenFormat {
    pub symbol: String,
    pub decimals: u8,
}

impl Default for TokenFormat {
    fn default() -> Self {
        Self {
            symbol: "USDT".to_string(),
            decimals: 6,
        }
    }
}

impl TokenFormat {
    pub fn format(&self, amount: U256) -> String {
        format!("{} {}", format_units(amount, self.decimals), self.symbol)
    }
}

/// Largest power of ten that fits in a U256.
const MAX_SCALE_DECIMALS: u8 = 77;

/// Render `value` as a fixed-point decimal with `decimals` fractional digits.
///
/// Trailing zeros are trimmed but one fractional digit is always kept:
/// `1500000` at 6 decimals is `1.5`, `1000000` is `1.0`. Any `decimals`
/// is accepted; past 77 every U256 is below one whole unit.
pub fn format_units(value: U256, decimals: u8) -> String {
    let (whole, fraction) = if decimals > MAX_SCALE_DECIMALS {
        (U256::ZERO, value)
    } else {
        let scale = U256::from(10u64).pow(U256::from(decimals));
        (value / scale, value % scale)
    };

    let digits = format!("{:0>width$}", fraction.to_string(), width = decimals as usize);
    let trimmed = digits.trim_end_matches('0');
    let fraction = if trimmed.is_empty() { "0" } else { trimmed };

    format!("{}.{}", whole, fraction)
}

/// Runs the inspection queries against a [`ContractReader`].
#[derive(Debug)]
pub struct Inspector<R> {
    reader: R,
    user: Address,
    token: TokenFormat,
}

impl<R: ContractReader> Inspector<R> {
    pub fn new(reader: R, user: Address, token: TokenFormat) -> Self {
        Self {
            reader,
            user,
            token,
        }
    }

    /// Query and print, in order: active positions, user position count,
    /// user balance.
    pub async fn run<W: Write>(&self, out: &mut W) -> Result<InspectionReport, InspectError> {
        let active_positions = self
            .reader
            .active_positions()
            .await
            .map_err(|source| InspectError::Query {
                query: "system state",
                source,
            })?;
        writeln!(out, "Active positions: {}", active_positions)?;

        let user_positions = self
            .reader
            .user_position_count(self.user)
            .await
            .map_err(|source| InspectError::Query {
                query: "user positions",
                source,
            })?;
        writeln!(out, "User positions: {}", user_positions)?;

        let user_balance = self
            .reader
            .user_balance(self.user)
            .await
            .map_err(|source| InspectError::Query {
                query: "user balance",
                source,
            })?;
        writeln!(out, "User balance: {}", self.token.format(user_balance))?;

        tracing::debug!(user = %self.user, "Inspection complete");

        Ok(InspectionReport {
            active_positions,
            user_positions,
            user_balance,
        })
    }
}
