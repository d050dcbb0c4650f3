//! Blockchain integration subsystem.
//!
//! # Data Flow
//! ```text
//! Config (RPC URL, contract + user addresses)
//!     → client.rs (RPC connection with timeouts)
//!     → contract.rs (ISanDigital4Funds view calls)
//!     → inspector.rs (sequential queries, printed report)
//! ```
//!
//! # Constraints
//! - Read-only: no transaction is ever signed or sent
//! - Every RPC call is bounded by the configured timeout
//! - No retries; the first failed query ends the run

pub mod client;
pub mod contract;
pub mod inspector;
pub mod types;

pub use client::BlockchainClient;
pub use contract::{ContractReader, SanDigitalContract};
pub use inspector::{format_units, InspectError, InspectionReport, Inspector, TokenFormat};
pub use types::{BlockchainConfig, BlockchainError, ChainId};
