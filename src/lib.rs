//! Developer tools for the SanDigital_4Funds contract.
//!
//! - [`abi`]: copy the ABI out of a compiled artifact
//! - [`env`]: report which deployment variables are set
//! - [`blockchain`]: read-only inspection of the deployed contract

pub mod abi;
pub mod blockchain;
pub mod cli;
pub mod config;
pub mod env;
pub mod observability;

pub use cli::{Cli, CommandError};
pub use config::ToolsConfig;
