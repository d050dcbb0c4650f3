//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! sandigital.toml (optional)
//!     → loader.rs (parse & deserialize, SANDIGITAL_* overrides)
//!     → validation.rs (semantic checks)
//!     → ToolsConfig (validated, immutable)
//!     → CLI flags override individual fields
//! ```
//!
//! # Design Decisions
//! - All fields have defaults so the file is optional
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{apply_env_overrides, load_config, read_config_file, ConfigError};
pub use validation::{validate_config, validate_inspector, ValidationError};
pub use schema::{AbiConfig, BlockchainConfig, EnvConfig, InspectorConfig, ToolsConfig};
