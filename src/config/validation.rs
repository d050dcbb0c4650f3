//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (timeouts > 0)
//! - Check addresses and URLs parse before the inspector runs
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: ToolsConfig → Result<(), Vec<ValidationError>>
//! - Inspector settings are only validated for `inspect`; addresses may be
//!   empty here, `inspect` itself requires them

use alloy::primitives::Address;

use crate::config::schema::{InspectorConfig, ToolsConfig};

/// A single semantic problem in the configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Dotted path of the offending field.
    pub field: String,
    /// What is wrong with it.
    pub message: String,
}

impl ValidationError {
    fn new(field: &str, message: impl Into<String>) -> Self {
        Self {
            field: field.to_string(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Validate the sections every subcommand relies on.
///
/// The `[inspector]` section is checked separately by
/// [`validate_inspector`], only when the inspector runs.
pub fn validate_config(config: &ToolsConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.abi.artifact_path.trim().is_empty() {
        errors.push(ValidationError::new("abi.artifact_path", "must not be empty"));
    }
    if config.abi.output_path.trim().is_empty() {
        errors.push(ValidationError::new("abi.output_path", "must not be empty"));
    }

    if config.env.variables.iter().any(|name| name.trim().is_empty()) {
        errors.push(ValidationError::new(
            "env.variables",
            "variable names must not be empty",
        ));
    }

    into_result(errors)
}

/// Validate the inspector section.
pub fn validate_inspector(inspector: &InspectorConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if let Err(e) = inspector.blockchain.rpc_url.parse::<url::Url>() {
        errors.push(ValidationError::new(
            "inspector.blockchain.rpc_url",
            format!("invalid URL '{}': {}", inspector.blockchain.rpc_url, e),
        ));
    }
    if inspector.blockchain.rpc_timeout_secs == 0 {
        errors.push(ValidationError::new(
            "inspector.blockchain.rpc_timeout_secs",
            "must be greater than zero",
        ));
    }
    check_address(&mut errors, "inspector.contract_address", &inspector.contract_address);
    check_address(&mut errors, "inspector.user_address", &inspector.user_address);

    into_result(errors)
}

fn into_result(errors: Vec<ValidationError>) -> Result<(), Vec<ValidationError>> {
    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn check_address(errors: &mut Vec<ValidationError>, field: &str, value: &str) {
    if value.is_empty() {
        return;
    }
    if let Err(e) = value.parse::<Address>() {
        errors.push(ValidationError::new(
            field,
            format!("invalid address '{}': {}", value, e),
        ));
    }
}
