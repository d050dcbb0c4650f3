//! ABI extraction types and error definitions.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while extracting an ABI.
#[derive(Debug, Error)]
pub enum AbiError {
    /// Reading the artifact or writing the output failed.
    #[error("IO error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The artifact is not valid JSON.
    #[error("Parse error in {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The artifact has no `abi` field.
    #[error("Artifact has no '{0}' field")]
    MissingField(&'static str),

    /// The `abi` field exists but holds something other than an array.
    #[error("Artifact field '{field}' holds {found}, expected an array")]
    NotAnArray { field: &'static str, found: &'static str },

    /// Rendering the ABI back to JSON failed.
    #[error("Serialize error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Result type for ABI operations.
pub type AbiResult<T> = Result<T, AbiError>;

/// Counts of the entries written by an extraction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AbiSummary {
    /// Total number of entries in the ABI array.
    pub entries: usize,
    pub functions: usize,
    pub events: usize,
    pub errors: usize,
    /// Constructors, fallback, receive, and untyped entries.
    pub other: usize,
}

impl AbiSummary {
    /// Tally entries by their `type` field.
    ///
    /// Entries without a `type` are functions, matching the Solidity ABI
    /// JSON convention.
    pub fn from_entries(entries: &[serde_json::Value]) -> Self {
        let mut summary = Self {
            entries: entries.len(),
            ..Self::default()
        };
        for entry in entries {
            match entry.get("type").and_then(|t| t.as_str()) {
                Some("function") | None => summary.functions += 1,
                Some("event") => summary.events += 1,
                Some("error") => summary.errors += 1,
                Some(_) => summary.other += 1,
            }
        }
        summary
    }
}

/// Human-readable name of a JSON value's kind.
pub(crate) fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}
