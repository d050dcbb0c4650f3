//! Artifact reading and ABI extraction.
//!
//! # Responsibilities
//! - Read and parse a compiled contract artifact
//! - Pull out the `abi` array verbatim
//! - Render it with two-space indentation and overwrite the output file

use std::fs;
use std::path::Path;

use serde_json::Value;

use crate::abi::types::{json_kind, AbiError, AbiResult, AbiSummary};

/// Artifact field holding the interface definition.
pub const ABI_FIELD: &str = "abi";

/// Read and parse an artifact document.
pub fn read_artifact(path: &Path) -> AbiResult<Value> {
    let content = fs::read_to_string(path).map_err(|source| AbiError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&content).map_err(|source| AbiError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Borrow the `abi` array of an artifact.
pub fn extract_abi(artifact: &Value) -> AbiResult<&Vec<Value>> {
    let abi = artifact
        .get(ABI_FIELD)
        .ok_or(AbiError::MissingField(ABI_FIELD))?;
    abi.as_array().ok_or(AbiError::NotAnArray {
        field: ABI_FIELD,
        found: json_kind(abi),
    })
}

/// Render ABI entries as pretty-printed JSON (two-space indent, no trailing newline).
pub fn render_abi(entries: &[Value]) -> AbiResult<String> {
    Ok(serde_json::to_string_pretty(entries)?)
}

/// Write rendered ABI to `path`, replacing any previous content.
pub fn write_abi(path: &Path, rendered: &str) -> AbiResult<()> {
    let io_err = |source| AbiError::Io {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(io_err)?;
    }
    fs::write(path, rendered).map_err(io_err)
}

/// Extract the ABI of `artifact_path` into `output_path`.
///
/// Nothing is written unless the artifact parses and carries an `abi` array.
pub fn extract_to_file(artifact_path: &Path, output_path: &Path) -> AbiResult<AbiSummary> {
    let artifact = read_artifact(artifact_path)?;
    let entries = extract_abi(&artifact)?;
    let rendered = render_abi(entries)?;
    write_abi(output_path, &rendered)?;

    let summary = AbiSummary::from_entries(entries);
    tracing::info!(
        artifact = %artifact_path.display(),
        output = %output_path.display(),
        entries = summary.entries,
        functions = summary.functions,
        events = summary.events,
        "ABI extracted"
    );
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_extract_abi_returns_field() {
        let artifact = json!({
            "contractName": "SanDigital_4Funds",
            "abi": [{"type": "function", "name": "getSystemState"}],
            "bytecode": "0x6080"
        });
        let entries = extract_abi(&artifact).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0]["name"], "getSystemState");
    }

    #[test]
    fn test_extract_abi_missing_field() {
        let artifact = json!({"bytecode": "0x6080"});
        assert!(matches!(
            extract_abi(&artifact),
            Err(AbiError::MissingField("abi"))
        ));
    }

    #[test]
    fn test_extract_abi_rejects_null() {
        let artifact = json!({"abi": null});
        assert!(matches!(
            extract_abi(&artifact),
            Err(AbiError::NotAnArray { found: "null", .. })
        ));
    }

    #[test]
    fn test_render_uses_two_space_indent() {
        let entries = vec![json!({"type": "event"})];
        let rendered = render_abi(&entries).unwrap();
        assert_eq!(rendered, "[\n  {\n    \"type\": \"event\"\n  }\n]");
    }

    #[test]
    fn test_render_empty_array() {
        assert_eq!(render_abi(&[]).unwrap(), "[]");
    }

    #[test]
    fn test_read_artifact_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_artifact(&dir.path().join("missing.json")).unwrap_err();
        assert!(matches!(err, AbiError::Io { .. }));
    }

    #[test]
    fn test_read_artifact_malformed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        fs::write(&path, "{\"abi\": [").unwrap();
        let err = read_artifact(&path).unwrap_err();
        assert!(matches!(err, AbiError::Parse { .. }));
        assert!(err.to_string().contains("broken.json"));
    }

    #[test]
    fn test_write_creates_parent_dirs_and_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("abi").join("out.json");

        write_abi(&path, "[\n  1,\n  2,\n  3\n]").unwrap();
        write_abi(&path, "[]").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "[]");
    }
}
