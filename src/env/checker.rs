//! Environment variable presence reporting.
//!
//! # Security
//! - Secret-like values are redacted unless the caller asks to reveal them
//! - Values are never logged, only printed to the report

use std::fmt::Write as _;
use std::path::{Path, PathBuf};

/// Name fragments that mark a variable as secret.
const SECRET_MARKERS: &[&str] = &["KEY", "SECRET", "PASSWORD", "TOKEN", "MNEMONIC", "SEED"];

/// Load a dotenv file into the process environment.
///
/// With `path` unset, the usual `.env` lookup from the current directory
/// upwards is used. A missing or unreadable file is not an error. Variables
/// already present in the environment keep their values.
pub fn load_dotenv(path: Option<&Path>) -> Option<PathBuf> {
    let result = match path {
        Some(path) => dotenvy::from_path(path).map(|()| path.to_path_buf()),
        None => dotenvy::dotenv(),
    };
    match result {
        Ok(loaded) => {
            tracing::debug!(path = %loaded.display(), "Loaded dotenv file");
            Some(loaded)
        }
        Err(e) => {
            tracing::debug!(error = %e, "No dotenv file loaded");
            None
        }
    }
}

/// Whether a variable name looks like it holds a credential.
pub fn is_secret_name(name: &str) -> bool {
    let upper = name.to_ascii_uppercase();
    SECRET_MARKERS.iter().any(|marker| upper.contains(marker))
}

/// Presence and value of one variable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvEntry {
    pub name: String,
    pub value: Option<String>,
}

impl EnvEntry {
    pub fn is_found(&self) -> bool {
        self.value.is_some()
    }

    pub fn is_secret(&self) -> bool {
        is_secret_name(&self.name)
    }

    /// Value as printed in the report.
    pub fn display_value(&self, reveal: bool) -> String {
        match &self.value {
            None => "<unset>".to_string(),
            Some(value) if self.is_secret() && !reveal => {
                format!("<redacted, {} chars>", value.chars().count())
            }
            Some(value) => value.clone(),
        }
    }
}

/// Result of checking a set of variables.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvReport {
    pub entries: Vec<EnvEntry>,
}

impl EnvReport {
    /// Look up an entry by variable name.
    pub fn get(&self, name: &str) -> Option<&EnvEntry> {
        self.entries.iter().find(|e| e.name == name)
    }

    /// Number of variables that were not set.
    pub fn missing(&self) -> usize {
        self.entries.iter().filter(|e| !e.is_found()).count()
    }

    /// Render presence lines followed by value lines.
    pub fn render(&self, reveal: bool) -> String {
        let mut out = String::new();
        for entry in &self.entries {
            let status = if entry.is_found() { "found" } else { "not found" };
            let _ = writeln!(out, "{}: {}", entry.name, status);
        }
        for entry in &self.entries {
            let _ = writeln!(out, "{} = {}", entry.name, entry.display_value(reveal));
        }
        out
    }
}

/// Check `names` against an arbitrary variable lookup.
pub fn check_with<S, F>(names: &[S], lookup: F) -> EnvReport
where
    S: AsRef<str>,
    F: Fn(&str) -> Option<String>,
{
    let entries = names
        .iter()
        .map(|name| {
            let name = name.as_ref();
            EnvEntry {
                name: name.to_string(),
                value: lookup(name),
            }
        })
        .collect();
    EnvReport { entries }
}

/// Check `names` against the process environment.
pub fn check<S: AsRef<str>>(names: &[S]) -> EnvReport {
    check_with(names, |name| std::env::var(name).ok())
}
