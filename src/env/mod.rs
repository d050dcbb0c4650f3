//! Deployment environment checks.
//!
//! Loads a local dotenv file (if any) and reports which of the configured
//! variables are set. Secret-like values are redacted unless revealed
//! explicitly.

pub mod checker;

pub use checker::{check, check_with, is_secret_name, load_dotenv, EnvEntry, EnvReport};
