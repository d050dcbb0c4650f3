//! ABI extraction subsystem.
//!
//! # Data Flow
//! ```text
//! artifact JSON (compiler output)
//!     → extractor.rs (read, parse, take `abi`)
//!     → render as pretty JSON
//!     → overwrite output file
//! ```
//!
//! The output is a verbatim copy of the artifact's `abi` array; an artifact
//! without one is an error, never an empty or `null` file.

pub mod extractor;
pub mod types;

pub use extractor::{extract_abi, extract_to_file, read_artifact, render_abi, write_abi};
pub use types::{AbiError, AbiResult, AbiSummary};
