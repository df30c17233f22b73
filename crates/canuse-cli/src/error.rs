//! Error handling at the CLI boundary.
//!
//! Library errors are converted to miette diagnostics in `main` for
//! readable terminal reporting.

use miette::Diagnostic;
use std::path::PathBuf;
use thiserror::Error;

/// Top-level CLI error type.
#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    /// A requirements or metadata file could not be read.
    #[error("failed to read {}", .path.display())]
    #[diagnostic(
        code(canuse::file_read),
        help("check that the path exists and is readable")
    )]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Resolution failed; the only non-recoverable case is a cyclic reason
    /// chain, which is reported rather than silently broken.
    #[error(transparent)]
    #[diagnostic(code(canuse::resolve))]
    Resolver(#[from] canuse_resolver::ResolverError),
}

/// Result type for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;
