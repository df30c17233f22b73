//! # canuse-cli
//!
//! Command-line front end for the blocker resolver: turns requirements
//! files, core-metadata files, and bare project names into a root set,
//! resolves their transitive blockers against the package index, and renders
//! the result as human-readable dependency chains.

pub mod check;
pub mod cli;
pub mod error;
pub mod logger;
pub mod projects;
pub mod render;

pub use error::{CliError, Result};
