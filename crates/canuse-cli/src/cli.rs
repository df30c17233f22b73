//! Command-line interface definition.
//!
//! A single-purpose tool, so there are no subcommands: every invocation is a
//! check. At least one source of root projects must be supplied.

use clap::{ArgGroup, Parser};
use std::path::PathBuf;

/// Determine if a set of project dependencies will work with Python 3.
#[derive(Parser, Debug)]
#[command(
    name = "canuse",
    version,
    about = "Determine if a set of project dependencies will work with Python 3",
    group(
        ArgGroup::new("sources")
            .required(true)
            .multiple(true)
            .args(["requirements", "metadata", "projects"])
    )
)]
pub struct Cli {
    /// Path(s) to a pip requirements file (e.g. requirements.txt)
    #[arg(short, long, num_args = 1.., value_name = "PATH")]
    pub requirements: Vec<PathBuf>,

    /// Path(s) to a core-metadata file (e.g. PKG-INFO)
    #[arg(short, long, num_args = 1.., value_name = "PATH")]
    pub metadata: Vec<PathBuf>,

    /// Name(s) of projects to test for Python 3 support
    #[arg(short, long, num_args = 1.., value_name = "NAME")]
    pub projects: Vec<String>,

    /// Base URL of the package index JSON API
    #[arg(long, default_value = "https://pypi.org/pypi", value_name = "URL")]
    pub index_url: String,

    /// Verbose output (e.g. list compatibility overrides in effect)
    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}
