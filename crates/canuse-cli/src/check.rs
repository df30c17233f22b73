//! The check flow: ingest roots, resolve blockers, render the report.

use crate::cli::Cli;
use crate::error::Result;
use crate::{projects, render};
use canuse_resolver::{resolve_blockers, OverrideSet, ProjectId, PyPiProvider};
use owo_colors::OwoColorize;
use std::sync::Arc;
use tracing::{debug, info};

/// Run a full check for the given arguments.
///
/// Returns `true` when nothing blocks the transition; the caller turns that
/// into a process exit status.
pub async fn execute(args: &Cli) -> Result<bool> {
    let mut roots: Vec<ProjectId> = Vec::new();
    roots.extend(projects::from_requirements(&args.requirements)?);
    roots.extend(projects::from_metadata(&args.metadata)?);
    roots.extend(args.projects.iter().map(ProjectId::new));

    let overrides = OverrideSet::embedded();
    if args.verbose {
        info!(count = overrides.len(), "compatibility overrides in effect");
        let mut entries: Vec<(&ProjectId, &str)> = overrides.iter().collect();
        entries.sort();
        for (id, reason) in entries {
            debug!(package = %id, reason, "override");
        }
    }

    info!(count = roots.len(), "top-level projects to check");
    println!("Finding and checking dependencies ...");

    let provider = Arc::new(PyPiProvider::with_index_url(args.index_url.as_str())?);
    let blockers = resolve_blockers(&roots, &overrides, provider).await?;

    let passed = blockers.is_empty();
    let use_color = !args.no_color;

    println!();
    for line in render::summary(&blockers) {
        if !use_color {
            println!("{line}");
        } else if passed {
            println!("{}", line.green());
        } else {
            println!("{}", line.red());
        }
    }

    let lines = render::chain_lines(&blockers);
    if !lines.is_empty() {
        println!();
        for line in lines {
            println!("  {line}");
        }
    }

    Ok(passed)
}
