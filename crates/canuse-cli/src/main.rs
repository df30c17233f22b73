//! canuse - determine whether your dependencies block a port to Python 3.
//!
//! This is the binary entry point. It handles command-line parsing, logging
//! initialization, and dispatch into the check flow; the resolution engine
//! itself lives in `canuse-resolver`.

use clap::Parser;
use canuse_cli::{check, cli, logger};
use miette::Result;

#[tokio::main]
async fn main() -> Result<()> {
    let args = cli::Cli::parse();
    logger::init_logger(args.verbose, args.quiet, args.no_color);

    let passed = check::execute(&args).await.map_err(miette::Report::new)?;
    if !passed {
        // Distinguished from clap's usage errors (2) and success (0).
        std::process::exit(3);
    }
    Ok(())
}
