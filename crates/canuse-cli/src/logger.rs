//! Logging setup for the CLI.
//!
//! Library crates only emit `tracing` events; the subscriber is installed
//! here, once, before any work starts.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize the tracing subscriber.
///
/// Level selection, in order:
/// 1. `--verbose`: debug level for the canuse crates
/// 2. `--quiet`: errors only
/// 3. `RUST_LOG` environment variable
/// 4. default: warnings only (the normal report goes to stdout, not the log)
pub fn init_logger(verbose: bool, quiet: bool, no_color: bool) {
    let filter = if verbose {
        EnvFilter::new("canuse_graph=debug,canuse_resolver=debug,canuse_cli=debug,info")
    } else if quiet {
        EnvFilter::new("error")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .without_time()
                .with_ansi(!no_color)
                .with_writer(std::io::stderr),
        )
        .init();
}
