//! Error types for the resolution engine.

use thiserror::Error;

/// Errors surfaced by the resolver.
///
/// Individual index lookups never appear here: a package the index cannot
/// resolve is normalized to "not found" by the provider and handled by
/// excising the package from tracking. The only per-run hard failure from
/// the core algorithm is a cyclic reason chain.
#[derive(Debug, Error)]
pub enum ResolverError {
    /// Reconstruction found a cyclic parent chain.
    #[error(transparent)]
    Graph(#[from] canuse_graph::GraphError),

    /// A lookup worker task panicked or was aborted.
    #[error("lookup task failed: {0}")]
    Task(#[from] tokio::task::JoinError),

    /// The HTTP client could not be constructed.
    #[error("failed to build index client: {0}")]
    Client(#[from] reqwest::Error),
}
