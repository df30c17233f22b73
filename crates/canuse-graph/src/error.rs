//! Error types for graph reconstruction.

use crate::ProjectId;
use thiserror::Error;

/// Errors produced while working with a reason graph.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    /// The parent chain starting at a leaf blocker revisits a package.
    ///
    /// Silently breaking the cycle could hide a real blocker, so the cycle is
    /// surfaced to the caller together with the partial chain walked so far.
    /// The graph itself is untouched; the caller may retry reconstruction
    /// with a cycle-breaking policy of its own.
    #[error("circular dependency chain: {}", format_chain(.chain))]
    CircularDependency {
        /// The packages visited before the repeat was detected, in walk order.
        chain: Vec<ProjectId>,
    },
}

fn format_chain(chain: &[ProjectId]) -> String {
    chain
        .iter()
        .map(ProjectId::as_str)
        .collect::<Vec<_>>()
        .join(" -> ")
}
