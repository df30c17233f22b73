//! # canuse-resolver
//!
//! Concurrent resolution of platform-porting blockers over a package
//! metadata index.
//!
//! Starting from a set of root packages, the resolver expands their
//! transitive runtime dependencies breadth-first against a
//! [`MetadataProvider`], records which parent introduced each non-portable
//! package, and reconstructs one shortest explanation chain per leaf
//! blocker. Version constraints are deliberately ignored: a project willing
//! to port is assumed willing to upgrade its dependencies, so only package
//! identity matters.
//!
//! The graph is not known in advance - every expansion is a network round
//! trip - so each BFS round fans out its index lookups concurrently with a
//! bounded width, then joins before touching any shared state.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use canuse_resolver::{resolve_blockers, OverrideSet, PyPiProvider, ProjectId};
//!
//! # async fn example() -> canuse_resolver::Result<()> {
//! let roots = vec![ProjectId::new("my-app")];
//! let provider = Arc::new(PyPiProvider::new()?);
//! let blockers = resolve_blockers(&roots, &OverrideSet::embedded(), provider).await?;
//! for chain in &blockers {
//!     println!("{chain}");
//! }
//! # Ok(())
//! # }
//! ```

mod error;
mod normalize;
mod overrides;
mod provider;
mod pypi;
mod scheduler;

pub use canuse_graph::{reconstruct_paths, BlockingChain, GraphError, ProjectId, ReasonGraph};
pub use error::ResolverError;
pub use normalize::just_name;
pub use overrides::OverrideSet;
pub use provider::MetadataProvider;
pub use pypi::PyPiProvider;
pub use scheduler::{build_reason_graph, resolve_blockers};

/// Result type for resolver operations.
pub type Result<T> = std::result::Result<T, ResolverError>;
