//! The metadata index seam.

use async_trait::async_trait;
use canuse_graph::ProjectId;

/// Source of per-package metadata: runtime dependencies and portability.
///
/// Both operations are expected to be network-bound and are therefore worth
/// memoizing inside the implementation; the resolver may ask about the same
/// package from several contexts within one run.
///
/// Transport failures are the implementation's responsibility: a lookup that
/// cannot be completed after whatever retry policy the implementation
/// applies must be reported as "not found" (`None`), never as an error. The
/// resolver recovers from "not found" locally; it has no channel for raw
/// transport faults.
#[async_trait]
pub trait MetadataProvider: Send + Sync {
    /// The immediate *runtime* dependencies of `id`.
    ///
    /// `Some(vec![])` is a real answer (a package with no dependencies);
    /// `None` means the index does not know the package.
    async fn lookup_dependencies(&self, id: &ProjectId) -> Option<Vec<ProjectId>>;

    /// Whether `id` already supports the target platform version.
    ///
    /// Unknown packages are portable: absence of evidence is not evidence of
    /// blocking.
    async fn is_portable(&self, id: &ProjectId) -> bool;
}
