//! Breadth-first frontier expansion of the reason graph.
//!
//! One coordinating task drives successive BFS rounds. Within a round the
//! index lookups fan out concurrently under a bounded width; the round joins
//! completely before any shared state is touched. The [`ReasonGraph`] and
//! the evaluated set are owned exclusively by the coordinator - workers
//! return results, they never write shared state - which makes the
//! "first parent wins" rule deterministic: ties are broken by round and
//! frontier order, never by which network call happens to finish first.

use crate::{MetadataProvider, OverrideSet, Result};
use canuse_graph::{reconstruct_paths, BlockingChain, ProjectId, ReasonGraph};
use rustc_hash::{FxHashMap, FxHashSet};
use std::sync::Arc;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use tracing::{debug, info, warn};

/// Outbound request concurrency per round.
///
/// Sized to the host's CPU count with a floor of two. This bounds pressure
/// on the remote index, not local CPU work.
fn concurrency_width() -> usize {
    num_cpus::get().max(2)
}

/// Find every package blocking the roots from the target platform, explained
/// as one shortest chain per leaf blocker.
///
/// Version constraints are ignored throughout: if a project is porting, it
/// is assumed willing to move to current releases of its dependencies. Only
/// runtime dependencies are followed.
///
/// # Errors
///
/// [`ResolverError::Graph`](crate::ResolverError::Graph) if reconstruction
/// hits a cyclic parent chain (graph building itself cannot produce one, but
/// the failure is kept caller-visible rather than silently broken), and
/// [`ResolverError::Task`](crate::ResolverError::Task) if a lookup worker
/// panics.
pub async fn resolve_blockers(
    roots: &[ProjectId],
    overrides: &OverrideSet,
    provider: Arc<dyn MetadataProvider>,
) -> Result<FxHashSet<BlockingChain>> {
    let graph = build_reason_graph(roots, overrides, provider).await?;
    info!(tracked = graph.len(), "reason graph complete");
    Ok(reconstruct_paths(&graph)?)
}

/// Build the reason graph for `roots` without reconstructing chains.
///
/// Exposed separately so a caller that hits
/// [`GraphError::CircularDependency`](canuse_graph::GraphError) can keep the
/// graph and retry reconstruction under a policy of its own.
pub async fn build_reason_graph(
    roots: &[ProjectId],
    overrides: &OverrideSet,
    provider: Arc<dyn MetadataProvider>,
) -> Result<ReasonGraph> {
    let semaphore = Arc::new(Semaphore::new(concurrency_width()));

    let mut graph = ReasonGraph::new();
    let mut evaluated: FxHashSet<ProjectId> = FxHashSet::default();
    let mut frontier: Vec<ProjectId> = Vec::new();

    // Seed: dedupe the roots and drop any that are already portable, by
    // override or by index metadata. What remains forms the initial frontier.
    for root in roots {
        if evaluated.contains(root) {
            continue;
        }
        evaluated.insert(root.clone());
        if let Some(reason) = overrides.reason(root) {
            info!(package = %root, reason, "root covered by override");
            continue;
        }
        if provider.is_portable(root).await {
            debug!(package = %root, "root already portable");
            continue;
        }
        info!(package = %root, "checking top-level package");
        graph.insert_root(root.clone());
        frontier.push(root.clone());
    }

    while !frontier.is_empty() {
        debug!(round_size = frontier.len(), "expanding frontier");

        // Fan out the round's dependency lookups, then join before touching
        // the graph.
        let mut lookups = JoinSet::new();
        for parent in &frontier {
            let parent = parent.clone();
            let provider = Arc::clone(&provider);
            let permit = Arc::clone(&semaphore);
            lookups.spawn(async move {
                let _permit = permit.acquire().await.expect("semaphore closed unexpectedly");
                let deps = provider.lookup_dependencies(&parent).await;
                (parent, deps)
            });
        }
        let mut results: FxHashMap<ProjectId, Option<Vec<ProjectId>>> = FxHashMap::default();
        while let Some(joined) = lookups.join_next().await {
            let (parent, deps) = joined?;
            results.insert(parent, deps);
        }

        // Fold in frontier order. A parent the index does not know is
        // excised from both the graph and the evaluated set: leaving it
        // settled could mask real blockers reachable only through it.
        let mut discovered: Vec<(ProjectId, ProjectId)> = Vec::new();
        let mut seen_this_round: FxHashSet<ProjectId> = FxHashSet::default();
        for parent in frontier.drain(..) {
            let Some(children) = results.remove(&parent).flatten() else {
                warn!(package = %parent, "not found in index; dropping from tracking");
                graph.remove(&parent);
                evaluated.remove(&parent);
                continue;
            };
            debug!(package = %parent, count = children.len(), "dependencies located");
            for child in children {
                if evaluated.contains(&child) || seen_this_round.contains(&child) {
                    continue;
                }
                seen_this_round.insert(child.clone());
                discovered.push((child, parent.clone()));
            }
        }

        // Portability checks for the newly discovered children, as a second
        // bounded fan-out. Overrides answer without an index call.
        let mut checks = JoinSet::new();
        let mut portability: FxHashMap<ProjectId, bool> = FxHashMap::default();
        for (child, _) in &discovered {
            if overrides.contains(child) {
                debug!(package = %child, "covered by override");
                portability.insert(child.clone(), true);
                continue;
            }
            let child = child.clone();
            let provider = Arc::clone(&provider);
            let permit = Arc::clone(&semaphore);
            checks.spawn(async move {
                let _permit = permit.acquire().await.expect("semaphore closed unexpectedly");
                let portable = provider.is_portable(&child).await;
                (child, portable)
            });
        }
        while let Some(joined) = checks.join_next().await {
            let (child, portable) = joined?;
            portability.insert(child, portable);
        }

        // Merge. A child counts as evaluated only now that its portability
        // check has completed, so no later round can treat it as new.
        for (child, parent) in discovered {
            let portable = portability.get(&child).copied().unwrap_or(true);
            evaluated.insert(child.clone());
            if portable {
                continue;
            }
            if graph.record(child.clone(), parent) {
                frontier.push(child);
            }
        }
    }

    Ok(graph)
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    /// In-memory index stub. Packages registered via [`package`] are known;
    /// everything else is "not found". Known packages block unless listed
    /// portable.
    #[derive(Default)]
    struct StubProvider {
        deps: FxHashMap<ProjectId, Vec<ProjectId>>,
        portable: FxHashSet<ProjectId>,
        vanished: FxHashSet<ProjectId>,
    }

    impl StubProvider {
        fn package(mut self, name: &str, deps: &[&str]) -> Self {
            self.deps
                .insert(ProjectId::new(name), deps.iter().map(ProjectId::new).collect());
            self
        }

        fn portable(mut self, name: &str) -> Self {
            self.portable.insert(ProjectId::new(name));
            self
        }

        /// A name whose dependency lookup fails while the portability check
        /// still reports it as a blocker, mimicking a package that vanishes
        /// from the index mid-run.
        fn vanished(mut self, name: &str) -> Self {
            self.vanished.insert(ProjectId::new(name));
            self
        }
    }

    #[async_trait]
    impl MetadataProvider for StubProvider {
        async fn lookup_dependencies(&self, id: &ProjectId) -> Option<Vec<ProjectId>> {
            if self.vanished.contains(id) {
                return None;
            }
            self.deps.get(id).cloned()
        }

        async fn is_portable(&self, id: &ProjectId) -> bool {
            // Unknown packages are portable; known ones block unless listed.
            let known = self.deps.contains_key(id) || self.vanished.contains(id);
            !known || self.portable.contains(id)
        }
    }

    fn id(name: &str) -> ProjectId {
        ProjectId::new(name)
    }

    async fn resolve(
        roots: &[&str],
        overrides: &OverrideSet,
        provider: StubProvider,
    ) -> FxHashSet<BlockingChain> {
        let roots: Vec<ProjectId> = roots.iter().map(ProjectId::new).collect();
        resolve_blockers(&roots, overrides, Arc::new(provider))
            .await
            .expect("resolution succeeds")
    }

    fn paths(chains: &FxHashSet<BlockingChain>) -> FxHashSet<Vec<ProjectId>> {
        chains.iter().map(|c| c.path().to_vec()).collect()
    }

    #[tokio::test]
    async fn linear_chain_is_reported_once() {
        let stub = StubProvider::default()
            .package("a", &["b"])
            .package("b", &["c"])
            .package("c", &[]);
        let chains = resolve(&["a"], &OverrideSet::empty(), stub).await;
        assert_eq!(paths(&chains), [vec![id("c"), id("b"), id("a")]].into_iter().collect());
    }

    #[tokio::test]
    async fn portable_dependencies_are_not_expanded() {
        let stub = StubProvider::default()
            .package("a", &["b"])
            .package("b", &["c"])
            .portable("b");
        let chains = resolve(&["a"], &OverrideSet::empty(), stub).await;
        // b is portable, so a is a blocker with no blocking dependencies.
        assert_eq!(paths(&chains), [vec![id("a")]].into_iter().collect());
    }

    #[tokio::test]
    async fn fully_portable_roots_yield_no_blockers() {
        let stub = StubProvider::default().package("a", &["b"]).portable("a");
        let chains = resolve(&["a"], &OverrideSet::empty(), stub).await;
        assert!(chains.is_empty());
    }

    #[tokio::test]
    async fn unknown_root_is_treated_as_portable() {
        let chains = resolve(&["ghost"], &OverrideSet::empty(), StubProvider::default()).await;
        assert!(chains.is_empty());
    }

    #[tokio::test]
    async fn dependency_cycle_terminates() {
        let stub = StubProvider::default().package("a", &["b"]).package("b", &["a"]);
        let chains = resolve(&["a"], &OverrideSet::empty(), stub).await;
        // a is re-discovered through b but already evaluated, so expansion
        // stops; the reason graph stays acyclic.
        assert_eq!(paths(&chains), [vec![id("b"), id("a")]].into_iter().collect());
    }

    #[tokio::test]
    async fn not_found_package_is_excised_without_blocking_siblings() {
        // r depends on x (vanishes from the index) and y (a real blocker).
        let stub = StubProvider::default()
            .package("r", &["x", "y"])
            .package("y", &[])
            .vanished("x");
        let chains = resolve(&["r"], &OverrideSet::empty(), stub).await;
        let all: Vec<ProjectId> = chains.iter().flat_map(|c| c.path().to_vec()).collect();
        assert!(!all.contains(&id("x")));
        assert!(paths(&chains).contains(&vec![id("y"), id("r")]));
    }

    #[tokio::test]
    async fn first_parent_recorded_is_bfs_shortest() {
        // shared is reachable in two hops via a, and in three via b -> c.
        let stub = StubProvider::default()
            .package("root", &["a", "b"])
            .package("a", &["shared"])
            .package("b", &["c"])
            .package("c", &["shared"])
            .package("shared", &[]);
        let chains = resolve(&["root"], &OverrideSet::empty(), stub).await;
        assert!(paths(&chains).contains(&vec![id("shared"), id("a"), id("root")]));
        assert!(paths(&chains).contains(&vec![id("c"), id("b"), id("root")]));
        assert_eq!(chains.len(), 2);
    }

    #[tokio::test]
    async fn duplicate_roots_collapse() {
        let stub = StubProvider::default().package("a", &[]);
        let chains = resolve(&["a", "A", "a"], &OverrideSet::empty(), stub).await;
        assert_eq!(chains.len(), 1);
    }

    #[tokio::test]
    async fn overrides_short_circuit_dependencies() {
        let stub = StubProvider::default().package("app", &["pbr"]).package("pbr", &[]);
        let overrides: OverrideSet =
            [(id("pbr"), "missing trove classifier".to_string())].into_iter().collect();
        let chains = resolve(&["app"], &overrides, stub).await;
        assert_eq!(paths(&chains), [vec![id("app")]].into_iter().collect());
    }

    #[tokio::test]
    async fn overrides_short_circuit_roots() {
        let stub = StubProvider::default().package("pbr", &[]);
        let overrides: OverrideSet =
            [(id("pbr"), "missing trove classifier".to_string())].into_iter().collect();
        let chains = resolve(&["pbr"], &overrides, stub).await;
        assert!(chains.is_empty());
    }

    #[tokio::test]
    async fn resolution_is_idempotent() {
        fn stub() -> StubProvider {
            StubProvider::default()
                .package("a", &["b", "c"])
                .package("b", &["d"])
                .package("c", &["d"])
                .package("d", &[])
        }
        let first = resolve(&["a"], &OverrideSet::empty(), stub()).await;
        let second = resolve(&["a"], &OverrideSet::empty(), stub()).await;
        assert_eq!(first, second);
    }
}
