//! Chain reconstruction: walking parent pointers back to a root.

use crate::{GraphError, ProjectId, ReasonGraph, Result};
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One path through the reason graph, from a leaf blocker up to a root.
///
/// Ordered blocker-first, root-last: `(blocker, ..., root)` reads as "blocker
/// is pulled in transitively by each subsequent entry". A chain of length one
/// is a root that is itself a blocker.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct BlockingChain {
    path: Vec<ProjectId>,
}

impl BlockingChain {
    /// Build a chain from a blocker-first path.
    ///
    /// Panics if `path` is empty; reconstruction never produces an empty
    /// walk.
    pub fn new(path: Vec<ProjectId>) -> Self {
        assert!(!path.is_empty(), "a blocking chain has at least one entry");
        Self { path }
    }

    /// The leaf blocker (first entry).
    pub fn blocker(&self) -> &ProjectId {
        &self.path[0]
    }

    /// The root package (last entry).
    pub fn root(&self) -> &ProjectId {
        self.path.last().expect("chain is non-empty")
    }

    /// The full path, blocker-first.
    pub fn path(&self) -> &[ProjectId] {
        &self.path
    }

    /// Number of packages in the chain.
    pub fn len(&self) -> usize {
        self.path.len()
    }

    /// Always false; kept for the conventional pair with [`len`](Self::len).
    pub fn is_empty(&self) -> bool {
        false
    }
}

impl fmt::Display for BlockingChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.path.iter().map(ProjectId::as_str).collect();
        f.write_str(&names.join(" <- "))
    }
}

/// Reconstruct the set of blocking chains described by a reason graph.
///
/// For every leaf blocker the parent pointers are walked until a root
/// (parentless entry) is reached, yielding one blocker-first chain per leaf.
/// Structurally identical chains collapse, so the result is a set.
///
/// # Errors
///
/// Returns [`GraphError::CircularDependency`] if a parent chain revisits a
/// package already on the current path. Termination is only guaranteed for
/// acyclic parent chains; a cycle is a caller-visible failure, not something
/// silently truncated.
pub fn reconstruct_paths(graph: &ReasonGraph) -> Result<FxHashSet<BlockingChain>> {
    let mut chains = FxHashSet::default();
    for blocker in graph.leaf_blockers() {
        let mut path = vec![blocker.clone()];
        let mut on_path: FxHashSet<&ProjectId> = FxHashSet::default();
        on_path.insert(blocker);

        let mut parent = graph.parent(blocker).flatten();
        while let Some(next) = parent {
            if on_path.contains(next) {
                return Err(GraphError::CircularDependency { chain: path });
            }
            path.push(next.clone());
            on_path.insert(next);
            // A parent may itself be untracked if the graph was hand-built;
            // treat that the same as reaching a root.
            parent = graph.parent(next).flatten();
        }
        chains.insert(BlockingChain::new(path));
    }
    Ok(chains)
}
