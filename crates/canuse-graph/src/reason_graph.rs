//! The reason graph: which parent introduced each tracked package.

use crate::ProjectId;
use rustc_hash::{FxHashMap, FxHashSet};

/// A mapping from each tracked package to the parent that introduced it.
///
/// A package with no parent is a *root* - it was supplied by the caller
/// rather than discovered through another package's dependency list.
///
/// The map enforces "first parent wins": once a package has an entry, later
/// discoveries through other parents are ignored. Combined with level-by-level
/// discovery this makes every recorded parent a shortest-path parent, so no
/// path-length comparison is ever needed at reconstruction time.
#[derive(Debug, Clone, Default)]
pub struct ReasonGraph {
    entries: FxHashMap<ProjectId, Option<ProjectId>>,
}

impl ReasonGraph {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a root package (no introducing parent).
    ///
    /// Like [`record`](Self::record), the first insertion wins.
    pub fn insert_root(&mut self, id: ProjectId) {
        self.entries.entry(id).or_insert(None);
    }

    /// Record that `parent`'s dependency list introduced `child`.
    ///
    /// Returns `true` if the edge was recorded, `false` if `child` already
    /// had an entry (in which case the existing entry is left untouched).
    pub fn record(&mut self, child: ProjectId, parent: ProjectId) -> bool {
        use std::collections::hash_map::Entry;
        match self.entries.entry(child) {
            Entry::Vacant(slot) => {
                slot.insert(Some(parent));
                true
            }
            Entry::Occupied(_) => false,
        }
    }

    /// Remove a package from tracking entirely.
    ///
    /// Used when a package turns out to be unknown to the index: leaving it
    /// in place would let an unresolvable package masquerade as a settled
    /// blocker.
    pub fn remove(&mut self, id: &ProjectId) -> bool {
        self.entries.remove(id).is_some()
    }

    /// The recorded parent of `id`, if `id` is tracked.
    ///
    /// `Some(None)` means `id` is a root.
    pub fn parent(&self, id: &ProjectId) -> Option<Option<&ProjectId>> {
        self.entries.get(id).map(Option::as_ref)
    }

    /// Whether `id` is tracked at all.
    pub fn contains(&self, id: &ProjectId) -> bool {
        self.entries.contains_key(id)
    }

    /// Packages that are not the recorded parent of anything else.
    ///
    /// These are the chain starting points: blockers nothing deeper depends
    /// on.
    pub fn leaf_blockers(&self) -> FxHashSet<&ProjectId> {
        let parents: FxHashSet<&ProjectId> =
            self.entries.values().filter_map(Option::as_ref).collect();
        self.entries
            .keys()
            .filter(|id| !parents.contains(*id))
            .collect()
    }

    /// Number of tracked packages.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether any packages are tracked.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over `(package, parent)` entries in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&ProjectId, Option<&ProjectId>)> {
        self.entries.iter().map(|(k, v)| (k, v.as_ref()))
    }
}

impl FromIterator<(ProjectId, Option<ProjectId>)> for ReasonGraph {
    fn from_iter<I: IntoIterator<Item = (ProjectId, Option<ProjectId>)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(name: &str) -> ProjectId {
        ProjectId::new(name)
    }

    #[test]
    fn first_parent_wins() {
        let mut graph = ReasonGraph::new();
        assert!(graph.record(id("child"), id("first")));
        assert!(!graph.record(id("child"), id("second")));
        assert_eq!(graph.parent(&id("child")), Some(Some(&id("first"))));
    }

    #[test]
    fn root_is_not_overwritten_by_edge() {
        let mut graph = ReasonGraph::new();
        graph.insert_root(id("a"));
        assert!(!graph.record(id("a"), id("b")));
        assert_eq!(graph.parent(&id("a")), Some(None));
    }

    #[test]
    fn leaf_blockers_excludes_parents() {
        let mut graph = ReasonGraph::new();
        graph.insert_root(id("a"));
        graph.record(id("b"), id("a"));
        graph.record(id("c"), id("b"));

        let leaves = graph.leaf_blockers();
        assert_eq!(leaves.len(), 1);
        assert!(leaves.contains(&id("c")));
    }

    #[test]
    fn lone_root_is_its_own_leaf() {
        let mut graph = ReasonGraph::new();
        graph.insert_root(id("a"));
        assert!(graph.leaf_blockers().contains(&id("a")));
    }

    #[test]
    fn remove_excises_entry() {
        let mut graph = ReasonGraph::new();
        graph.insert_root(id("a"));
        assert!(graph.remove(&id("a")));
        assert!(!graph.remove(&id("a")));
        assert!(graph.is_empty());
    }
}
