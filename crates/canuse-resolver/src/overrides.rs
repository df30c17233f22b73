//! Manual portability overrides.
//!
//! Some packages are portable in practice but say nothing about it in their
//! index metadata (a missing trove classifier, a rename where only the new
//! name is classified, or a module that moved into the standard library).
//! The override set short-circuits the portability check for those names.

use canuse_graph::ProjectId;
use once_cell::sync::Lazy;
use rustc_hash::FxHashMap;

static EMBEDDED: Lazy<FxHashMap<ProjectId, String>> = Lazy::new(|| {
    let raw: FxHashMap<String, String> = serde_json::from_str(include_str!("overrides.json"))
        .expect("embedded overrides.json is valid JSON");
    raw.into_iter()
        .map(|(name, reason)| (ProjectId::new(name), reason))
        .collect()
});

/// A static set of packages treated as portable regardless of what the
/// metadata index reports, each with a human-readable reason.
///
/// Loaded once per run; membership is checked before any index query.
#[derive(Debug, Clone, Default)]
pub struct OverrideSet {
    entries: FxHashMap<ProjectId, String>,
}

impl OverrideSet {
    /// An empty set (no overrides in effect).
    pub fn empty() -> Self {
        Self::default()
    }

    /// The override list shipped with the tool.
    pub fn embedded() -> Self {
        Self {
            entries: EMBEDDED.clone(),
        }
    }

    /// Whether `id` is covered by an override.
    pub fn contains(&self, id: &ProjectId) -> bool {
        self.entries.contains_key(id)
    }

    /// The reason recorded for `id`, if overridden.
    pub fn reason(&self, id: &ProjectId) -> Option<&str> {
        self.entries.get(id).map(String::as_str)
    }

    /// Iterate over `(package, reason)` pairs in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&ProjectId, &str)> {
        self.entries.iter().map(|(id, reason)| (id, reason.as_str()))
    }

    /// Number of overrides.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(ProjectId, String)> for OverrideSet {
    fn from_iter<I: IntoIterator<Item = (ProjectId, String)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_overrides_parse() {
        let set = OverrideSet::embedded();
        assert!(!set.is_empty());
        assert!(set.contains(&ProjectId::new("unittest2")));
    }

    #[test]
    fn embedded_names_are_canonical() {
        // Keys go through ProjectId, so lookups with any formatting succeed.
        let set = OverrideSet::embedded();
        assert!(set.contains(&ProjectId::new("zc.recipe.egg")));
    }

    #[test]
    fn reason_lookup() {
        let set: OverrideSet =
            [(ProjectId::new("foo"), "renamed upstream".to_string())].into_iter().collect();
        assert_eq!(set.reason(&ProjectId::new("foo")), Some("renamed upstream"));
        assert_eq!(set.reason(&ProjectId::new("bar")), None);
    }
}
