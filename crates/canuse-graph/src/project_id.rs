//! Canonical package identifiers.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// A canonical, lowercase package identifier.
///
/// Two `ProjectId`s are equal iff their canonical forms are equal. The
/// canonical form follows the package index's naming rules: ASCII lowercase,
/// with any run of `-`, `_`, or `.` separators folded to a single `-`.
/// Canonicalization is idempotent, so an id built from an already-canonical
/// string is unchanged.
///
/// Package indexes are forgiving about name formats (`Django`, `django` and
/// `zope.interface`, `zope-interface` name the same project), so all
/// comparisons and map keys in the graph go through this type.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProjectId(String);

impl ProjectId {
    /// Create an id from a raw name, canonicalizing it.
    pub fn new(name: impl AsRef<str>) -> Self {
        Self(canonicalize(name.as_ref()))
    }

    /// The canonical name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Canonicalize a package name: lowercase, separator runs folded to `-`.
fn canonicalize(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut pending_sep = false;
    for ch in name.trim().chars() {
        if matches!(ch, '-' | '_' | '.') {
            pending_sep = !out.is_empty();
        } else {
            if pending_sep {
                out.push('-');
                pending_sep = false;
            }
            out.extend(ch.to_lowercase());
        }
    }
    out
}

impl fmt::Display for ProjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ProjectId {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl Borrow<str> for ProjectId {
    fn borrow(&self) -> &str {
        self.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercases() {
        assert_eq!(ProjectId::new("Django").as_str(), "django");
    }

    #[test]
    fn folds_separator_runs() {
        assert_eq!(ProjectId::new("zope.interface").as_str(), "zope-interface");
        assert_eq!(ProjectId::new("foo__bar..baz").as_str(), "foo-bar-baz");
        assert_eq!(ProjectId::new("ruamel.yaml.clib").as_str(), "ruamel-yaml-clib");
    }

    #[test]
    fn canonicalization_is_idempotent() {
        let once = ProjectId::new("Zope._Interface");
        let twice = ProjectId::new(once.as_str());
        assert_eq!(once, twice);
    }

    #[test]
    fn trailing_separators_dropped() {
        assert_eq!(ProjectId::new("weird-").as_str(), "weird");
        assert_eq!(ProjectId::new("-weird").as_str(), "weird");
    }

    #[test]
    fn equality_ignores_source_formatting() {
        assert_eq!(ProjectId::new("Pillow"), ProjectId::new("pillow"));
        assert_eq!(ProjectId::new("python_dateutil"), ProjectId::new("python-dateutil"));
    }
}
