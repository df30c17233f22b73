//! Normalizing raw dependency specifiers down to bare package names.

use canuse_graph::ProjectId;
use tracing::warn;

/// Extract the bare package identity from a raw dependency specifier.
///
/// A specifier may carry version operators (`requests>=2.0`), extras
/// (`celery[redis]`), environment markers (`tomli; python_version < "3.11"`)
/// or whitespace - everything from the first non-name character onward is
/// dropped and the remainder is canonicalized.
///
/// Returns `None` (and logs a warning) for specifiers that carry no
/// index-checkable identity: empty strings, option flags, editable installs,
/// URLs, and local file paths.
pub fn just_name(raw: &str) -> Option<ProjectId> {
    let spec = raw.trim();
    if spec.is_empty() {
        return None;
    }
    if spec.starts_with('-') {
        // Option lines such as `-e .` or `--index-url`; editable installs in
        // particular have no upstream identity to check.
        warn!(specifier = raw, "skipping option/editable specifier");
        return None;
    }
    if is_url_or_path(spec) {
        warn!(specifier = raw, "skipping URL/path specifier: not an index package");
        return None;
    }

    let name: String = spec
        .chars()
        .take_while(|c| c.is_alphanumeric() || matches!(c, '-' | '_' | '.'))
        .collect();
    if name.is_empty() {
        warn!(specifier = raw, "skipping specifier with no resolvable name");
        return None;
    }
    Some(ProjectId::new(name))
}

fn is_url_or_path(spec: &str) -> bool {
    spec.contains("://")
        || spec.starts_with("file:")
        || spec.starts_with('/')
        || spec.starts_with('.')
        || spec.starts_with('~')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_name_passes_through() {
        assert_eq!(just_name("requests"), Some(ProjectId::new("requests")));
    }

    #[test]
    fn version_operators_stripped() {
        assert_eq!(just_name("requests>=2.28,<3"), Some(ProjectId::new("requests")));
        assert_eq!(just_name("Django==4.2"), Some(ProjectId::new("django")));
        assert_eq!(just_name("numpy~=1.24"), Some(ProjectId::new("numpy")));
    }

    #[test]
    fn extras_stripped() {
        assert_eq!(just_name("celery[redis]"), Some(ProjectId::new("celery")));
    }

    #[test]
    fn environment_markers_stripped() {
        assert_eq!(
            just_name("tomli; python_version < \"3.11\""),
            Some(ProjectId::new("tomli"))
        );
    }

    #[test]
    fn name_is_canonicalized() {
        assert_eq!(just_name("Zope.Interface>=5"), Some(ProjectId::new("zope-interface")));
    }

    #[test]
    fn urls_and_paths_rejected() {
        assert_eq!(just_name("https://example.com/pkg.tar.gz"), None);
        assert_eq!(just_name("git+https://example.com/repo.git"), None);
        assert_eq!(just_name("file:../local-pkg"), None);
        assert_eq!(just_name("./vendored/pkg"), None);
        assert_eq!(just_name("/abs/path/pkg"), None);
    }

    #[test]
    fn editable_and_flags_rejected() {
        assert_eq!(just_name("-e ."), None);
        assert_eq!(just_name("--editable git+https://x/y.git"), None);
        assert_eq!(just_name("-r other-requirements.txt"), None);
    }

    #[test]
    fn empty_rejected() {
        assert_eq!(just_name(""), None);
        assert_eq!(just_name("   "), None);
        assert_eq!(just_name(">=1.0"), None);
    }
}
