//! Turning requirement and metadata files into root project lists.

use crate::error::{CliError, Result};
use canuse_resolver::{just_name, ProjectId};
use std::path::PathBuf;

/// Extract root projects from pip-style requirements files.
///
/// Comments and line continuations are stripped; lines that carry no
/// index-checkable identity (options, editable installs, URLs, paths) are
/// skipped with a warning rather than failing the run.
pub fn from_requirements(paths: &[PathBuf]) -> Result<Vec<ProjectId>> {
    let mut roots = Vec::new();
    for path in paths {
        let text = std::fs::read_to_string(path).map_err(|source| CliError::FileRead {
            path: path.clone(),
            source,
        })?;
        roots.extend(parse_requirements(&text));
    }
    Ok(roots)
}

/// Extract root projects from core-metadata files (PKG-INFO style).
///
/// Only the header block is scanned; each `Requires-Dist` entry is reduced
/// to its bare name.
pub fn from_metadata(paths: &[PathBuf]) -> Result<Vec<ProjectId>> {
    let mut roots = Vec::new();
    for path in paths {
        let text = std::fs::read_to_string(path).map_err(|source| CliError::FileRead {
            path: path.clone(),
            source,
        })?;
        roots.extend(parse_metadata(&text));
    }
    Ok(roots)
}

fn parse_requirements(text: &str) -> Vec<ProjectId> {
    // Join continuation lines before splitting.
    let joined = text.replace("\\\r\n", " ").replace("\\\n", " ");
    let mut roots = Vec::new();
    for line in joined.lines() {
        let line = line.split('#').next().unwrap_or_default().trim();
        if line.is_empty() {
            continue;
        }
        if let Some(id) = just_name(line) {
            roots.push(id);
        }
    }
    roots
}

fn parse_metadata(text: &str) -> Vec<ProjectId> {
    const HEADER: &str = "requires-dist:";
    let mut roots = Vec::new();
    for line in text.lines() {
        // The header block ends at the first blank line; the long
        // description that follows may contain arbitrary text.
        if line.trim().is_empty() {
            break;
        }
        if let Some(prefix) = line.get(..HEADER.len()) {
            if prefix.eq_ignore_ascii_case(HEADER) {
                if let Some(id) = just_name(line[HEADER.len()..].trim()) {
                    roots.push(id);
                }
            }
        }
    }
    roots
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn id(name: &str) -> ProjectId {
        ProjectId::new(name)
    }

    #[test]
    fn requirements_basics() {
        let roots = parse_requirements("requests>=2.28\nDjango==4.2\n");
        assert_eq!(roots, vec![id("requests"), id("django")]);
    }

    #[test]
    fn requirements_comments_and_blanks_skipped() {
        let roots = parse_requirements("# build deps\n\nrequests  # http client\n");
        assert_eq!(roots, vec![id("requests")]);
    }

    #[test]
    fn requirements_line_continuations_joined() {
        let roots = parse_requirements("requests \\\n    >=2.28\nflask\n");
        assert_eq!(roots, vec![id("requests"), id("flask")]);
    }

    #[test]
    fn requirements_editable_and_urls_skipped() {
        let roots = parse_requirements(
            "-e ./local\nhttps://example.com/pkg.tar.gz\n-r more.txt\nnumpy\n",
        );
        assert_eq!(roots, vec![id("numpy")]);
    }

    #[test]
    fn metadata_requires_dist_extracted() {
        let text = "Metadata-Version: 2.1\n\
                    Name: example\n\
                    Requires-Dist: requests (>=2.28)\n\
                    requires-dist: zope.interface\n\
                    \n\
                    Requires-Dist: not-a-header-anymore\n";
        let roots = parse_metadata(text);
        assert_eq!(roots, vec![id("requests"), id("zope-interface")]);
    }

    #[test]
    fn missing_file_is_an_error() {
        let err = from_requirements(&[PathBuf::from("/no/such/requirements.txt")]).unwrap_err();
        assert!(matches!(err, CliError::FileRead { .. }));
    }

    #[test]
    fn reads_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "requests>=2.0").unwrap();
        writeln!(file, "celery[redis]").unwrap();
        let roots = from_requirements(&[file.path().to_path_buf()]).unwrap();
        assert_eq!(roots, vec![id("requests"), id("celery")]);
    }
}
