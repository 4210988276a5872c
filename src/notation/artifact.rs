//! Publish artifacts and file-name splitting

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// A file a build publishes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublishArtifact {
    pub name: String,
    /// Empty when the file has none
    pub extension: String,
    #[serde(rename = "type")]
    pub artifact_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub classifier: Option<String>,
    pub file: PathBuf,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<DateTime<Utc>>,
    /// Tasks that produce the file
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub build_dependencies: Vec<String>,
}

/// Last modification time of `path`, if it exists
pub(crate) fn modified(path: &Path) -> Option<DateTime<Utc>> {
    fs::metadata(path)
        .and_then(|m| m.modified())
        .ok()
        .map(DateTime::<Utc>::from)
}

/// Name, classifier and extension recovered from an artifact file name.
///
/// With version `1.0`:
/// - `core-1.0` → name `core`
/// - `core-1.0-sources.jar` → name `core`, classifier `sources`, extension `jar`
/// - `core-1.0.jar` → name `core`, extension `jar`
/// - anything else splits on the last `.` (a leading dot doesn't count)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactFile {
    pub name: String,
    pub classifier: Option<String>,
    pub extension: Option<String>,
}

impl ArtifactFile {
    pub fn new(file_name: &str, version: Option<&str>) -> Self {
        let split = version
            .filter(|v| !v.is_empty())
            .and_then(|v| Self::split_on_version(file_name, v));

        let (name, classifier, extension) = split.unwrap_or_else(|| match file_name.rfind('.') {
            Some(sep) if sep > 0 => (
                file_name[..sep].to_string(),
                None,
                Some(file_name[sep + 1..].to_string()),
            ),
            _ => (file_name.to_string(), None, None),
        });

        Self {
            name,
            classifier: classifier.filter(|c| !c.is_empty()),
            extension: extension.filter(|e| !e.is_empty()),
        }
    }

    pub fn from_path(path: &Path, version: Option<&str>) -> Self {
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        Self::new(&file_name, version)
    }

    fn split_on_version(file_name: &str, version: &str) -> Option<(String, Option<String>, Option<String>)> {
        let marker = format!("-{}", version);
        let start = file_name.find(&marker)?;
        let end = start + marker.len();
        let name = file_name[..start].to_string();
        let rest = &file_name[end..];

        if rest.is_empty() {
            return Some((name, None, None));
        }

        if let Some(tail) = rest.strip_prefix('-') {
            let (classifier, extension) = match tail.rfind('.') {
                Some(dot) => (&tail[..dot], &tail[dot + 1..]),
                None => (tail, ""),
            };
            return Some((name, Some(classifier.to_string()), Some(extension.to_string())));
        }

        if file_name.rfind('.') == Some(end) {
            return Some((name, None, Some(rest[1..].to_string())));
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn split(file: &str, version: Option<&str>) -> (String, Option<String>, Option<String>) {
        let f = ArtifactFile::new(file, version);
        (f.name, f.classifier, f.extension)
    }

    fn s(v: &str) -> Option<String> {
        Some(v.to_string())
    }

    #[test]
    fn test_name_and_version_only() {
        assert_eq!(split("core-1.0", Some("1.0")), ("core".to_string(), None, None));
    }

    #[test]
    fn test_version_and_extension() {
        assert_eq!(split("core-1.0.jar", Some("1.0")), ("core".to_string(), None, s("jar")));
    }

    #[test]
    fn test_version_classifier_extension() {
        assert_eq!(
            split("core-1.0-sources.jar", Some("1.0")),
            ("core".to_string(), s("sources"), s("jar"))
        );
    }

    #[test]
    fn test_classifier_without_extension() {
        assert_eq!(split("core-1.0-sources", Some("1.0")), ("core".to_string(), s("sources"), None));
    }

    #[test]
    fn test_version_prefix_of_longer_version() {
        // "-1.0" matches but isn't followed by '-', end, or the final '.'
        assert_eq!(split("core-1.0.1.jar", Some("1.0")), ("core-1.0.1".to_string(), None, s("jar")));
    }

    #[test]
    fn test_no_version() {
        assert_eq!(split("core-1.0.jar", None), ("core-1.0".to_string(), None, s("jar")));
        assert_eq!(split("core.jar", Some("")), ("core".to_string(), None, s("jar")));
    }

    #[test]
    fn test_leading_dot_is_not_extension() {
        assert_eq!(split(".classpath", Some("1.0")), (".classpath".to_string(), None, None));
    }

    #[test]
    fn test_no_extension() {
        assert_eq!(split("README", None), ("README".to_string(), None, None));
    }

    #[test]
    fn test_from_path() {
        let f = ArtifactFile::from_path(Path::new("/build/libs/app-2.3.war"), Some("2.3"));
        assert_eq!(f.name, "app");
        assert_eq!(f.extension.as_deref(), Some("war"));
    }
}
