//! Composite notation parser - converters tried in order, first match wins

use super::artifact::PublishArtifact;
use super::converter::{
    ArchiveTaskConverter, Candidate, FileConverter, FileMapConverter, Notation, NotationConverter, ParseContext,
    TaskOutputConverter,
};
use std::sync::Arc;
use thiserror::Error;
use tracing::debug;

/// Errors from notation parsing
#[derive(Debug, Error)]
pub enum NotationError {
    /// No converter accepted the notation
    #[error("Cannot convert the provided notation to an object of type PublishArtifact: {notation}.\nThe following types/formats are supported:\n{}", format_candidates(.candidates))]
    Unsupported {
        notation: String,
        candidates: Vec<Candidate>,
    },

    #[error("Required keys {0:?} are missing from map.")]
    MissingKeys(Vec<String>),

    #[error("Expected task '{task}' to produce a single file, but it produced {count}.")]
    NotSingleFile { task: String, count: usize },
}

fn format_candidates(candidates: &[Candidate]) -> String {
    candidates
        .iter()
        .map(|c| format!("  - {}.", c))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Parses notations into `PublishArtifact`s
pub struct NotationParser {
    converters: Vec<Box<dyn NotationConverter>>,
    ctx: ParseContext,
}

impl NotationParser {
    /// Empty parser; add converters with `converter`
    pub fn builder(ctx: ParseContext) -> Self {
        Self {
            converters: Vec::new(),
            ctx,
        }
    }

    pub fn converter(mut self, converter: impl NotationConverter + 'static) -> Self {
        self.converters.push(Box::new(converter));
        self
    }

    /// Standard chain: archive task, file map, file, task output
    pub fn publish_artifacts(module_version: Option<String>) -> Self {
        let files = Arc::new(FileConverter);
        Self::builder(ParseContext { module_version })
            .converter(ArchiveTaskConverter)
            .converter(FileMapConverter::new(files.clone()))
            .converter(SharedFileConverter(files))
            .converter(TaskOutputConverter)
    }

    /// Every supported shape, in try order
    pub fn candidates(&self) -> Vec<Candidate> {
        self.converters.iter().map(|c| c.describe()).collect()
    }

    pub fn parse(&self, notation: &Notation) -> Result<PublishArtifact, NotationError> {
        for converter in &self.converters {
            if let Some(artifact) = converter.convert(notation, &self.ctx)? {
                debug!(converter = %converter.describe().description, artifact = %artifact.name, "Notation converted");
                return Ok(artifact);
            }
        }

        Err(NotationError::Unsupported {
            notation: notation.to_string(),
            candidates: self.candidates(),
        })
    }
}

/// File converter also used by the map converter
struct SharedFileConverter(Arc<FileConverter>);

impl NotationConverter for SharedFileConverter {
    fn describe(&self) -> Candidate {
        self.0.describe()
    }

    fn convert(&self, notation: &Notation, ctx: &ParseContext) -> Result<Option<PublishArtifact>, NotationError> {
        self.0.convert(notation, ctx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_standard_chain_order() {
        let parser = NotationParser::publish_artifacts(None);
        let descriptions: Vec<String> = parser.candidates().into_iter().map(|c| c.description).collect();
        assert_eq!(
            descriptions,
            vec![
                "Instances of AbstractArchiveTask",
                "Maps with 'file' key",
                "Instances of File",
                "Task outputs with a single file",
            ]
        );
    }

    #[test]
    fn test_parse_file() {
        let parser = NotationParser::publish_artifacts(Some("1.0".to_string()));
        let artifact = parser.parse(&Notation::file("build/libs/core-1.0.jar")).unwrap();
        assert_eq!(artifact.name, "core");
        assert_eq!(artifact.extension, "jar");
        assert_eq!(artifact.file, PathBuf::from("build/libs/core-1.0.jar"));
    }

    #[test]
    fn test_parse_map() {
        let parser = NotationParser::publish_artifacts(Some("1.0".to_string()));
        let artifact = parser.parse(&Notation::map([("file", "out/core-1.0-tests.jar")])).unwrap();
        assert_eq!(artifact.name, "core");
        assert_eq!(artifact.classifier.as_deref(), Some("tests"));
    }

    #[test]
    fn test_map_without_file_key_is_not_unsupported() {
        let parser = NotationParser::publish_artifacts(None);
        let err = parser.parse(&Notation::map([("path", "x.jar")])).unwrap_err();
        assert_eq!(err.to_string(), "Required keys [\"file\"] are missing from map.");
    }

    #[test]
    fn test_empty_chain_lists_no_candidates() {
        let parser = NotationParser::builder(ParseContext::default());
        let err = parser.parse(&Notation::file("a.jar")).unwrap_err();
        match err {
            NotationError::Unsupported { notation, candidates } => {
                assert_eq!(notation, "a.jar");
                assert!(candidates.is_empty());
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_unsupported_message_lists_candidates() {
        let parser = NotationParser::builder(ParseContext::default())
            .converter(ArchiveTaskConverter)
            .converter(TaskOutputConverter);
        let err = parser.parse(&Notation::file("a.jar")).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Cannot convert the provided notation to an object of type PublishArtifact: a.jar.\n\
             The following types/formats are supported:\n  \
             - Instances of AbstractArchiveTask, for example 'jar'.\n  \
             - Task outputs with a single file."
        );
    }

    #[test]
    fn test_first_match_wins() {
        struct Claims(&'static str);

        impl NotationConverter for Claims {
            fn describe(&self) -> Candidate {
                Candidate::new(self.0)
            }

            fn convert(&self, notation: &Notation, _ctx: &ParseContext) -> Result<Option<PublishArtifact>, NotationError> {
                Ok(Some(PublishArtifact {
                    name: self.0.to_string(),
                    extension: String::new(),
                    artifact_type: String::new(),
                    classifier: None,
                    file: PathBuf::from(notation.to_string()),
                    date: None,
                    build_dependencies: Vec::new(),
                }))
            }
        }

        let parser = NotationParser::builder(ParseContext::default())
            .converter(Claims("first"))
            .converter(Claims("second"));
        assert_eq!(parser.parse(&Notation::file("x")).unwrap().name, "first");
    }
}
