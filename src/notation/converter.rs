//! Artifact notations and the converters that understand them

use super::artifact::{modified, ArtifactFile, PublishArtifact};
use super::parser::NotationError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

/// An archive-producing task (jar, zip, war, ...)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArchiveTask {
    /// Task path, e.g. `:app:jar`
    pub task: String,
    pub base_name: String,
    #[serde(default)]
    pub appendix: Option<String>,
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub classifier: Option<String>,
    pub extension: String,
    pub destination_dir: PathBuf,
}

impl ArchiveTask {
    /// `base-appendix-version-classifier.extension`, skipping absent parts
    pub fn archive_name(&self) -> String {
        let parts: Vec<&str> = [
            Some(self.base_name.as_str()),
            self.appendix.as_deref(),
            self.version.as_deref(),
            self.classifier.as_deref(),
        ]
        .into_iter()
        .flatten()
        .filter(|p| !p.is_empty())
        .collect();

        let stem = parts.join("-");
        if self.extension.is_empty() {
            stem
        } else {
            format!("{}.{}", stem, self.extension)
        }
    }

    pub fn archive_path(&self) -> PathBuf {
        self.destination_dir.join(self.archive_name())
    }
}

/// Output files of a named task
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskOutput {
    pub task: String,
    pub files: Vec<PathBuf>,
}

/// Anything that can be turned into a `PublishArtifact`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Notation {
    ArchiveTask(ArchiveTask),
    File { path: PathBuf },
    Map { entries: BTreeMap<String, String> },
    TaskOutput(TaskOutput),
}

impl Notation {
    pub fn file(path: impl Into<PathBuf>) -> Self {
        Notation::File { path: path.into() }
    }

    pub fn map<K: Into<String>, V: Into<String>>(entries: impl IntoIterator<Item = (K, V)>) -> Self {
        Notation::Map {
            entries: entries.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }
}

impl fmt::Display for Notation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notation::ArchiveTask(task) => write!(f, "task '{}'", task.task),
            Notation::File { path } => write!(f, "{}", path.display()),
            Notation::Map { entries } => write!(f, "{:?}", entries),
            Notation::TaskOutput(output) => write!(f, "outputs of task '{}'", output.task),
        }
    }
}

/// Supported notation shown in diagnostics
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub description: String,
    pub examples: Vec<String>,
}

impl Candidate {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            examples: Vec::new(),
        }
    }

    pub fn example(mut self, example: impl Into<String>) -> Self {
        self.examples.push(example.into());
        self
    }
}

impl fmt::Display for Candidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.description)?;
        if !self.examples.is_empty() {
            let quoted: Vec<String> = self.examples.iter().map(|e| format!("'{}'", e)).collect();
            write!(f, ", for example {}", quoted.join(", "))?;
        }
        Ok(())
    }
}

/// Shared state converters may need
#[derive(Debug, Clone, Default)]
pub struct ParseContext {
    /// Version of the publishing module, used to split file names
    pub module_version: Option<String>,
}

/// Converts notations of one shape
pub trait NotationConverter: Send + Sync {
    fn describe(&self) -> Candidate;

    /// `Ok(None)` when the notation isn't this converter's shape
    fn convert(&self, notation: &Notation, ctx: &ParseContext) -> Result<Option<PublishArtifact>, NotationError>;
}

pub struct ArchiveTaskConverter;

impl NotationConverter for ArchiveTaskConverter {
    fn describe(&self) -> Candidate {
        Candidate::new("Instances of AbstractArchiveTask").example("jar")
    }

    fn convert(&self, notation: &Notation, _ctx: &ParseContext) -> Result<Option<PublishArtifact>, NotationError> {
        let Notation::ArchiveTask(task) = notation else {
            return Ok(None);
        };

        let name = match task.appendix.as_deref().filter(|a| !a.is_empty()) {
            Some(appendix) => format!("{}-{}", task.base_name, appendix),
            None => task.base_name.clone(),
        };
        let file = task.archive_path();

        Ok(Some(PublishArtifact {
            name,
            extension: task.extension.clone(),
            artifact_type: task.extension.clone(),
            classifier: task.classifier.clone().filter(|c| !c.is_empty()),
            date: modified(&file),
            file,
            build_dependencies: vec![task.task.clone()],
        }))
    }
}

pub struct FileConverter;

impl FileConverter {
    pub fn parse_file(&self, path: PathBuf, ctx: &ParseContext) -> PublishArtifact {
        let artifact_file = ArtifactFile::from_path(&path, ctx.module_version.as_deref());
        let extension = artifact_file.extension.unwrap_or_default();

        PublishArtifact {
            name: artifact_file.name,
            artifact_type: extension.clone(),
            extension,
            classifier: artifact_file.classifier,
            file: path,
            date: None,
            build_dependencies: Vec::new(),
        }
    }
}

impl NotationConverter for FileConverter {
    fn describe(&self) -> Candidate {
        Candidate::new("Instances of File")
    }

    fn convert(&self, notation: &Notation, ctx: &ParseContext) -> Result<Option<PublishArtifact>, NotationError> {
        match notation {
            Notation::File { path } => Ok(Some(self.parse_file(path.clone(), ctx))),
            _ => Ok(None),
        }
    }
}

/// `{file: path}` maps, handed on to the file converter
pub struct FileMapConverter {
    files: Arc<FileConverter>,
}

impl FileMapConverter {
    pub const FILE_KEY: &'static str = "file";

    pub fn new(files: Arc<FileConverter>) -> Self {
        Self { files }
    }
}

impl NotationConverter for FileMapConverter {
    fn describe(&self) -> Candidate {
        Candidate::new("Maps with 'file' key").example("[file: file('build/libs/app.jar')]")
    }

    fn convert(&self, notation: &Notation, ctx: &ParseContext) -> Result<Option<PublishArtifact>, NotationError> {
        let Notation::Map { entries } = notation else {
            return Ok(None);
        };

        let file = entries
            .get(Self::FILE_KEY)
            .filter(|f| !f.is_empty())
            .ok_or_else(|| NotationError::MissingKeys(vec![Self::FILE_KEY.to_string()]))?;

        Ok(Some(self.files.parse_file(PathBuf::from(file), ctx)))
    }
}

pub struct TaskOutputConverter;

impl NotationConverter for TaskOutputConverter {
    fn describe(&self) -> Candidate {
        Candidate::new("Task outputs with a single file")
    }

    fn convert(&self, notation: &Notation, _ctx: &ParseContext) -> Result<Option<PublishArtifact>, NotationError> {
        let Notation::TaskOutput(output) = notation else {
            return Ok(None);
        };

        let file = match output.files.as_slice() {
            [file] => file.clone(),
            files => {
                return Err(NotationError::NotSingleFile {
                    task: output.task.clone(),
                    count: files.len(),
                })
            }
        };

        let name = file
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let extension = match name.rfind('.') {
            Some(idx) if idx > 0 => name[idx + 1..].to_string(),
            _ => String::new(),
        };

        Ok(Some(PublishArtifact {
            name,
            extension,
            artifact_type: "task output".to_string(),
            classifier: None,
            date: modified(&file),
            file,
            build_dependencies: vec![output.task.clone()],
        }))
    }
}
