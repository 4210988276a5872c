//! Artifact notation parsing
//!
//! Archive tasks, files, `{file: ...}` maps and task outputs all describe a
//! publishable artifact. `NotationParser` runs its converters in order and
//! returns the first result; when none applies the error lists every
//! supported shape.

pub mod artifact;
pub mod converter;
pub mod parser;

pub use artifact::{ArtifactFile, PublishArtifact};
pub use converter::{
    ArchiveTask, ArchiveTaskConverter, Candidate, FileConverter, FileMapConverter, Notation, NotationConverter,
    ParseContext, TaskOutput, TaskOutputConverter,
};
pub use parser::{NotationError, NotationParser};
