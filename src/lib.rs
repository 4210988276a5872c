//! Build Announce - 构建通知、artifact notation 解析和依赖树渲染

pub mod announce;
pub mod cli;
pub mod config;
pub mod graph;
pub mod notation;

pub use announce::{
    announce_build, AnnounceDispatcher, AnnounceError, Announcer, AnnouncerFactory, AnnouncerKind, BuildOutcome,
    IgnoreUnavailable, Platform, SendResult, Snarl, SnpMessage, UnknownAnnouncer,
};
pub use config::AnnounceConfig;
pub use graph::{render_tree, RenderableDependency, RenderableModuleResult, ResolutionResult};
pub use notation::{Notation, NotationError, NotationParser, PublishArtifact};
