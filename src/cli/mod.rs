//! CLI 命令处理

pub mod artifact;
pub mod build;
pub mod deps;
pub mod output;
pub mod send;

pub use artifact::*;
pub use build::*;
pub use deps::*;
pub use output::*;
pub use send::*;
