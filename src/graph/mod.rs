//! Dependency graph diagnostics

pub mod component;
pub mod render;
pub mod renderable;

pub use component::{ComponentId, GraphError, ResolutionResult, ResolvedComponent};
pub use render::render_tree;
pub use renderable::{RenderableDependency, RenderableModuleResult, UnresolvedDependency};
