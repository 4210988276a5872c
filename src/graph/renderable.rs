//! Renderable dependency nodes

use super::component::{ComponentId, ResolutionResult, ResolvedComponent};
use std::fmt;

/// A node in a rendered dependency tree
pub trait RenderableDependency {
    fn id(&self) -> &ComponentId;

    fn name(&self) -> String {
        self.id().display_name()
    }

    fn description(&self) -> Option<String> {
        None
    }

    fn is_resolvable(&self) -> bool {
        true
    }

    fn children(&self) -> Vec<Box<dyn RenderableDependency + '_>>;
}

/// A resolved component, with children looked up in its resolution result
pub struct RenderableModuleResult<'a> {
    component: &'a ResolvedComponent,
    result: &'a ResolutionResult,
}

impl<'a> RenderableModuleResult<'a> {
    pub fn new(component: &'a ResolvedComponent, result: &'a ResolutionResult) -> Self {
        Self { component, result }
    }

    /// Node for the result's root component
    pub fn root(result: &'a ResolutionResult) -> Result<Self, super::component::GraphError> {
        Ok(Self::new(result.root_component()?, result))
    }
}

impl RenderableDependency for RenderableModuleResult<'_> {
    fn id(&self) -> &ComponentId {
        &self.component.id
    }

    fn children(&self) -> Vec<Box<dyn RenderableDependency + '_>> {
        self.component
            .dependencies
            .iter()
            .map(|dep| match self.result.component(dep) {
                Some(component) => {
                    Box::new(RenderableModuleResult::new(component, self.result)) as Box<dyn RenderableDependency + '_>
                }
                None => Box::new(UnresolvedDependency { id: dep }),
            })
            .collect()
    }
}

impl fmt::Display for RenderableModuleResult<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.component)
    }
}

/// Dependency that points at a component missing from the result
pub struct UnresolvedDependency<'a> {
    id: &'a ComponentId,
}

impl RenderableDependency for UnresolvedDependency<'_> {
    fn id(&self) -> &ComponentId {
        self.id
    }

    fn is_resolvable(&self) -> bool {
        false
    }

    fn children(&self) -> Vec<Box<dyn RenderableDependency + '_>> {
        Vec::new()
    }
}
