//! Resolved components as produced by dependency resolution

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use thiserror::Error;

/// Identifies a resolved component
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ComponentId {
    Module {
        group: String,
        module: String,
        version: String,
    },
    Project {
        /// Project path, `:` for the root project
        path: String,
    },
}

impl ComponentId {
    pub fn module(group: &str, module: &str, version: &str) -> Self {
        ComponentId::Module {
            group: group.to_string(),
            module: module.to_string(),
            version: version.to_string(),
        }
    }

    pub fn project(path: &str) -> Self {
        ComponentId::Project { path: path.to_string() }
    }

    pub fn display_name(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for ComponentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ComponentId::Module { group, module, version } => write!(f, "{}:{}:{}", group, module, version),
            ComponentId::Project { path } => write!(f, "project {}", path),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedComponent {
    pub id: ComponentId,
    #[serde(default)]
    pub dependencies: Vec<ComponentId>,
}

impl fmt::Display for ResolvedComponent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id)
    }
}

#[derive(Debug, Error)]
pub enum GraphError {
    #[error("root component {0} is not part of the resolution result")]
    MissingRoot(String),

    #[error("invalid resolution result: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Resolution result: a root plus every component reached from it
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolutionResult {
    pub root: ComponentId,
    pub components: Vec<ResolvedComponent>,
    #[serde(skip)]
    index: HashMap<ComponentId, usize>,
}

impl ResolutionResult {
    pub fn new(root: ComponentId, components: Vec<ResolvedComponent>) -> Self {
        let mut result = Self {
            root,
            components,
            index: HashMap::new(),
        };
        result.reindex();
        result
    }

    pub fn from_json(json: &str) -> Result<Self, GraphError> {
        let mut result: ResolutionResult = serde_json::from_str(json)?;
        result.reindex();
        Ok(result)
    }

    fn reindex(&mut self) {
        self.index = self
            .components
            .iter()
            .enumerate()
            .map(|(i, c)| (c.id.clone(), i))
            .collect();
    }

    pub fn component(&self, id: &ComponentId) -> Option<&ResolvedComponent> {
        self.index.get(id).map(|&i| &self.components[i])
    }

    pub fn root_component(&self) -> Result<&ResolvedComponent, GraphError> {
        self.component(&self.root)
            .ok_or_else(|| GraphError::MissingRoot(self.root.to_string()))
    }
}
