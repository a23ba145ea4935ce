//! Build order document model
//!
//! The serialized form mirrors these types directly: a root `projects`
//! sequence whose entries carry their location, coordinates and the
//! projects they immediately depend on.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::path::{Path, PathBuf};

use crate::error::BuildOrderError;

/// Coordinates identifying a project
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectIdentity {
    /// Group the project belongs to
    pub group_id: String,
    /// Project name within its group
    pub artifact_id: String,
}

impl ProjectIdentity {
    /// Create a new identity
    pub fn new(group_id: impl Into<String>, artifact_id: impl Into<String>) -> Self {
        Self {
            group_id: group_id.into(),
            artifact_id: artifact_id.into(),
        }
    }
}

impl fmt::Display for ProjectIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.group_id, self.artifact_id)
    }
}

/// Leaf reference to a project another project depends on
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DependencyRef {
    root_path: PathBuf,
    file_location: PathBuf,
    #[serde(flatten)]
    identity: ProjectIdentity,
}

impl DependencyRef {
    /// Create a new dependency reference
    pub fn new(root_path: PathBuf, file_location: PathBuf, identity: ProjectIdentity) -> Self {
        Self {
            root_path,
            file_location,
            identity,
        }
    }

    /// Workspace root the reference was recorded under
    pub fn root_path(&self) -> &Path {
        &self.root_path
    }

    /// Descriptor file of the referenced project
    pub fn file_location(&self) -> &Path {
        &self.file_location
    }

    /// Coordinates of the referenced project
    pub fn identity(&self) -> &ProjectIdentity {
        &self.identity
    }
}

/// One workspace project and its immediate dependencies
///
/// Dependencies keep discovery order: upstream projects first, then the
/// parent when it is part of the workspace. The same project may appear
/// twice when it is both.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectRef {
    root_path: PathBuf,
    file_location: PathBuf,
    #[serde(flatten)]
    identity: ProjectIdentity,
    dependencies: Vec<DependencyRef>,
}

impl ProjectRef {
    /// Create a new project reference with its complete dependency list
    pub fn new(
        root_path: PathBuf,
        file_location: PathBuf,
        identity: ProjectIdentity,
        dependencies: Vec<DependencyRef>,
    ) -> Self {
        Self {
            root_path,
            file_location,
            identity,
            dependencies,
        }
    }

    /// Workspace root the project was recorded under
    pub fn root_path(&self) -> &Path {
        &self.root_path
    }

    /// Descriptor file of the project
    pub fn file_location(&self) -> &Path {
        &self.file_location
    }

    /// Coordinates of the project
    pub fn identity(&self) -> &ProjectIdentity {
        &self.identity
    }

    /// Immediate dependencies, in discovery order
    pub fn dependencies(&self) -> &[DependencyRef] {
        &self.dependencies
    }
}

/// Ordered build description of a whole workspace
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildOrder {
    projects: Vec<ProjectRef>,
}

impl BuildOrder {
    /// Create a build order from projects already in build order
    pub fn new(projects: Vec<ProjectRef>) -> Self {
        Self { projects }
    }

    /// Projects in build order
    pub fn projects(&self) -> &[ProjectRef] {
        &self.projects
    }

    /// Number of projects
    pub fn len(&self) -> usize {
        self.projects.len()
    }

    /// Check if the build order is empty
    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    /// Check that every dependency is ordered before its dependent
    ///
    /// Returns the first project whose dependency (matched by identity)
    /// does not appear at an earlier index.
    pub fn verify_ordering(&self) -> Result<(), BuildOrderError> {
        let mut seen: HashSet<&ProjectIdentity> = HashSet::with_capacity(self.projects.len());

        for project in &self.projects {
            if let Some(dep) = project
                .dependencies
                .iter()
                .find(|dep| !seen.contains(&dep.identity))
            {
                return Err(BuildOrderError::OrderViolation {
                    project: project.identity.to_string(),
                    dependency: dep.identity.to_string(),
                });
            }
            seen.insert(&project.identity);
        }

        Ok(())
    }
}
