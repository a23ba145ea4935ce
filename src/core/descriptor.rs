//! Project descriptor (project.toml) parsing
//!
//! A descriptor names one project, its optional parent, the modules it
//! aggregates and the projects it depends on:
//!
//! ```toml
//! modules = ["core", "app"]
//!
//! [project]
//! group-id = "org.acme"
//! artifact-id = "acme-parent"
//!
//! [parent]
//! group-id = "org.acme"
//! artifact-id = "acme-root"
//!
//! [[dependencies]]
//! group-id = "org.acme"
//! artifact-id = "acme-api"
//! ```

use serde::{Deserialize, Serialize};

use crate::config::defaults::DEFAULT_PARENT_PATH;
use crate::core::model::ProjectIdentity;

/// A parsed project descriptor
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "kebab-case")]
pub struct ProjectDescriptor {
    /// Child module paths, relative to this descriptor's directory
    #[serde(default)]
    pub modules: Vec<String>,

    /// Project coordinates
    pub project: ProjectSection,

    /// Parent project reference
    #[serde(default)]
    pub parent: Option<ParentSection>,

    /// Projects this project depends on
    #[serde(default)]
    pub dependencies: Vec<DependencySection>,
}

/// The `[project]` table
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "kebab-case")]
pub struct ProjectSection {
    /// Group id; inherited from `[parent]` when omitted
    #[serde(default)]
    pub group_id: Option<String>,

    /// Artifact id
    pub artifact_id: String,

    /// Informational version
    #[serde(default)]
    pub version: Option<String>,
}

/// The `[parent]` table
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "kebab-case")]
pub struct ParentSection {
    /// Parent group id
    pub group_id: String,

    /// Parent artifact id
    pub artifact_id: String,

    /// Parent descriptor, relative to this descriptor's directory
    #[serde(default)]
    pub path: Option<String>,
}

impl ParentSection {
    /// Parent coordinates
    pub fn identity(&self) -> ProjectIdentity {
        ProjectIdentity::new(&self.group_id, &self.artifact_id)
    }

    /// Relative path to the parent descriptor
    pub fn path(&self) -> &str {
        self.path.as_deref().unwrap_or(DEFAULT_PARENT_PATH)
    }
}

/// One `[[dependencies]]` entry
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "kebab-case")]
pub struct DependencySection {
    /// Dependency group id
    pub group_id: String,

    /// Dependency artifact id
    pub artifact_id: String,
}

impl DependencySection {
    /// Dependency coordinates
    pub fn identity(&self) -> ProjectIdentity {
        ProjectIdentity::new(&self.group_id, &self.artifact_id)
    }
}

impl ProjectDescriptor {
    /// Parse from TOML string
    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Effective group id: declared, or inherited from the parent
    pub fn group_id(&self) -> Option<&str> {
        self.project
            .group_id
            .as_deref()
            .or_else(|| self.parent.as_ref().map(|p| p.group_id.as_str()))
    }

    /// Effective coordinates, if the group id is known
    pub fn identity(&self) -> Option<ProjectIdentity> {
        self.group_id()
            .map(|group| ProjectIdentity::new(group, &self.project.artifact_id))
    }
}
