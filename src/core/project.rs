//! Project handles and the read-only graph view consumed by the order builder

use std::fmt;
use std::path::{Path, PathBuf};

/// Handle to a project known to a [`ProjectGraph`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ProjectId(pub(crate) usize);

impl ProjectId {
    /// Create a handle from an index chosen by the graph implementation
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    /// Index this handle was created from
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for ProjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A project as seen by the graph
///
/// Identity and location are optional because a graph may know about a
/// project only partially (for example a parent that lives outside the
/// workspace and has no descriptor on disk).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Project {
    /// Group id, possibly inherited from the parent
    pub group_id: Option<String>,
    /// Artifact id
    pub artifact_id: Option<String>,
    /// Absolute path to the project descriptor
    pub file: Option<PathBuf>,
    /// Parent project, which may or may not be a workspace member
    pub parent: Option<ProjectId>,
}

impl Project {
    /// Create a project with full coordinates and a descriptor location
    pub fn new(
        group_id: impl Into<String>,
        artifact_id: impl Into<String>,
        file: impl Into<PathBuf>,
    ) -> Self {
        Self {
            group_id: Some(group_id.into()),
            artifact_id: Some(artifact_id.into()),
            file: Some(file.into()),
            parent: None,
        }
    }

    /// Set the parent project
    #[must_use]
    pub fn with_parent(mut self, parent: ProjectId) -> Self {
        self.parent = Some(parent);
        self
    }

    /// Descriptor location, if known
    pub fn file(&self) -> Option<&Path> {
        self.file.as_deref()
    }

    /// Human-readable label: coordinates when complete, else the descriptor path
    pub fn label(&self) -> String {
        match (&self.group_id, &self.artifact_id, &self.file) {
            (Some(group), Some(artifact), _) => format!("{group}:{artifact}"),
            (None, Some(artifact), _) => format!("?:{artifact}"),
            (_, None, Some(file)) => file.display().to_string(),
            (_, None, None) => "<unknown>".to_string(),
        }
    }
}

/// Read-only view of a sorted project dependency graph
pub trait ProjectGraph {
    /// Workspace members in build order
    fn sorted_projects(&self) -> &[ProjectId];

    /// Immediate upstream members of a project, in declaration order
    fn upstream_projects(&self, id: ProjectId) -> Vec<ProjectId>;

    /// Look up a project by handle
    fn project(&self, id: ProjectId) -> Option<&Project>;
}
