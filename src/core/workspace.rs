//! In-memory workspace graph
//!
//! A [`Workspace`] is the crate's own [`ProjectGraph`]: members sorted by
//! the internal resolver, their upstream edges, and any non-member projects
//! that are referenced as parents.

use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};

use crate::core::model::ProjectIdentity;
use crate::core::project::{Project, ProjectGraph, ProjectId};
use crate::core::resolver::DependencyGraph;
use crate::error::ResolverError;

/// Collects projects and edges before sorting them into a [`Workspace`]
#[derive(Debug)]
pub struct WorkspaceBuilder {
    root: PathBuf,
    projects: Vec<Project>,
    members: Vec<ProjectId>,
    member_set: HashSet<ProjectId>,
    upstream: HashMap<ProjectId, Vec<ProjectId>>,
}

impl WorkspaceBuilder {
    /// Create a builder for a workspace rooted at `root`
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            projects: Vec::new(),
            members: Vec::new(),
            member_set: HashSet::new(),
            upstream: HashMap::new(),
        }
    }

    /// Add a workspace member, in declaration order
    pub fn add_member(&mut self, project: Project) -> ProjectId {
        let id = self.push(project);
        self.members.push(id);
        self.member_set.insert(id);
        id
    }

    /// Add a project that is known but not part of the workspace
    pub fn add_external(&mut self, project: Project) -> ProjectId {
        self.push(project)
    }

    fn push(&mut self, project: Project) -> ProjectId {
        let id = ProjectId::new(self.projects.len());
        self.projects.push(project);
        id
    }

    /// Record `parent` as the parent project of `child`
    pub fn set_parent(&mut self, child: ProjectId, parent: ProjectId) {
        if let Some(project) = self.projects.get_mut(child.0) {
            project.parent = Some(parent);
        }
    }

    /// Record an upstream edge between two members
    ///
    /// Edges to non-members are dropped: only workspace projects take part
    /// in the build order.
    pub fn add_dependency(&mut self, from: ProjectId, to: ProjectId) {
        if !self.member_set.contains(&to) {
            tracing::debug!(
                "Ignoring dependency on non-member {} from {}",
                self.label(to),
                self.label(from)
            );
            return;
        }
        self.upstream.entry(from).or_default().push(to);
    }

    /// Find a member by coordinates
    pub fn find_member(&self, identity: &ProjectIdentity) -> Option<ProjectId> {
        self.members.iter().copied().find(|id| {
            let project = &self.projects[id.0];
            project.group_id.as_deref() == Some(identity.group_id.as_str())
                && project.artifact_id.as_deref() == Some(identity.artifact_id.as_str())
        })
    }

    /// Look up a project added so far
    pub fn project(&self, id: ProjectId) -> Option<&Project> {
        self.projects.get(id.0)
    }

    fn label(&self, id: ProjectId) -> String {
        self.projects
            .get(id.0)
            .map_or_else(|| id.to_string(), Project::label)
    }

    /// Sort the members and freeze the workspace
    ///
    /// A member builds after its upstream projects and after its parent
    /// when the parent is a member too.
    pub fn build(self) -> Result<Workspace, ResolverError> {
        self.check_duplicates()?;

        let key = |id: ProjectId| id.index().to_string();
        let mut graph = DependencyGraph::new();
        for &member in &self.members {
            let mut edges: Vec<String> = self
                .upstream
                .get(&member)
                .map(|deps| deps.iter().copied().map(key).collect())
                .unwrap_or_default();
            if let Some(parent) = self.projects[member.0].parent {
                if self.member_set.contains(&parent) {
                    edges.push(key(parent));
                }
            }
            graph.add_node(&key(member), edges);
        }

        let sorted: Vec<ProjectId> = graph
            .topological_sort()
            .map_err(|err| match err {
                ResolverError::CircularDependency { cycle } => ResolverError::CircularDependency {
                    cycle: cycle
                        .iter()
                        .map(|k| self.label(Self::parse_key(k)))
                        .collect(),
                },
                other => other,
            })?
            .iter()
            .map(|k| Self::parse_key(k))
            .collect();

        Ok(Workspace {
            root: self.root,
            projects: self.projects,
            upstream: self.upstream,
            sorted,
        })
    }

    fn parse_key(key: &str) -> ProjectId {
        // Keys are only ever produced from member indices above
        ProjectId::new(key.parse().unwrap_or_default())
    }

    fn check_duplicates(&self) -> Result<(), ResolverError> {
        let mut seen: HashMap<(&str, &str), ProjectId> = HashMap::new();
        for &member in &self.members {
            let project = &self.projects[member.0];
            let (Some(group), Some(artifact)) = (&project.group_id, &project.artifact_id) else {
                continue;
            };
            if let Some(&first) = seen.get(&(group.as_str(), artifact.as_str())) {
                return Err(ResolverError::DuplicateProject {
                    coordinates: format!("{group}:{artifact}"),
                    first: self.location(first),
                    second: self.location(member),
                });
            }
            seen.insert((group.as_str(), artifact.as_str()), member);
        }
        Ok(())
    }

    fn location(&self, id: ProjectId) -> String {
        self.projects[id.0]
            .file()
            .map_or_else(|| self.label(id), |f| f.display().to_string())
    }
}

/// A sorted workspace
#[derive(Debug)]
pub struct Workspace {
    root: PathBuf,
    projects: Vec<Project>,
    upstream: HashMap<ProjectId, Vec<ProjectId>>,
    sorted: Vec<ProjectId>,
}

impl Workspace {
    /// Workspace root directory
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Number of members
    pub fn len(&self) -> usize {
        self.sorted.len()
    }

    /// Check if the workspace has no members
    pub fn is_empty(&self) -> bool {
        self.sorted.is_empty()
    }

    /// Members in build order, paired with their projects
    pub fn members(&self) -> impl Iterator<Item = (ProjectId, &Project)> + '_ {
        self.sorted.iter().map(|&id| (id, &self.projects[id.0]))
    }
}

impl ProjectGraph for Workspace {
    fn sorted_projects(&self) -> &[ProjectId] {
        &self.sorted
    }

    fn upstream_projects(&self, id: ProjectId) -> Vec<ProjectId> {
        self.upstream.get(&id).cloned().unwrap_or_default()
    }

    fn project(&self, id: ProjectId) -> Option<&Project> {
        self.projects.get(id.0)
    }
}
