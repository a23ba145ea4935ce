//! Build order construction
//!
//! Translates a sorted [`ProjectGraph`] into a [`BuildOrder`]. Pure
//! computation: every project and dependency is resolved to an identity
//! and an absolute descriptor location, or the whole pass fails.

use std::collections::HashSet;
use std::path::PathBuf;
use std::sync::OnceLock;

use regex::Regex;

use crate::core::model::{BuildOrder, DependencyRef, ProjectIdentity, ProjectRef};
use crate::core::project::{ProjectGraph, ProjectId};
use crate::error::BuildOrderError;

fn coordinate_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[A-Za-z0-9_.\-]+$").expect("valid coordinate regex"))
}

/// Builds [`BuildOrder`]s stamped with one workspace root
#[derive(Debug, Clone)]
pub struct OrderBuilder {
    root_path: PathBuf,
}

impl OrderBuilder {
    /// Create a builder that records `root_path` in every reference
    pub fn new(root_path: impl Into<PathBuf>) -> Self {
        Self {
            root_path: root_path.into(),
        }
    }

    /// Build the order for every member of `graph`, in its sorted order
    ///
    /// Each project lists its upstream projects in lookup order, followed
    /// by its parent when the parent is itself a member. A parent that is
    /// also an upstream project is therefore listed twice.
    pub fn build<G: ProjectGraph + ?Sized>(&self, graph: &G) -> Result<BuildOrder, BuildOrderError> {
        let sorted = graph.sorted_projects();
        let members: HashSet<ProjectId> = sorted.iter().copied().collect();

        let mut projects = Vec::with_capacity(sorted.len());
        for &id in sorted {
            let (file_location, identity) = resolve(graph, id)?;

            let mut dependencies = Vec::new();
            for upstream in graph.upstream_projects(id) {
                dependencies.push(self.dependency_ref(graph, upstream)?);
            }

            let parent = graph.project(id).and_then(|p| p.parent);
            if let Some(parent) = parent.filter(|p| members.contains(p)) {
                dependencies.push(self.dependency_ref(graph, parent)?);
            }

            tracing::debug!("{identity}: {} dependencies", dependencies.len());
            projects.push(ProjectRef::new(
                self.root_path.clone(),
                file_location,
                identity,
                dependencies,
            ));
        }

        Ok(BuildOrder::new(projects))
    }

    fn dependency_ref<G: ProjectGraph + ?Sized>(
        &self,
        graph: &G,
        id: ProjectId,
    ) -> Result<DependencyRef, BuildOrderError> {
        let (file_location, identity) = resolve(graph, id)?;
        Ok(DependencyRef::new(
            self.root_path.clone(),
            file_location,
            identity,
        ))
    }
}

/// Resolve a handle to its descriptor location and validated identity
fn resolve<G: ProjectGraph + ?Sized>(
    graph: &G,
    id: ProjectId,
) -> Result<(PathBuf, ProjectIdentity), BuildOrderError> {
    let project = graph
        .project(id)
        .ok_or_else(|| BuildOrderError::MalformedGraphInput {
            project: id.to_string(),
            reason: "project handle is unknown to the graph".to_string(),
        })?;

    let malformed = |reason: String| BuildOrderError::MalformedGraphInput {
        project: project.label(),
        reason,
    };

    let group_id = coordinate(project.group_id.as_deref(), "group id").map_err(malformed)?;
    let artifact_id =
        coordinate(project.artifact_id.as_deref(), "artifact id").map_err(malformed)?;

    let file = project
        .file()
        .ok_or_else(|| malformed("descriptor location is missing".to_string()))?;
    if !file.is_absolute() {
        return Err(malformed(format!(
            "descriptor location '{}' is not absolute",
            file.display()
        )));
    }

    Ok((
        file.to_path_buf(),
        ProjectIdentity::new(group_id, artifact_id),
    ))
}

fn coordinate<'a>(value: Option<&'a str>, field: &str) -> Result<&'a str, String> {
    match value {
        None => Err(format!("{field} is missing")),
        Some("") => Err(format!("{field} is empty")),
        Some(v) if !coordinate_pattern().is_match(v) => {
            Err(format!("{field} '{v}' contains invalid characters"))
        }
        Some(v) => Ok(v),
    }
}
