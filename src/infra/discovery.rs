//! Workspace discovery
//!
//! Reads the root project descriptor, walks its modules depth-first in
//! declaration order, links parents and dependencies, and sorts the result
//! into a [`Workspace`].

use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};

use crate::core::descriptor::{ParentSection, ProjectDescriptor};
use crate::core::model::ProjectIdentity;
use crate::core::project::{Project, ProjectId};
use crate::core::workspace::{Workspace, WorkspaceBuilder};
use crate::error::{DescriptorError, GridError};
use crate::infra::filesystem;

/// A member descriptor waiting for its edges to be linked
struct LoadedModule {
    id: ProjectId,
    dir: PathBuf,
    descriptor: ProjectDescriptor,
}

/// Walks descriptors on disk and builds the workspace graph
struct Discovery<'a> {
    descriptor_name: &'a str,
    builder: WorkspaceBuilder,
    loaded: Vec<LoadedModule>,
    visited: HashSet<PathBuf>,
    /// Descriptors on the current aggregation path
    active: Vec<PathBuf>,
    external_parents: HashMap<ProjectIdentity, ProjectId>,
}

/// Discover and sort the workspace rooted at `root`
///
/// `descriptor_name` is the descriptor file name looked up in the root and
/// in every module directory.
pub fn discover(root: &Path, descriptor_name: &str) -> Result<Workspace, GridError> {
    let root_file = root.join(descriptor_name);
    if !root_file.is_file() {
        return Err(DescriptorError::NotFound { path: root_file }.into());
    }

    let root = filesystem::canonicalize(root)?;
    let mut discovery = Discovery {
        descriptor_name,
        builder: WorkspaceBuilder::new(&root),
        loaded: Vec::new(),
        visited: HashSet::new(),
        active: Vec::new(),
        external_parents: HashMap::new(),
    };

    discovery.load_module(&root_file)?;
    discovery.link()?;

    let workspace = discovery.builder.build()?;
    tracing::info!(
        "Discovered {} projects under {}",
        workspace.len(),
        root.display()
    );
    Ok(workspace)
}

/// Parse a descriptor file
pub fn read_descriptor(path: &Path) -> Result<ProjectDescriptor, GridError> {
    let content = filesystem::read_file(path)?;
    let descriptor =
        ProjectDescriptor::from_toml(&content).map_err(|e| DescriptorError::ParseError {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;
    Ok(descriptor)
}

impl Discovery<'_> {
    fn load_module(&mut self, path: &Path) -> Result<(), GridError> {
        let file = filesystem::canonicalize(path)?;
        if self.active.contains(&file) {
            return Err(DescriptorError::AggregationCycle { path: file }.into());
        }
        if !self.visited.insert(file.clone()) {
            return Err(DescriptorError::DuplicateModule { path: file }.into());
        }

        let descriptor = read_descriptor(&file)?;
        let dir = file
            .parent()
            .map_or_else(|| PathBuf::from("/"), Path::to_path_buf);

        let id = self.builder.add_member(Project {
            group_id: descriptor.group_id().map(str::to_string),
            artifact_id: Some(descriptor.project.artifact_id.clone()),
            file: Some(file.clone()),
            parent: None,
        });
        tracing::debug!("Loaded {} from {}", descriptor.project.artifact_id, file.display());

        self.active.push(file.clone());
        for module in &descriptor.modules {
            let module_file = self.module_descriptor(&dir, module);
            if !module_file.is_file() {
                return Err(DescriptorError::ModuleNotFound {
                    module: module.clone(),
                    parent: file.clone(),
                    path: module_file,
                }
                .into());
            }
            self.load_module(&module_file)?;
        }
        self.active.pop();

        self.loaded.push(LoadedModule {
            id,
            dir,
            descriptor,
        });
        Ok(())
    }

    fn module_descriptor(&self, dir: &Path, module: &str) -> PathBuf {
        let path = dir.join(module);
        if Path::new(module)
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"))
        {
            path
        } else {
            path.join(self.descriptor_name)
        }
    }

    fn link(&mut self) -> Result<(), GridError> {
        let loaded = std::mem::take(&mut self.loaded);

        for module in &loaded {
            if let Some(parent) = &module.descriptor.parent {
                let parent_id = match self.builder.find_member(&parent.identity()) {
                    Some(member) => member,
                    None => self.external_parent(&module.dir, parent)?,
                };
                self.builder.set_parent(module.id, parent_id);
            }

            for dependency in &module.descriptor.dependencies {
                match self.builder.find_member(&dependency.identity()) {
                    Some(member) => self.builder.add_dependency(module.id, member),
                    None => tracing::debug!(
                        "{} depends on {}, which is outside the workspace",
                        module.descriptor.project.artifact_id,
                        dependency.identity()
                    ),
                }
            }
        }

        Ok(())
    }

    /// Resolve a parent that is not a member
    ///
    /// The parent path is tried first; a descriptor there with matching
    /// coordinates gives the parent its location. Otherwise the parent is
    /// known by coordinates only.
    fn external_parent(
        &mut self,
        dir: &Path,
        parent: &ParentSection,
    ) -> Result<ProjectId, GridError> {
        let identity = parent.identity();
        if let Some(&id) = self.external_parents.get(&identity) {
            return Ok(id);
        }

        let mut path = dir.join(parent.path());
        if path.is_dir() {
            path = path.join(self.descriptor_name);
        }

        let mut file = None;
        if path.is_file() {
            let candidate = filesystem::canonicalize(&path)?;
            match read_descriptor(&candidate) {
                Ok(descriptor) if descriptor.identity().as_ref() == Some(&identity) => {
                    file = Some(candidate);
                }
                Ok(descriptor) => tracing::warn!(
                    "Parent descriptor {} is {}, expected {}",
                    candidate.display(),
                    descriptor
                        .identity()
                        .map_or_else(|| descriptor.project.artifact_id.clone(), |i| i.to_string()),
                    identity
                ),
                Err(e) => tracing::warn!("Ignoring unreadable parent descriptor: {e}"),
            }
        }

        tracing::debug!(
            "Parent {} is outside the workspace ({})",
            identity,
            file.as_deref()
                .map_or_else(|| "no descriptor".to_string(), |f| f.display().to_string())
        );

        let id = self.builder.add_external(Project {
            group_id: Some(identity.group_id.clone()),
            artifact_id: Some(identity.artifact_id.clone()),
            file,
            parent: None,
        });
        self.external_parents.insert(identity, id);
        Ok(id)
    }
}
