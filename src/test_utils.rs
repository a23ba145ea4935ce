//! Test utilities for property-based testing
//!
//! This module provides generators and helpers for proptest.

#[cfg(test)]
pub mod generators {
    use proptest::prelude::*;

    use crate::core::project::{Project, ProjectId};
    use crate::core::workspace::{Workspace, WorkspaceBuilder};

    /// Generate a valid group id (dot-separated lowercase segments)
    pub fn group_id() -> impl Strategy<Value = String> {
        proptest::collection::vec("[a-z][a-z0-9]{0,8}", 1..4).prop_map(|parts| parts.join("."))
    }

    /// Generate a valid artifact id (lowercase alphanumeric with hyphens)
    pub fn artifact_id() -> impl Strategy<Value = String> {
        "[a-z][a-z0-9-]{0,30}[a-z0-9]?".prop_filter("Name must not be empty", |s| !s.is_empty())
    }

    /// Where a generated project's parent lives
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum ParentSpec {
        /// No parent
        None,
        /// Parent is the member at this index
        Member(usize),
        /// Parent exists but is not a member
        External,
    }

    /// One generated project: upstream indices and parent
    #[derive(Debug, Clone)]
    pub struct ProjectSpec {
        /// Upstream members, always lower indices, in lookup order
        pub deps: Vec<usize>,
        /// Parent relationship
        pub parent: ParentSpec,
    }

    /// A generated acyclic workspace
    ///
    /// Project `i` only depends on (and only has as parent) projects with a
    /// lower index, so every generated workspace is a valid graph.
    #[derive(Debug, Clone)]
    pub struct WorkspaceSpec {
        /// Projects by index
        pub projects: Vec<ProjectSpec>,
    }

    impl WorkspaceSpec {
        /// Build the workspace, declaring members in reverse index order
        pub fn to_workspace(&self, root: &str) -> Workspace {
            let mut builder = WorkspaceBuilder::new(root);
            let mut ids = vec![ProjectId(0); self.projects.len()];

            for i in (0..self.projects.len()).rev() {
                ids[i] = builder.add_member(Project::new(
                    "org.example",
                    format!("p{i}"),
                    format!("{root}/p{i}/project.toml"),
                ));
            }

            for (i, spec) in self.projects.iter().enumerate() {
                for &d in &spec.deps {
                    builder.add_dependency(ids[i], ids[d]);
                }
                match spec.parent {
                    ParentSpec::None => {}
                    ParentSpec::Member(p) => builder.set_parent(ids[i], ids[p]),
                    ParentSpec::External => {
                        let parent = builder.add_external(Project::new(
                            "org.external",
                            format!("parent{i}"),
                            format!("/elsewhere/parent{i}/project.toml"),
                        ));
                        builder.set_parent(ids[i], parent);
                    }
                }
            }

            builder.build().expect("generated workspaces are acyclic")
        }
    }

    fn project_spec(i: usize) -> BoxedStrategy<ProjectSpec> {
        let deps = proptest::sample::subsequence((0..i).collect::<Vec<_>>(), 0..=i.min(4))
            .prop_shuffle();
        let parent = if i == 0 {
            prop_oneof![Just(ParentSpec::None), Just(ParentSpec::External)].boxed()
        } else {
            prop_oneof![
                Just(ParentSpec::None),
                (0..i).prop_map(ParentSpec::Member),
                Just(ParentSpec::External),
            ]
            .boxed()
        };

        (deps, parent)
            .prop_map(|(deps, parent)| ProjectSpec { deps, parent })
            .boxed()
    }

    /// Generate an acyclic workspace of 1 to 12 projects
    pub fn workspace_spec() -> impl Strategy<Value = WorkspaceSpec> {
        (1usize..12).prop_flat_map(|n| {
            (0..n)
                .map(project_spec)
                .collect::<Vec<_>>()
                .prop_map(|projects| WorkspaceSpec { projects })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::generators::*;
    use crate::core::builder::OrderBuilder;
    use crate::core::project::Project;
    use crate::core::workspace::WorkspaceBuilder;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn test_group_id_generator(group in group_id()) {
            prop_assert!(!group.is_empty());
            prop_assert!(group.split('.').all(|part| !part.is_empty()));
        }

        #[test]
        fn test_artifact_id_generator(name in artifact_id()) {
            prop_assert!(!name.is_empty());
            prop_assert!(name.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'));
        }

        #[test]
        fn test_generated_coordinates_accepted(group in group_id(), artifact in artifact_id()) {
            let mut builder = WorkspaceBuilder::new("/ws");
            builder.add_member(Project::new(group.clone(), artifact.clone(), "/ws/project.toml"));
            let workspace = builder.build().unwrap();

            let order = OrderBuilder::new("/ws").build(&workspace).unwrap();
            prop_assert_eq!(&order.projects()[0].identity().group_id, &group);
            prop_assert_eq!(&order.projects()[0].identity().artifact_id, &artifact);
        }

        #[test]
        fn test_workspace_spec_members(spec in workspace_spec()) {
            let workspace = spec.to_workspace("/ws");
            prop_assert_eq!(workspace.len(), spec.projects.len());
        }
    }
}
