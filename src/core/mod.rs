//! Core business logic module
//!
//! This module contains all business logic for gridorder.
//! It has NO I/O operations apart from reading the workspace configuration;
//! reading descriptors and writing documents belong in [`crate::infra`].
//!
//! # Submodules
//!
//! - [`model`] - Build order document types
//! - [`project`] - Project handles and the [`project::ProjectGraph`] trait
//! - [`descriptor`] - Project descriptor (project.toml) parsing
//! - [`resolver`] - Dependency resolution and topological sort
//! - [`workspace`] - Sorted in-memory workspace graph
//! - [`builder`] - Build order construction
//! - [`workspace_config`] - Per-workspace configuration

pub mod builder;
pub mod descriptor;
pub mod model;
pub mod project;
pub mod resolver;
pub mod workspace;
pub mod workspace_config;
