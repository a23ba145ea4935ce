//! Gridorder - build order documents for multi-project workspaces
//!
//! This library reads a workspace of project descriptors, sorts the projects
//! topologically and describes the result as a YAML build order document:
//! every project with its descriptor location and the projects it
//! immediately depends on.
//!
//! # Architecture
//!
//! The crate is organized into several modules:
//!
//! - [`cli`] - Command-line interface parsing and output formatting
//! - [`core`] - Business logic (no I/O operations)
//! - [`infra`] - Infrastructure layer (descriptor discovery, document files)
//! - [`config`] - Configuration and constants
//! - [`error`] - Error types and handling
//!
//! # Example
//!
//! ```no_run
//! use gridorder::core::builder::OrderBuilder;
//! use gridorder::infra::{discovery, document};
//! use std::path::Path;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let workspace = discovery::discover(Path::new("/work/acme"), "project.toml")?;
//! let order = OrderBuilder::new(workspace.root()).build(&workspace)?;
//! document::write_build_order(&order, Path::new("/work/acme/.grid/buildorder.yaml"))?;
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod infra;

#[cfg(test)]
pub mod test_utils;
