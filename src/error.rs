//! Error types for gridorder
//!
//! Domain-specific error types using thiserror.

use std::path::PathBuf;
use thiserror::Error;

/// Build order construction, writing and reading errors
#[derive(Error, Debug)]
pub enum BuildOrderError {
    /// A graph lookup produced a project without a usable identity or location
    #[error("Malformed graph input for project {project}: {reason}")]
    MalformedGraphInput { project: String, reason: String },

    /// The build order could not be serialized
    #[error("Failed to serialize build order: {source}")]
    SerializationFailure {
        #[source]
        source: serde_yaml::Error,
    },

    /// Directory creation or file write failed
    #[error("Failed to write build order to '{path}': {source}")]
    WriteFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A dependency does not appear before the project that depends on it
    #[error("Project '{project}' depends on '{dependency}', which is not ordered before it")]
    OrderViolation { project: String, dependency: String },

    /// An existing build order document could not be read
    #[error("Failed to read build order from '{path}': {source}")]
    ReadFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// An existing build order document is not valid
    #[error("Failed to parse build order '{path}': {source}")]
    ParseFailure {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}

/// Project descriptor errors
#[derive(Error, Debug)]
pub enum DescriptorError {
    /// Descriptor file not found
    #[error("Project descriptor not found at '{path}'")]
    NotFound { path: PathBuf },

    /// Descriptor file is not valid TOML or misses required fields
    #[error("Failed to parse project descriptor '{path}': {error}")]
    ParseError { path: PathBuf, error: String },

    /// A declared module has no descriptor
    #[error("Module '{module}' declared in '{parent}' has no descriptor at '{path}'")]
    ModuleNotFound {
        module: String,
        parent: PathBuf,
        path: PathBuf,
    },

    /// A module aggregates itself, directly or through its modules
    #[error("Module '{path}' aggregates itself (aggregation cycle)")]
    AggregationCycle { path: PathBuf },

    /// Two aggregators list the same module
    #[error("Module '{path}' is aggregated more than once")]
    DuplicateModule { path: PathBuf },
}

/// Dependency resolution errors
#[derive(Error, Debug)]
pub enum ResolverError {
    /// Circular dependency detected
    #[error("Circular dependency detected: {}", cycle.join(" -> "))]
    CircularDependency { cycle: Vec<String> },

    /// Two members share the same coordinates
    #[error("Project '{coordinates}' is duplicated in the workspace: '{first}' and '{second}'")]
    DuplicateProject {
        coordinates: String,
        first: String,
        second: String,
    },
}

/// Filesystem errors
#[derive(Error, Debug)]
pub enum FilesystemError {
    /// Failed to read file
    #[error("Failed to read file '{path}': {error}")]
    ReadFile { path: PathBuf, error: String },

    /// Failed to resolve a path
    #[error("Failed to resolve path '{path}': {error}")]
    Canonicalize { path: PathBuf, error: String },
}

/// Workspace configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read config file
    #[error("Failed to read config file '{path}': {error}")]
    ReadError { path: String, error: String },

    /// Failed to parse config file
    #[error("Failed to parse config file '{path}': {error}")]
    ParseError { path: String, error: String },
}

/// Top-level gridorder error type
#[derive(Error, Debug)]
pub enum GridError {
    /// Build order error
    #[error(transparent)]
    BuildOrder(#[from] BuildOrderError),

    /// Descriptor error
    #[error(transparent)]
    Descriptor(#[from] DescriptorError),

    /// Resolver error
    #[error(transparent)]
    Resolver(#[from] ResolverError),

    /// Filesystem error
    #[error(transparent)]
    Filesystem(#[from] FilesystemError),

    /// Configuration error
    #[error(transparent)]
    Config(#[from] ConfigError),
}
