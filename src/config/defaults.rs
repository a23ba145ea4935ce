//! Default configuration values

/// Build order document location, relative to the workspace root
pub const DEFAULT_OUTPUT: &str = ".grid/buildorder.yaml";

/// Project descriptor file name
pub const DEFAULT_DESCRIPTOR: &str = "project.toml";

/// Parent descriptor location, relative to the child descriptor's directory
pub const DEFAULT_PARENT_PATH: &str = "../project.toml";

/// Workspace configuration file, relative to the workspace root
pub const WORKSPACE_CONFIG: &str = ".grid/config.toml";

/// Environment variable overriding the output path
pub const ENV_OUTPUT: &str = "GRIDORDER_OUTPUT";
