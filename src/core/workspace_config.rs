//! Workspace configuration
//!
//! Reads optional per-workspace settings from `.grid/config.toml` under the
//! workspace root. Command-line flags and environment variables take
//! precedence over anything set here.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::config::defaults::{DEFAULT_DESCRIPTOR, DEFAULT_OUTPUT, WORKSPACE_CONFIG};
use crate::error::ConfigError;

/// Workspace configuration for gridorder
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WorkspaceConfig {
    /// Build order settings
    #[serde(default)]
    pub buildorder: BuildOrderConfig,

    /// Workspace discovery settings
    #[serde(default)]
    pub workspace: DiscoveryConfig,
}

/// Build order settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BuildOrderConfig {
    /// Output path, relative to the workspace root unless absolute
    pub output: Option<String>,
}

/// Workspace discovery settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DiscoveryConfig {
    /// Project descriptor file name
    pub descriptor: Option<String>,
}

impl WorkspaceConfig {
    /// Load the configuration of the workspace rooted at `root`
    ///
    /// If the config file doesn't exist, returns default configuration.
    pub fn load(root: &Path) -> Result<Self, ConfigError> {
        Self::load_from_path(&root.join(WORKSPACE_CONFIG))
    }

    /// Load configuration from a specific path
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ParseError` if the file exists but contains
    /// invalid TOML.
    pub fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.display().to_string(),
            error: e.to_string(),
        })?;

        toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.display().to_string(),
            error: e.to_string(),
        })
    }

    /// Get the effective output path
    #[must_use]
    pub fn output(&self) -> &str {
        self.buildorder.output.as_deref().unwrap_or(DEFAULT_OUTPUT)
    }

    /// Get the effective descriptor file name
    #[must_use]
    pub fn descriptor(&self) -> &str {
        self.workspace
            .descriptor
            .as_deref()
            .unwrap_or(DEFAULT_DESCRIPTOR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = WorkspaceConfig::default();
        assert_eq!(config.output(), ".grid/buildorder.yaml");
        assert_eq!(config.descriptor(), "project.toml");
    }

    #[test]
    fn test_load_missing_file_returns_default() {
        let temp_dir = TempDir::new().unwrap();

        let config = WorkspaceConfig::load(temp_dir.path()).unwrap();
        assert!(config.buildorder.output.is_none());
        assert!(config.workspace.descriptor.is_none());
    }

    #[test]
    fn test_load_valid_config() {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir_all(temp_dir.path().join(".grid")).unwrap();
        fs::write(
            temp_dir.path().join(WORKSPACE_CONFIG),
            r#"
[buildorder]
output = "out/order.yaml"

[workspace]
descriptor = "module.toml"
"#,
        )
        .unwrap();

        let config = WorkspaceConfig::load(temp_dir.path()).unwrap();
        assert_eq!(config.output(), "out/order.yaml");
        assert_eq!(config.descriptor(), "module.toml");
    }

    #[test]
    fn test_load_invalid_toml_returns_error() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.toml");

        fs::write(&config_path, "invalid toml [[[").unwrap();

        let result = WorkspaceConfig::load_from_path(&config_path);
        assert!(matches!(result, Err(ConfigError::ParseError { .. })));
    }
}
