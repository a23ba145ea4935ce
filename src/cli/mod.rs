//! Command-line interface module
//!
//! This module handles argument parsing and output formatting.
//! It contains no business logic - that belongs in the [`crate::core`] module.

pub mod commands;
pub mod output;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;

use commands::Commands;

use crate::core::workspace_config::WorkspaceConfig;

/// Gridorder - build order documents for multi-project workspaces
///
/// Reads the project descriptors of a workspace, sorts the projects so that
/// every project comes after the projects it depends on, and writes the
/// result as a YAML document for build schedulers.
#[derive(Parser, Debug)]
#[command(name = "gridorder")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output in JSON format for scripting
    #[arg(long, global = true)]
    pub json: bool,

    /// Workspace root directory (defaults to the current directory)
    #[arg(short = 'C', long, global = true, value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Project descriptor file name
    #[arg(short, long, global = true, value_name = "NAME")]
    pub file: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Options shared by every command
#[derive(Debug, Clone)]
pub struct GlobalOptions {
    /// Workspace root, absolute
    pub root: PathBuf,
    /// Descriptor file name override
    pub descriptor: Option<String>,
    /// Suppress non-error output
    pub quiet: bool,
    /// Emit JSON instead of text
    pub json: bool,
}

impl GlobalOptions {
    /// Load the workspace configuration for this root
    pub fn config(&self) -> Result<WorkspaceConfig> {
        WorkspaceConfig::load(&self.root).with_context(|| {
            format!(
                "Failed to load workspace configuration under {}",
                self.root.display()
            )
        })
    }

    /// Effective descriptor file name: flag first, then configuration
    pub fn descriptor<'a>(&'a self, config: &'a WorkspaceConfig) -> &'a str {
        self.descriptor
            .as_deref()
            .unwrap_or_else(|| config.descriptor())
    }

    /// Resolve a possibly relative path against the workspace root
    pub fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.root.join(path)
        }
    }
}

impl Cli {
    /// Execute the CLI command
    pub fn run(self) -> Result<()> {
        let Some(cmd) = self.command else {
            // No subcommand provided, show help
            use clap::CommandFactory;
            let mut cmd = Self::command();
            cmd.print_help()?;
            return Ok(());
        };

        let root = match self.root {
            Some(root) => root,
            None => std::env::current_dir().context("Failed to determine current directory")?,
        };
        let root = std::fs::canonicalize(&root)
            .with_context(|| format!("Workspace root {} is not accessible", root.display()))?;

        let options = GlobalOptions {
            root,
            descriptor: self.file,
            quiet: self.quiet,
            json: self.json,
        };
        cmd.run(&options)
    }
}
