//! CLI command implementations
//!
//! Each command is implemented in its own submodule.

pub mod buildorder;
pub mod check;
pub mod list;

use std::path::PathBuf;

use anyhow::Result;
use clap::Subcommand;

use super::GlobalOptions;
use crate::config::defaults::ENV_OUTPUT;

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Write the workspace build order document
    Buildorder {
        /// Output path, relative to the workspace root unless absolute
        /// [default: .grid/buildorder.yaml]
        #[arg(short, long, env = ENV_OUTPUT, value_name = "PATH")]
        output: Option<PathBuf>,
    },

    /// List workspace projects in build order
    List,

    /// Verify an existing build order document
    Check {
        /// Document to check (defaults to the configured output path)
        document: Option<PathBuf>,
    },
}

impl Commands {
    /// Execute the command
    pub fn run(self, options: &GlobalOptions) -> Result<()> {
        match self {
            Self::Buildorder { output } => buildorder::execute(options, output).map(|_| ()),
            Self::List => list::execute(options),
            Self::Check { document } => check::execute(options, document),
        }
    }
}
