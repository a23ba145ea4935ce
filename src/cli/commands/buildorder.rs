//! Build order command implementation
//!
//! Implements `gridorder buildorder`: discover the workspace, build the
//! order, verify it and write the document.

use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::cli::output::status;
use crate::cli::GlobalOptions;
use crate::core::builder::OrderBuilder;
use crate::core::model::BuildOrder;
use crate::core::workspace_config::WorkspaceConfig;
use crate::infra::{discovery, document};

/// Discover the workspace and build its verified order
pub fn build(options: &GlobalOptions, config: &WorkspaceConfig) -> Result<BuildOrder> {
    let descriptor = options.descriptor(config);
    let workspace = discovery::discover(&options.root, descriptor)
        .with_context(|| format!("Failed to load workspace at {}", options.root.display()))?;

    let order = OrderBuilder::new(&options.root)
        .build(&workspace)
        .context("Failed to build the build order")?;
    order
        .verify_ordering()
        .context("Build order is not topologically sorted")?;

    Ok(order)
}

/// Execute the buildorder command, returning the written path
pub fn execute(options: &GlobalOptions, output: Option<PathBuf>) -> Result<PathBuf> {
    let config = options.config()?;
    let output = output.unwrap_or_else(|| PathBuf::from(config.output()));
    let output = options.resolve(&output);

    let order = build(options, &config)?;
    tracing::info!("Build order has {} projects", order.len());

    document::write_build_order(&order, &output)?;

    if options.json {
        println!(
            "{}",
            serde_json::json!({ "output": output, "projects": order.len() })
        );
    } else if !options.quiet {
        println!("{} Wrote build order to: {}", status::SUCCESS, output.display());
    }

    Ok(output)
}
