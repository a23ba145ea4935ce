//! Check command implementation
//!
//! Implements `gridorder check` to verify that an existing build order
//! document lists every project after the projects it depends on.

use std::path::PathBuf;

use anyhow::Result;

use crate::cli::output::status;
use crate::cli::GlobalOptions;
use crate::infra::document;

/// Execute the check command
pub fn execute(options: &GlobalOptions, document_path: Option<PathBuf>) -> Result<()> {
    let path = match document_path {
        Some(path) => options.resolve(&path),
        None => {
            let config = options.config()?;
            options.resolve(&PathBuf::from(config.output()))
        }
    };

    let order = document::read_build_order(&path)?;
    order.verify_ordering()?;

    if options.json {
        println!(
            "{}",
            serde_json::json!({ "document": path, "projects": order.len(), "valid": true })
        );
    } else if !options.quiet {
        if order.is_empty() {
            println!("{} {} contains no projects", status::WARNING, path.display());
        } else {
            println!(
                "{} {}: {} projects in valid build order",
                status::SUCCESS,
                path.display(),
                order.len()
            );
        }
    }

    Ok(())
}
