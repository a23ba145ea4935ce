//! List command implementation
//!
//! Implements `gridorder list` to show the projects in build order
//! without writing anything. The listing is the command's result, so
//! `--quiet` does not shorten it.

use anyhow::Result;

use crate::cli::commands::buildorder;
use crate::cli::GlobalOptions;

/// Execute the list command
pub fn execute(options: &GlobalOptions) -> Result<()> {
    let config = options.config()?;
    let order = buildorder::build(options, &config)?;

    if options.json {
        println!("{}", serde_json::to_string_pretty(&order)?);
        return Ok(());
    }

    for (index, project) in order.projects().iter().enumerate() {
        println!(
            "{:>3}. {}  {}",
            index + 1,
            project.identity(),
            project.file_location().display()
        );
        for dep in project.dependencies() {
            println!("       <- {}", dep.identity());
        }
    }

    Ok(())
}
