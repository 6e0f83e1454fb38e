//! Export command
use std::fs;
use std::path::Path;

use graphkit_core::config::ExportConfig;
use graphkit_core::error::Result;
use graphkit_core::export::to_plantuml;
use graphkit_core::graph::AdjacencyList;

use crate::cli::{Cli, OutputFormat};
use crate::commands::print_json;

/// Execute the export command
pub fn execute(
    cli: &Cli,
    graph: &AdjacencyList,
    config: &ExportConfig,
    output: Option<&Path>,
) -> Result<()> {
    let diagram = to_plantuml(graph, config)?;

    match output {
        Some(path) => {
            fs::write(path, &diagram)?;
            tracing::debug!(path = %path.display(), bytes = diagram.len(), "wrote diagram");
            match cli.format {
                OutputFormat::Json => print_json(&serde_json::json!({
                    "output": path.display().to_string(),
                    "bytes": diagram.len(),
                })),
                OutputFormat::Human => {
                    if !cli.quiet {
                        println!("Wrote {}", path.display());
                    }
                    Ok(())
                }
            }
        }
        None => match cli.format {
            OutputFormat::Json => print_json(&serde_json::json!({ "diagram": diagram })),
            OutputFormat::Human => {
                print!("{}", diagram);
                Ok(())
            }
        },
    }
}
