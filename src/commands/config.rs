//! Config command
use std::path::Path;

use graphkit_core::config::EngineConfig;
use graphkit_core::error::Result;

use crate::cli::{Cli, OutputFormat};
use crate::commands::print_json;

/// Write the effective configuration (defaults merged with --config) to `output`
pub fn execute(cli: &Cli, config: &EngineConfig, output: &Path) -> Result<()> {
    config.save(output)?;

    match cli.format {
        OutputFormat::Json => print_json(&serde_json::json!({
            "output": output.display().to_string(),
            "version": config.version,
        })),
        OutputFormat::Human => {
            if !cli.quiet {
                println!("Wrote {}", output.display());
            }
            Ok(())
        }
    }
}
