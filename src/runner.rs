//! CLI execution and command dispatch logic.
//!
//! Keeps `main` minimal: builds the engine configuration from the parsed
//! command line, runs the generation engine, and reports the outcome.

use crate::cli::Cli;
use crate::config::GeneratorConfig;
use crate::generate::Generator;
use anyhow::{Context, Result};
use tracing::debug;

/// Execute a full generation run for the parsed [`Cli`].
///
/// # Errors
///
/// Returns an error when the configuration is invalid or when generation
/// aborts on a fatal rendering or filesystem failure.
pub fn run(cli: &Cli) -> Result<()> {
    let config = GeneratorConfig::from_cli(cli).context("invalid configuration")?;
    debug!(
        features_directory = %config.features_directory,
        output_directory = %config.output_directory,
        "starting runner generation"
    );
    let mut generator = Generator::new(&config).context("initialise template engine")?;
    generator
        .generate()
        .with_context(|| format!("generate runners into {}", config.output_directory))?;
    Ok(())
}
