//! `gantry check` - Validate a delivery configuration
//!
//! Loads a configuration document, runs full validation, and prints a short
//! summary of what synthesis would produce. Nothing is written.
//!
//! ## Usage
//!
//! ```bash
//! gantry check <config.json>
//! ```
//!
//! ## Example
//!
//! ```bash
//! gantry check pipeline-config.json
//! # Exit code 0: Configuration would synthesize cleanly
//! # Exit code 1: Configuration rejected
//! ```

use anyhow::{Context, Result};
use gantry::prelude::*;
use std::path::Path;

/// Validate a configuration file and print what it would synthesize
///
/// # Arguments
///
/// * `file` - Path to the configuration document to validate
///
/// # Returns
///
/// Returns `Ok(())` if the configuration assembles into a valid plan,
/// `Err(anyhow::Error)` otherwise.
pub fn check_config(file: &Path) -> Result<()> {
    let file_str = file.to_string_lossy();

    tracing::debug!("Validating configuration: {}", file_str);

    if !file.exists() {
        anyhow::bail!("Configuration file not found: {}", file_str);
    }

    let config = PipelineConfig::from_path(file)
        .with_context(|| format!("Failed to load configuration: {}", file_str))?;

    // Assembling the plan runs every validation the document will face.
    let plan = DeliveryPlan::from_config(&config).context("Configuration rejected")?;

    println!("Configuration OK: {}", file_str);
    println!("  environment: {}", config.env);

    if let ActionKind::Source(source) = &plan.pipeline.stages[0].actions[0].kind
        && let Ok(url) = source.repository_url()
    {
        println!("  source:      {} ({})", url, source.branch);
    }

    println!("  repository:  {}", plan.repository);
    println!("  project:     {}", plan.project.name);
    println!("  pipeline:    {}", plan.pipeline.name());
    println!("  stages:      {}", plan.pipeline.stage_names().join(" -> "));

    tracing::info!("Configuration valid: {}", file_str);
    Ok(())
}
