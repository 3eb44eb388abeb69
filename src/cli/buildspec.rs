//! `gantry buildspec` - Render the build specification
//!
//! Renders only the build specification of the synthesized plan, in the
//! shape a build runner consumes directly. Defaults to YAML.

use super::synth::OutputFormat;
use anyhow::{Context, Result};
use gantry::prelude::*;
use std::path::Path;

/// Render the build specification for a configuration file
pub fn render_buildspec(file: &Path, format: OutputFormat) -> Result<String> {
    if !file.exists() {
        anyhow::bail!("Configuration file not found: {}", file.display());
    }

    let config = PipelineConfig::from_path(file)
        .with_context(|| format!("Failed to load configuration: {}", file.display()))?;

    let plan = DeliveryPlan::from_config(&config).context("Failed to assemble delivery plan")?;

    let document = match format {
        OutputFormat::Json => plan.project.spec.to_json()?,
        OutputFormat::Yaml => plan.project.spec.to_yaml()?,
    };

    tracing::info!("Rendered build specification for: {}", plan.project.name);
    Ok(document)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write_config(dir: &TempDir) -> std::path::PathBuf {
        let path = dir.path().join("config.json");
        fs::write(
            &path,
            r#"{
  "env": "dev",
  "gitHubSecret": "ghp_sample",
  "gitHubRepositoryOwner": "acme",
  "gitHubRepository": "demo",
  "gitHubBranch": "main",
  "manualApprovals": false
}"#,
        )
        .unwrap();
        path
    }

    #[test]
    fn test_render_yaml() {
        let temp_dir = TempDir::new().unwrap();
        let path = write_config(&temp_dir);

        let document = render_buildspec(&path, OutputFormat::Yaml).unwrap();
        assert!(document.contains("version: '0.2'") || document.contains("version: \"0.2\""));
        assert!(document.contains("pre_build:"));
        assert!(document.contains("image-definitions.json"));
    }

    #[test]
    fn test_render_json_targets_configured_repository() {
        let temp_dir = TempDir::new().unwrap();
        let path = write_config(&temp_dir);

        let document = render_buildspec(&path, OutputFormat::Json).unwrap();
        assert!(document.contains("localhost:5000/cicd/demo:latest"));
    }

    #[test]
    fn test_render_missing_file() {
        let result = render_buildspec(Path::new("/nonexistent/config.json"), OutputFormat::Yaml);
        assert!(result.is_err());
    }
}
