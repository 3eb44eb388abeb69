//! `gantry synth` - Synthesize the delivery plan
//!
//! Loads a configuration, assembles the complete delivery plan, and renders
//! it as JSON or YAML. The rendered document is everything an execution
//! service needs: repository, build project, and pipeline.

use anyhow::{Context, Result};
use gantry::prelude::*;
use std::fs;
use std::path::Path;

/// Output format for rendered documents
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    /// Pretty-printed JSON
    Json,
    /// YAML
    Yaml,
}

/// Synthesize the delivery plan for a configuration file
pub fn synth_plan(file: &Path, format: OutputFormat) -> Result<String> {
    if !file.exists() {
        anyhow::bail!("Configuration file not found: {}", file.display());
    }

    let config = PipelineConfig::from_path(file)
        .with_context(|| format!("Failed to load configuration: {}", file.display()))?;

    let plan = DeliveryPlan::from_config(&config).context("Failed to assemble delivery plan")?;

    let document = match format {
        OutputFormat::Json => plan.to_json()?,
        OutputFormat::Yaml => plan.to_yaml()?,
    };

    tracing::info!("Synthesized plan: {}", plan.pipeline.name());
    Ok(document)
}

/// Write a rendered document to a file
pub fn save_document(document: &str, output_path: &Path) -> Result<()> {
    fs::write(output_path, document)
        .with_context(|| format!("Failed to write document to: {}", output_path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_config(dir: &TempDir, manual_approvals: bool) -> std::path::PathBuf {
        let path = dir.path().join("config.json");
        let content = format!(
            r#"{{
  "env": "dev",
  "gitHubSecret": "ghp_sample",
  "gitHubRepositoryOwner": "acme",
  "gitHubRepository": "demo",
  "gitHubBranch": "main",
  "manualApprovals": {manual_approvals}
}}"#
        );
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_synth_json() {
        let temp_dir = TempDir::new().unwrap();
        let path = write_config(&temp_dir, false);

        let document = synth_plan(&path, OutputFormat::Json).unwrap();
        assert!(document.contains("dev-demo-github-pipeline"));
        assert!(document.contains("\"repository\""));
    }

    #[test]
    fn test_synth_yaml_includes_approval_stage() {
        let temp_dir = TempDir::new().unwrap();
        let path = write_config(&temp_dir, true);

        let document = synth_plan(&path, OutputFormat::Yaml).unwrap();
        assert!(document.contains("Approval"));
        assert!(document.contains("ApproveChanges"));
    }

    #[test]
    fn test_synth_missing_file() {
        let result = synth_plan(Path::new("/nonexistent/config.json"), OutputFormat::Json);
        assert!(result.is_err());
    }

    #[test]
    fn test_save_document() {
        let temp_dir = TempDir::new().unwrap();
        let out = temp_dir.path().join("plan.json");

        save_document("{}", &out).unwrap();
        assert_eq!(fs::read_to_string(&out).unwrap(), "{}");
    }
}
