//! Pipeline configuration
//!
//! The configuration record read once at startup. It names the source
//! repository to poll, carries the access token, and decides whether a
//! manual approval gate sits between Source and Build.

#![allow(clippy::must_use_candidate)]

use super::errors::{PipelineError, ValidationError};
use super::types::{SecretString, Validate};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Registry host used when the configuration does not name one
pub const DEFAULT_REGISTRY_HOST: &str = "localhost:5000";

static ENV_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-z][a-z0-9-]{0,23}$").unwrap());
static REPO_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9][A-Za-z0-9._-]*$").unwrap());

/// Input record for the pipeline definition builder.
///
/// Loaded from a JSON document and never mutated afterwards. Field names in
/// the document follow the original options file
/// (`gitHubSecret`, `manualApprovals`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Environment name, e.g. `dev` or `prod`. Prefixes all generated names.
    pub env: String,

    /// Access token used by the source poll action
    #[serde(rename = "gitHubSecret")]
    pub github_secret: SecretString,

    /// Owner of the source repository
    #[serde(rename = "gitHubRepositoryOwner")]
    pub github_repository_owner: String,

    /// Name of the source repository
    #[serde(rename = "gitHubRepository")]
    pub github_repository: String,

    /// Branch the source action polls
    #[serde(rename = "gitHubBranch")]
    pub github_branch: String,

    /// Whether to insert a manual approval stage between Source and Build
    #[serde(rename = "manualApprovals")]
    pub manual_approvals: bool,

    /// Container registry host; [`DEFAULT_REGISTRY_HOST`] when absent
    #[serde(rename = "registryHost", skip_serializing_if = "Option::is_none", default)]
    pub registry_host: Option<String>,
}

impl PipelineConfig {
    /// Loads and parses a configuration file
    #[allow(clippy::missing_errors_doc)]
    pub fn from_path(path: &Path) -> Result<Self, PipelineError> {
        tracing::debug!("loading pipeline configuration: {}", path.display());
        let content = fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Parses a configuration document from a JSON string
    #[allow(clippy::missing_errors_doc)]
    pub fn from_json(content: &str) -> Result<Self, PipelineError> {
        serde_json::from_str(content)
            .map_err(|e| PipelineError::Config(format!("invalid configuration document: {e}")))
    }

    /// Returns the registry host, falling back to [`DEFAULT_REGISTRY_HOST`]
    pub fn registry_host(&self) -> &str {
        self.registry_host.as_deref().unwrap_or(DEFAULT_REGISTRY_HOST)
    }

    /// Returns the registry repository name for this configuration
    pub fn repository_name(&self) -> String {
        format!("cicd/{}", self.github_repository)
    }

    /// Returns the build project name for this configuration
    pub fn project_name(&self) -> String {
        format!("{}-{}", self.env, self.github_repository)
    }

    /// Returns the pipeline name for this configuration
    pub fn pipeline_name(&self) -> String {
        format!("{}-{}-github-pipeline", self.env, self.github_repository)
    }
}

impl Validate for PipelineConfig {
    type Error = ValidationError;

    fn validate(&self) -> Result<(), Self::Error> {
        if self.env.is_empty() {
            return Err(ValidationError::MissingField { field: "env" });
        }
        if !ENV_PATTERN.is_match(&self.env) {
            return Err(ValidationError::InvalidFieldValue {
                field: "env",
                value: self.env.clone(),
            });
        }

        if self.github_secret.is_empty() {
            return Err(ValidationError::MissingField {
                field: "gitHubSecret",
            });
        }

        if self.github_repository_owner.is_empty() {
            return Err(ValidationError::MissingField {
                field: "gitHubRepositoryOwner",
            });
        }
        if !REPO_PATTERN.is_match(&self.github_repository_owner) {
            return Err(ValidationError::InvalidFieldValue {
                field: "gitHubRepositoryOwner",
                value: self.github_repository_owner.clone(),
            });
        }

        if self.github_repository.is_empty() {
            return Err(ValidationError::MissingField {
                field: "gitHubRepository",
            });
        }
        if !REPO_PATTERN.is_match(&self.github_repository) {
            return Err(ValidationError::InvalidFieldValue {
                field: "gitHubRepository",
                value: self.github_repository.clone(),
            });
        }

        if self.github_branch.is_empty() {
            return Err(ValidationError::MissingField {
                field: "gitHubBranch",
            });
        }
        if self.github_branch.chars().any(char::is_whitespace) {
            return Err(ValidationError::InvalidFieldValue {
                field: "gitHubBranch",
                value: self.github_branch.clone(),
            });
        }

        if let Some(host) = &self.registry_host
            && (host.is_empty() || host.chars().any(char::is_whitespace))
        {
            return Err(ValidationError::InvalidFieldValue {
                field: "registryHost",
                value: host.clone(),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    fn sample_config() -> PipelineConfig {
        PipelineConfig {
            env: "dev".to_string(),
            github_secret: SecretString::new("ghp_token"),
            github_repository_owner: "acme".to_string(),
            github_repository: "demo".to_string(),
            github_branch: "main".to_string(),
            manual_approvals: false,
            registry_host: None,
        }
    }

    #[test]
    fn test_parses_original_field_names() {
        let json = r#"{
            "env": "dev",
            "gitHubSecret": "ghp_token",
            "gitHubRepositoryOwner": "acme",
            "gitHubRepository": "demo",
            "gitHubBranch": "main",
            "manualApprovals": true
        }"#;

        let config = PipelineConfig::from_json(json).unwrap();
        assert_eq!(config.env, "dev");
        assert_eq!(config.github_secret.expose(), "ghp_token");
        assert_eq!(config.github_repository_owner, "acme");
        assert_eq!(config.github_repository, "demo");
        assert_eq!(config.github_branch, "main");
        assert!(config.manual_approvals);
        assert_eq!(config.registry_host, None);
    }

    #[test]
    fn test_missing_field_is_a_config_error() {
        let json = r#"{ "env": "dev" }"#;
        let err = PipelineConfig::from_json(json).unwrap_err();
        assert!(matches!(err, PipelineError::Config(_)));
    }

    #[test]
    fn test_invalid_json_is_a_config_error() {
        let err = PipelineConfig::from_json("not json").unwrap_err();
        assert!(matches!(err, PipelineError::Config(_)));
    }

    #[test]
    fn test_from_path_round_trip() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{
                "env": "prod",
                "gitHubSecret": "s",
                "gitHubRepositoryOwner": "acme",
                "gitHubRepository": "demo",
                "gitHubBranch": "main",
                "manualApprovals": false,
                "registryHost": "registry.acme.io"
            }}"#
        )
        .unwrap();

        let config = PipelineConfig::from_path(file.path()).unwrap();
        assert_eq!(config.env, "prod");
        assert_eq!(config.registry_host(), "registry.acme.io");
    }

    #[test]
    fn test_from_path_missing_file_is_io_error() {
        let err = PipelineConfig::from_path(Path::new("/no/such/options.json")).unwrap_err();
        assert!(matches!(err, PipelineError::Io(_)));
    }

    #[test]
    fn test_valid_config_passes_validation() {
        assert!(sample_config().validate().is_ok());
    }

    #[test]
    fn test_empty_env_is_missing_field() {
        let mut config = sample_config();
        config.env = String::new();
        assert_eq!(
            config.validate(),
            Err(ValidationError::MissingField { field: "env" })
        );
    }

    #[test]
    fn test_uppercase_env_is_rejected() {
        let mut config = sample_config();
        config.env = "Dev".to_string();
        assert!(matches!(
            config.validate(),
            Err(ValidationError::InvalidFieldValue { field: "env", .. })
        ));
    }

    #[test]
    fn test_empty_secret_is_rejected() {
        let mut config = sample_config();
        config.github_secret = SecretString::new("");
        assert_eq!(
            config.validate(),
            Err(ValidationError::MissingField {
                field: "gitHubSecret"
            })
        );
    }

    #[test]
    fn test_owner_with_space_is_rejected() {
        let mut config = sample_config();
        config.github_repository_owner = "not valid".to_string();
        assert!(matches!(
            config.validate(),
            Err(ValidationError::InvalidFieldValue {
                field: "gitHubRepositoryOwner",
                ..
            })
        ));
    }

    #[test]
    fn test_branch_with_space_is_rejected() {
        let mut config = sample_config();
        config.github_branch = "feature branch".to_string();
        assert!(matches!(
            config.validate(),
            Err(ValidationError::InvalidFieldValue {
                field: "gitHubBranch",
                ..
            })
        ));
    }

    #[test]
    fn test_empty_registry_host_is_rejected() {
        let mut config = sample_config();
        config.registry_host = Some(String::new());
        assert!(matches!(
            config.validate(),
            Err(ValidationError::InvalidFieldValue {
                field: "registryHost",
                ..
            })
        ));
    }

    #[test]
    fn test_registry_host_defaults() {
        let config = sample_config();
        assert_eq!(config.registry_host(), DEFAULT_REGISTRY_HOST);
    }

    #[test]
    fn test_derived_names() {
        let config = sample_config();
        assert_eq!(config.repository_name(), "cicd/demo");
        assert_eq!(config.project_name(), "dev-demo");
        assert_eq!(config.pipeline_name(), "dev-demo-github-pipeline");
    }

    #[test]
    fn test_debug_output_redacts_secret() {
        let config = sample_config();
        let debug = format!("{:?}", config);
        assert!(!debug.contains("ghp_token"));
        assert!(debug.contains("SecretString(***)"));
    }
}
