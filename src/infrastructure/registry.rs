//! Container registry model
//!
//! Declarative description of the registry repository a pipeline pushes to,
//! together with the authorization requests the build identity needs against
//! it. Nothing here talks to a registry; the execution service materializes
//! both the repository and the grants.

#![allow(clippy::must_use_candidate, clippy::return_self_not_must_use)]

use crate::pipeline::errors::ValidationError;
use crate::pipeline::types::Validate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// What happens to the repository when its owning deployment is removed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum RemovalPolicy {
    /// Keep the repository and its images
    #[default]
    Retain,

    /// Delete the repository together with the deployment
    Destroy,
}

/// A repository in the container registry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContainerRepository {
    /// Repository name, e.g. `cicd/demo`
    pub name: String,

    /// Registry host the repository lives under
    pub host: String,

    /// Removal policy requested for the repository
    #[serde(default)]
    pub removal_policy: RemovalPolicy,
}

impl ContainerRepository {
    /// Creates a repository with the default removal policy
    pub fn new(name: impl Into<String>, host: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            host: host.into(),
            removal_policy: RemovalPolicy::default(),
        }
    }

    /// Sets the removal policy
    pub fn with_removal_policy(mut self, policy: RemovalPolicy) -> Self {
        self.removal_policy = policy;
        self
    }

    /// Returns the repository URI, `<host>/<name>`
    pub fn uri(&self) -> String {
        format!("{}/{}", self.host, self.name)
    }

    /// Returns the repository URI with the given tag appended
    pub fn tagged_uri(&self, tag: &str) -> String {
        format!("{}:{}", self.uri(), tag)
    }
}

impl fmt::Display for ContainerRepository {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.uri())
    }
}

impl Validate for ContainerRepository {
    type Error = ValidationError;

    fn validate(&self) -> Result<(), Self::Error> {
        if self.name.is_empty() {
            return Err(ValidationError::EmptyName);
        }

        // Registry repository names: lowercase path segments.
        let valid = self
            .name
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || "._-/".contains(c));
        if !valid {
            return Err(ValidationError::InvalidNameChars {
                name: self.name.clone(),
            });
        }

        // The host lands verbatim in generated shell commands.
        let host_ok = self
            .host
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || ".:-".contains(c));
        if self.host.is_empty() || !host_ok {
            return Err(ValidationError::InvalidFieldValue {
                field: "registryHost",
                value: self.host.clone(),
            });
        }

        Ok(())
    }
}

/// Permission effect carried by a policy statement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Effect {
    /// Grant the listed actions
    Allow,

    /// Refuse the listed actions
    Deny,
}

/// A declarative authorization request carried in the definition document.
///
/// Statements are requests to the external authorization system, not checks
/// enforced by this crate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicyStatement {
    /// Whether the statement grants or refuses
    pub effect: Effect,

    /// Action names the statement covers
    pub actions: Vec<String>,

    /// Resources the statement is scoped to; `*` for unscoped
    pub resources: Vec<String>,
}

impl PolicyStatement {
    /// Creates an allow statement
    pub fn allow(actions: Vec<String>, resources: Vec<String>) -> Self {
        Self {
            effect: Effect::Allow,
            actions,
            resources,
        }
    }

    /// Unscoped statement letting the build identity obtain a registry
    /// authentication token
    pub fn registry_auth() -> Self {
        Self::allow(
            vec!["registry:GetAuthorizationToken".to_string()],
            vec!["*".to_string()],
        )
    }

    /// Statement scoped to one repository letting the build identity upload
    /// layers and put images
    pub fn registry_push(repository: &ContainerRepository) -> Self {
        Self::allow(
            vec![
                "registry:BatchCheckLayerAvailability".to_string(),
                "registry:CompleteLayerUpload".to_string(),
                "registry:InitiateLayerUpload".to_string(),
                "registry:PutImage".to_string(),
                "registry:UploadLayerPart".to_string(),
            ],
            vec![repository.uri()],
        )
    }
}
