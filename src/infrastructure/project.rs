//! Managed build project model
//!
//! Describes the build runner a pipeline's build action delegates to: which
//! container image runs the build, whether the runner may use the host
//! Docker daemon, the build specification, and the authorization requests
//! attached to the runner identity.

#![allow(clippy::must_use_candidate, clippy::return_self_not_must_use)]

use crate::infrastructure::buildspec::BuildSpec;
use crate::infrastructure::registry::PolicyStatement;
use crate::pipeline::errors::ValidationError;
use crate::pipeline::types::Validate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Runner image used when none is configured
pub const DEFAULT_BUILD_IMAGE: &str = "standard:4.0";

/// Execution environment of a build project
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildEnvironment {
    /// Label of the runner container image
    pub build_image: String,

    /// Whether the runner gets access to the host Docker daemon.
    /// Required for builds that produce container images.
    pub privileged: bool,
}

impl BuildEnvironment {
    /// Creates an environment running the given image, unprivileged
    pub fn new(build_image: impl Into<String>) -> Self {
        Self {
            build_image: build_image.into(),
            privileged: false,
        }
    }

    /// Sets the privileged flag
    pub fn privileged(mut self, privileged: bool) -> Self {
        self.privileged = privileged;
        self
    }
}

impl Default for BuildEnvironment {
    fn default() -> Self {
        Self::new(DEFAULT_BUILD_IMAGE)
    }
}

/// A managed build project
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildProject {
    /// Project name, e.g. `dev-demo`
    pub name: String,

    /// Execution environment
    pub environment: BuildEnvironment,

    /// Commands the project runs
    pub spec: BuildSpec,

    /// Authorization requests for the runner identity
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub grants: Vec<PolicyStatement>,
}

impl BuildProject {
    /// Creates a project with the default environment and no grants
    pub fn new(name: impl Into<String>, spec: BuildSpec) -> Self {
        Self {
            name: name.into(),
            environment: BuildEnvironment::default(),
            spec,
            grants: Vec::new(),
        }
    }

    /// Replaces the execution environment
    pub fn with_environment(mut self, environment: BuildEnvironment) -> Self {
        self.environment = environment;
        self
    }

    /// Appends an authorization request
    pub fn with_grant(mut self, statement: PolicyStatement) -> Self {
        self.grants.push(statement);
        self
    }
}

impl fmt::Display for BuildProject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Project({}): image {}",
            self.name, self.environment.build_image
        )
    }
}

impl Validate for BuildProject {
    type Error = ValidationError;

    fn validate(&self) -> Result<(), Self::Error> {
        if self.name.is_empty() {
            return Err(ValidationError::EmptyName);
        }

        if self.environment.build_image.is_empty() {
            return Err(ValidationError::MissingField {
                field: "buildImage",
            });
        }

        Ok(())
    }
}
