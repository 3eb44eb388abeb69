//! Artifact handles passed between pipeline actions
//!
//! An artifact is an opaque named reference: a producing action writes it and
//! a consuming action in a later stage reads it. No content semantics are
//! modeled here; storage and transfer belong to the execution service.

#![allow(clippy::must_use_candidate, clippy::return_self_not_must_use)]

use super::errors::ValidationError;
use super::types::Validate;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// An opaque named handle for data passed from one action to another
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Artifact {
    name: String,
}

impl Artifact {
    /// Creates an artifact with a freshly generated unique name
    pub fn new() -> Self {
        let id = Uuid::new_v4().simple().to_string();
        Self {
            name: format!("artifact-{}", &id[..8]),
        }
    }

    /// Creates an artifact with the given name
    pub fn named(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Returns the artifact name
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Default for Artifact {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Artifact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Artifact({})", self.name)
    }
}

impl Validate for Artifact {
    type Error = ValidationError;

    fn validate(&self) -> Result<(), Self::Error> {
        if self.name.is_empty() {
            return Err(ValidationError::EmptyName);
        }

        let valid = self
            .name
            .chars()
            .all(|c| c.is_alphanumeric() || c == '_' || c == '-');
        if !valid {
            return Err(ValidationError::InvalidNameChars {
                name: self.name.clone(),
            });
        }

        Ok(())
    }
}
