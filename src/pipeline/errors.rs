//! Error types for the pipeline domain

use thiserror::Error;

/// Errors that can occur while assembling or rendering a pipeline definition
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PipelineError {
    /// Validation failed with specified reason
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),

    /// Configuration could not be loaded or parsed
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO error occurred
    #[error("IO error: {0}")]
    Io(String),

    /// A definition document could not be rendered
    #[error("Serialization error: {0}")]
    Serialize(String),
}

impl From<std::io::Error> for PipelineError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for PipelineError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialize(err.to_string())
    }
}

impl From<serde_yaml::Error> for PipelineError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Serialize(err.to_string())
    }
}

/// Validation errors for pipeline definition components
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Name cannot be empty
    #[error("Name cannot be empty")]
    EmptyName,

    /// Name too long
    #[error("Name too long: max {max} characters, got {len}")]
    NameTooLong {
        /// Maximum allowed length.
        max: usize,
        /// Actual length of the name.
        len: usize,
    },

    /// Invalid characters in name
    #[error("Invalid characters in name: '{name}'")]
    InvalidNameChars {
        /// The invalid name.
        name: String,
    },

    /// Pipeline must have at least one stage
    #[error("Pipeline must have at least one stage")]
    EmptyPipeline,

    /// Stage must have at least one action
    #[error("Stage '{stage}' must have at least one action")]
    EmptyStage {
        /// Name of the empty stage.
        stage: String,
    },

    /// An action consumes an artifact no earlier stage produced
    #[error("Action '{action}' consumes artifact '{artifact}' before any earlier stage produces it")]
    UnboundArtifact {
        /// Name of the unbound artifact.
        artifact: String,
        /// Name of the consuming action.
        action: String,
    },

    /// An artifact is produced by more than one action
    #[error("Artifact '{artifact}' is produced more than once")]
    DuplicateArtifact {
        /// Name of the duplicated artifact.
        artifact: String,
    },

    /// A required configuration field is missing or empty
    #[error("Configuration field '{field}' must not be empty")]
    MissingField {
        /// Name of the missing field.
        field: &'static str,
    },

    /// A configuration field holds a value outside its allowed shape
    #[error("Invalid value for configuration field '{field}': '{value}'")]
    InvalidFieldValue {
        /// Name of the offending field.
        field: &'static str,
        /// The rejected value.
        value: String,
    },
}
