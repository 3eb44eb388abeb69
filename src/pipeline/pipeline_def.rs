//! Pipeline definition and builder

#![allow(clippy::must_use_candidate, clippy::return_self_not_must_use)]

use crate::pipeline::errors::ValidationError;
use crate::pipeline::stage::Stage;
use crate::pipeline::types::Validate;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// An ordered pipeline definition ready to be handed to an execution service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pipeline {
    /// Pipeline name
    pub name: String,

    /// Stages in pipeline, in execution order
    pub stages: Vec<Stage>,
}

impl Validate for Pipeline {
    type Error = ValidationError;

    fn validate(&self) -> Result<(), Self::Error> {
        if self.name.is_empty() {
            return Err(ValidationError::EmptyName);
        }

        if self.name.len() > 100 {
            return Err(ValidationError::NameTooLong {
                max: 100,
                len: self.name.len(),
            });
        }

        if self.stages.is_empty() {
            return Err(ValidationError::EmptyPipeline);
        }

        for stage in &self.stages {
            stage.validate()?;
        }

        // An artifact must come from a strictly earlier stage than any
        // action that consumes it, and may be produced only once.
        let mut produced: HashSet<&str> = HashSet::new();
        for stage in &self.stages {
            for action in &stage.actions {
                for input in action.inputs() {
                    if !produced.contains(input.name()) {
                        return Err(ValidationError::UnboundArtifact {
                            artifact: input.name().to_string(),
                            action: action.name.clone(),
                        });
                    }
                }
            }

            for artifact in stage.produced_artifacts() {
                if !produced.insert(artifact.name()) {
                    return Err(ValidationError::DuplicateArtifact {
                        artifact: artifact.name().to_string(),
                    });
                }
            }
        }

        Ok(())
    }
}

impl Pipeline {
    /// Creates a new pipeline builder
    pub fn builder() -> PipelineBuilder {
        PipelineBuilder::new()
    }

    /// Returns pipeline name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns number of stages
    pub fn stage_count(&self) -> usize {
        self.stages.len()
    }

    /// Returns the stage names in execution order
    pub fn stage_names(&self) -> Vec<&str> {
        self.stages.iter().map(|s| s.name.as_str()).collect()
    }
}

impl fmt::Display for Pipeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Pipeline({}): {} stages", self.name, self.stages.len())
    }
}

/// Builder for creating pipelines
#[derive(Debug, Clone)]
pub struct PipelineBuilder {
    pipeline: Pipeline,
}

impl PipelineBuilder {
    /// Creates a new pipeline builder
    pub fn new() -> Self {
        Self {
            pipeline: Pipeline {
                name: String::new(),
                stages: Vec::new(),
            },
        }
    }

    /// Sets pipeline name
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.pipeline.name = name.into();
        self
    }

    /// Adds a stage to pipeline
    pub fn stage(mut self, stage: Stage) -> Self {
        self.pipeline.stages.push(stage);
        self
    }

    /// Adds multiple stages to pipeline
    pub fn stages(mut self, mut stages: Vec<Stage>) -> Self {
        self.pipeline.stages.append(&mut stages);
        self
    }

    /// Builds pipeline
    #[allow(clippy::missing_errors_doc)]
    pub fn build(self) -> Result<Pipeline, ValidationError> {
        self.pipeline.validate()?;
        Ok(self.pipeline)
    }

    /// Builds pipeline without validation (for internal use)
    #[must_use]
    pub fn build_unchecked(self) -> Pipeline {
        self.pipeline
    }
}

impl Default for PipelineBuilder {
    fn default() -> Self {
        Self::new()
    }
}
