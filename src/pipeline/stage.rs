//! Stage types for pipeline definition
//!
//! This module defines stage types and their builder pattern.

#![allow(clippy::must_use_candidate, clippy::return_self_not_must_use)]

use super::Validate;
use super::action::Action;
use super::errors::ValidationError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A stage in a pipeline.
///
/// Stages run sequentially in declaration order; the actions inside a stage
/// are an ordered group handed to the execution service as one phase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stage {
    /// Stage name
    pub name: String,

    /// Actions in this stage
    pub actions: Vec<Action>,
}

impl Validate for Stage {
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

        if self.actions.is_empty() {
            return Err(ValidationError::EmptyStage {
                stage: self.name.clone(),
            });
        }

        for action in &self.actions {
            action.validate()?;
        }

        Ok(())
    }
}

impl Stage {
    /// Creates a new stage
    pub fn new(name: impl Into<String>, actions: Vec<Action>) -> Self {
        Self {
            name: name.into(),
            actions,
        }
    }

    /// Creates a stage holding a single action
    pub fn single(name: impl Into<String>, action: Action) -> Self {
        Self::new(name, vec![action])
    }

    /// Returns the artifacts produced by the actions of this stage
    pub fn produced_artifacts(&self) -> impl Iterator<Item = &super::artifact::Artifact> {
        self.actions.iter().flat_map(Action::outputs)
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Stage({}): {} actions", self.name, self.actions.len())
    }
}

/// Builder for creating stages
pub struct StageBuilder {
    stage: Stage,
}

impl StageBuilder {
    /// Creates a new stage builder
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            stage: Stage::new(name, Vec::new()),
        }
    }

    /// Adds an action to the stage
    pub fn action(mut self, action: Action) -> Self {
        self.stage.actions.push(action);
        self
    }

    /// Adds multiple actions to the stage
    pub fn actions(mut self, mut actions: Vec<Action>) -> Self {
        self.stage.actions.append(&mut actions);
        self
    }

    /// Builds the stage
    #[allow(clippy::missing_errors_doc)]
    pub fn build(self) -> Result<Stage, ValidationError> {
        self.stage.validate()?;
        Ok(self.stage)
    }

    /// Builds the stage without validation (for internal use)
    #[must_use]
    pub fn build_unchecked(self) -> Stage {
        self.stage
    }
}

#[cfg(test)]
mod tests {
    use super::super::artifact::Artifact;
    use super::*;

    #[test]
    fn test_stage_creation() {
        let stage = Stage::new("Approval", vec![Action::manual_approval("ApproveChanges")]);

        assert_eq!(stage.name, "Approval");
        assert_eq!(stage.actions.len(), 1);
    }

    #[test]
    fn test_single_action_stage() {
        let stage = Stage::single("Approval", Action::manual_approval("ApproveChanges"));
        assert_eq!(stage.actions.len(), 1);
        assert_eq!(stage.actions[0].name, "ApproveChanges");
    }

    #[test]
    fn test_stage_validation_empty_name() {
        let stage = Stage::new("", vec![Action::manual_approval("ApproveChanges")]);
        assert!(stage.validate().is_err());
    }

    #[test]
    fn test_stage_validation_name_too_long() {
        let long_name = "a".repeat(101);
        let stage = Stage::new(long_name, vec![Action::manual_approval("ApproveChanges")]);
        let result = stage.validate();
        assert!(matches!(result, Err(ValidationError::NameTooLong { .. })));
    }

    #[test]
    fn test_stage_validation_empty_actions() {
        let stage = Stage::new("Build", vec![]);
        let result = stage.validate();
        assert!(matches!(result, Err(ValidationError::EmptyStage { .. })));
    }

    #[test]
    fn test_stage_validation_checks_actions() {
        let stage = Stage::new("Approval", vec![Action::manual_approval("")]);
        assert_eq!(stage.validate(), Err(ValidationError::EmptyName));
    }

    #[test]
    fn test_produced_artifacts() {
        let stage = Stage::single(
            "Build",
            Action::build(
                "Build",
                "dev-demo",
                Artifact::named("SourceOutput"),
                vec![Artifact::named("BuildOutput")],
            ),
        );

        let produced: Vec<_> = stage.produced_artifacts().collect();
        assert_eq!(produced, vec![&Artifact::named("BuildOutput")]);
    }

    #[test]
    fn test_stage_display() {
        let stage = Stage::single("Approval", Action::manual_approval("ApproveChanges"));
        assert_eq!(stage.to_string(), "Stage(Approval): 1 actions");
    }

    #[test]
    fn test_stage_builder() {
        let stage = StageBuilder::new("Approval")
            .action(Action::manual_approval("ApproveChanges"))
            .build()
            .unwrap();

        assert_eq!(stage.name, "Approval");
        assert_eq!(stage.actions.len(), 1);
    }

    #[test]
    fn test_stage_builder_rejects_empty() {
        let result = StageBuilder::new("Empty").build();
        assert!(matches!(result, Err(ValidationError::EmptyStage { .. })));
    }
}
