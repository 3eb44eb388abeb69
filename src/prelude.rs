//! Prelude module for common imports

// Re-export macros
pub use crate::{actions, approval, artifact, commands, pipeline, stage};

// Re-export all pipeline types with full paths
pub use crate::pipeline::action::{
    Action, ActionKind, BuildRun, GitHubSource, ManualApproval, SourceTrigger,
};
pub use crate::pipeline::artifact::Artifact;
pub use crate::pipeline::config::{DEFAULT_REGISTRY_HOST, PipelineConfig};
pub use crate::pipeline::errors::{PipelineError, ValidationError};
pub use crate::pipeline::pipeline_def::{Pipeline, PipelineBuilder};
pub use crate::pipeline::plan::{BUILD_ARTIFACT, DeliveryPlan, SOURCE_ARTIFACT};
pub use crate::pipeline::stage::{Stage, StageBuilder};
pub use crate::pipeline::types::{SecretString, Validate};

// Re-export infrastructure types
pub use crate::infrastructure::{
    BuildEnvironment, BuildProject, BuildSpec, ContainerRepository, Effect, ImageDefinition,
    MANIFEST_PATH, PolicyStatement, RemovalPolicy, image_definitions_manifest,
};
