//! Pipeline domain types and logic

// Make submodules public
pub mod action;
pub mod artifact;
pub mod config;
pub mod errors;
pub mod pipeline_def;
pub mod plan;
pub mod stage;
pub mod types;

// Re-export public types from submodules
pub use action::{Action, ActionKind, BuildRun, GitHubSource, ManualApproval, SourceTrigger};
pub use artifact::Artifact;
pub use config::{DEFAULT_REGISTRY_HOST, PipelineConfig};
pub use errors::{PipelineError, ValidationError};
pub use pipeline_def::{Pipeline, PipelineBuilder};
pub use plan::{BUILD_ARTIFACT, DeliveryPlan, SOURCE_ARTIFACT};
pub use stage::{Stage, StageBuilder};
pub use types::{SecretString, Validate};
