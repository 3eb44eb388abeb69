//! Infrastructure layer
//!
//! Declarative models of the external collaborators a pipeline references:
//! the container registry, the managed build runner, and process-wide
//! logging setup. Everything here describes; nothing here executes.

mod buildspec;
mod logging;
mod project;
mod registry;

pub use buildspec::{
    BUILDSPEC_VERSION, BuildArtifacts, BuildSpec, ImageDefinition, MANIFEST_PATH, Phase, Phases,
    image_definitions_manifest,
};
pub use logging::init_logging;
pub use project::{BuildEnvironment, BuildProject, DEFAULT_BUILD_IMAGE};
pub use registry::{ContainerRepository, Effect, PolicyStatement, RemovalPolicy};
