//! Build specification document
//!
//! The phased command document the managed build runner executes. The only
//! constructor that matters here is [`BuildSpec::registry_push`], which
//! produces the build-tag-push sequence for a container repository plus the
//! image definitions manifest the deploy side consumes.

#![allow(clippy::must_use_candidate, clippy::return_self_not_must_use)]

use crate::commands;
use crate::infrastructure::registry::ContainerRepository;
use crate::pipeline::errors::PipelineError;
use serde::{Deserialize, Serialize};

/// Document format version understood by the build runner
pub const BUILDSPEC_VERSION: &str = "0.2";

/// File name of the image definitions manifest written by the post-build
/// phase
pub const MANIFEST_PATH: &str = "image-definitions.json";

/// A phased command document for the build runner
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildSpec {
    /// Document format version, currently `0.2`
    pub version: String,

    /// Commands grouped by phase
    pub phases: Phases,

    /// Files the runner collects as the build output artifact
    pub artifacts: BuildArtifacts,
}

/// The three phases of a build run, executed in declaration order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Phases {
    /// Runs before the build proper, typically authentication
    pub pre_build: Phase,

    /// The build itself
    pub build: Phase,

    /// Runs after a successful build
    pub post_build: Phase,
}

/// Commands of a single phase
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Phase {
    /// Shell commands, run in order
    pub commands: Vec<String>,
}

impl Phase {
    /// Creates a phase from a command list
    pub fn new(commands: Vec<String>) -> Self {
        Self { commands }
    }
}

/// Output files collected by the runner
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildArtifacts {
    /// Paths relative to the build working directory
    pub files: Vec<String>,
}

impl BuildSpec {
    /// Builds the spec that logs in to the registry, builds the container
    /// image, pushes it under `latest` and the commit tag, and writes the
    /// image definitions manifest.
    ///
    /// The runner is expected to provide `$SOURCE_VERSION` with the resolved
    /// source revision and `$REGISTRY_USER` / `$REGISTRY_PASSWORD` with
    /// registry credentials.
    pub fn registry_push(repository: &ContainerRepository) -> Self {
        let latest = repository.tagged_uri("latest");
        let uri = repository.uri();
        let manifest = image_definitions_manifest(repository);

        let pre_build = commands![
            "echo Logging in to the container registry...",
            format!(
                "echo $REGISTRY_PASSWORD | docker login --username $REGISTRY_USER --password-stdin {}",
                repository.host
            ),
            "COMMIT_HASH=$(echo $SOURCE_VERSION | cut -c 1-15)",
            "IMAGE_TAG=${COMMIT_HASH:=latest}",
        ];

        let build = commands![
            "echo Build started on `date`",
            "echo Building the container image...",
            format!("docker build -t {latest} ."),
            format!("docker tag {latest} {uri}:$IMAGE_TAG"),
            "echo Pushing the container image...",
            format!("docker push {latest}"),
            format!("docker push {uri}:$IMAGE_TAG"),
        ];

        let post_build = commands![
            "echo Build completed on `date`",
            format!("echo Writing {MANIFEST_PATH}"),
            format!("printf '{manifest}' > {MANIFEST_PATH}"),
        ];

        Self {
            version: BUILDSPEC_VERSION.to_string(),
            phases: Phases {
                pre_build: Phase::new(pre_build),
                build: Phase::new(build),
                post_build: Phase::new(post_build),
            },
            artifacts: BuildArtifacts {
                files: vec![MANIFEST_PATH.to_string()],
            },
        }
    }

    /// Serializes the spec as pretty-printed JSON
    #[allow(clippy::missing_errors_doc)]
    pub fn to_json(&self) -> Result<String, PipelineError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Serializes the spec as YAML
    #[allow(clippy::missing_errors_doc)]
    pub fn to_yaml(&self) -> Result<String, PipelineError> {
        Ok(serde_yaml::to_string(self)?)
    }
}

/// One entry of the image definitions manifest
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageDefinition {
    /// Logical container name the deploy side binds the image to
    pub name: String,

    /// Fully qualified image URI including tag
    #[serde(rename = "imageUri")]
    pub image_uri: String,
}

/// Renders the manifest document written by the post-build phase.
///
/// The manifest is a one-element JSON array naming the repository and its
/// `latest` image URI.
pub fn image_definitions_manifest(repository: &ContainerRepository) -> String {
    format!(
        r#"[{{"name":"{}","imageUri":"{}"}}]"#,
        repository.name,
        repository.tagged_uri("latest")
    )
}
