//! Delivery plan assembly
//!
//! Turns a validated [`PipelineConfig`] into the complete definition
//! document: the container repository, the build project that pushes to it,
//! and the release pipeline wiring source to build. Assembly is a pure
//! function of the configuration, so synthesizing the same configuration
//! twice yields identical documents.

#![allow(clippy::must_use_candidate, clippy::return_self_not_must_use)]

use crate::infrastructure::{
    BuildEnvironment, BuildProject, BuildSpec, ContainerRepository, PolicyStatement, RemovalPolicy,
};
use crate::pipeline::action::{Action, GitHubSource};
use crate::pipeline::artifact::Artifact;
use crate::pipeline::config::PipelineConfig;
use crate::pipeline::errors::PipelineError;
use crate::pipeline::pipeline_def::Pipeline;
use crate::pipeline::stage::Stage;
use crate::pipeline::types::Validate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Name of the artifact carrying the checked-out source
pub const SOURCE_ARTIFACT: &str = "SourceOutput";

/// Name of the artifact carrying the build output
pub const BUILD_ARTIFACT: &str = "BuildOutput";

/// The complete delivery definition synthesized from one configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeliveryPlan {
    /// Container repository the build pushes images to
    pub repository: ContainerRepository,

    /// Build project the pipeline's build action delegates to
    pub project: BuildProject,

    /// The release pipeline
    pub pipeline: Pipeline,
}

impl DeliveryPlan {
    /// Assembles the plan from a configuration.
    ///
    /// The configuration is validated up front and the assembled pipeline is
    /// validated before it is returned, so a plan in hand is always
    /// internally consistent.
    ///
    /// The pipeline has a `Source` stage polling the configured GitHub
    /// repository and a `Build` stage running the project; when
    /// `manualApprovals` is set an `Approval` stage sits between them.
    ///
    /// # Errors
    ///
    /// Returns [`PipelineError::Validation`] when the configuration or the
    /// assembled pipeline is rejected.
    pub fn from_config(config: &PipelineConfig) -> Result<Self, PipelineError> {
        config.validate()?;
        tracing::debug!("assembling delivery plan for environment {}", config.env);

        let repository = ContainerRepository::new(config.repository_name(), config.registry_host())
            .with_removal_policy(RemovalPolicy::Destroy);
        repository.validate()?;

        let project = BuildProject::new(
            config.project_name(),
            BuildSpec::registry_push(&repository),
        )
        .with_environment(BuildEnvironment::default().privileged(true))
        .with_grant(PolicyStatement::registry_auth())
        .with_grant(PolicyStatement::registry_push(&repository));
        project.validate()?;

        let source_output = Artifact::named(SOURCE_ARTIFACT);
        let build_output = Artifact::named(BUILD_ARTIFACT);

        let source = Action::source(
            "GithubSource",
            GitHubSource::new(
                config.github_repository_owner.as_str(),
                config.github_repository.as_str(),
                config.github_branch.as_str(),
                config.github_secret.clone(),
                source_output.clone(),
            ),
        );

        let build = Action::build(
            "Build",
            project.name.as_str(),
            source_output,
            vec![build_output],
        );

        let mut builder = Pipeline::builder()
            .name(config.pipeline_name())
            .stage(Stage::single("Source", source));

        if config.manual_approvals {
            builder = builder.stage(Stage::single(
                "Approval",
                Action::manual_approval("ApproveChanges"),
            ));
        }

        let pipeline = builder.stage(Stage::single("Build", build)).build()?;

        Ok(Self {
            repository,
            project,
            pipeline,
        })
    }

    /// Serializes the plan as pretty-printed JSON
    ///
    /// # Errors
    ///
    /// Returns [`PipelineError::Serialize`] when serialization fails.
    pub fn to_json(&self) -> Result<String, PipelineError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Serializes the plan as YAML
    ///
    /// # Errors
    ///
    /// Returns [`PipelineError::Serialize`] when serialization fails.
    pub fn to_yaml(&self) -> Result<String, PipelineError> {
        Ok(serde_yaml::to_string(self)?)
    }
}

impl fmt::Display for DeliveryPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Plan({}): {} stages",
            self.pipeline.name(),
            self.pipeline.stage_count()
        )
    }
}


#[cfg(test)]
mod property_tests {
    use super::*;
    use crate::pipeline::types::SecretString;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn stage_sequence_follows_approval_flag(
            env in "[a-z][a-z0-9-]{0,10}",
            repo in "[a-z][a-z0-9]{0,12}",
            manual_approvals in any::<bool>(),
        ) {
            let config = PipelineConfig {
                env,
                github_secret: SecretString::from("ghp_sample"),
                github_repository_owner: "acme".to_string(),
                github_repository: repo,
                github_branch: "main".to_string(),
                manual_approvals,
                registry_host: None,
            };

            let plan = DeliveryPlan::from_config(&config);
            prop_assert!(plan.is_ok());
            let plan = plan.unwrap();

            let expected = if manual_approvals {
                vec!["Source", "Approval", "Build"]
            } else {
                vec!["Source", "Build"]
            };
            prop_assert_eq!(plan.pipeline.stage_names(), expected);
        }
    }
}
