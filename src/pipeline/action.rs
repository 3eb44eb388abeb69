//! Action types for pipeline stages
//!
//! This module defines the units of work a stage holds: fetching source,
//! running a build project, or waiting on a manual approval. Actions carry
//! the artifacts they consume and produce; everything else about their
//! execution belongs to the external service.

#![allow(clippy::must_use_candidate, clippy::return_self_not_must_use)]

use super::artifact::Artifact;
use super::errors::ValidationError;
use super::types::{SecretString, Validate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::slice;
use url::Url;

/// How the source action learns about new revisions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SourceTrigger {
    /// No automatic trigger; runs only when started by hand
    None,
    /// Periodically poll the repository for changes
    #[default]
    Poll,
    /// React to a push notification from the host
    Webhook,
}

/// Configuration for a GitHub source action
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GitHubSource {
    /// Owner of the repository
    pub owner: String,

    /// Repository name
    pub repo: String,

    /// Branch to watch
    pub branch: String,

    /// Access token the poller authenticates with
    #[serde(rename = "oauthToken")]
    pub oauth_token: SecretString,

    /// Trigger mode
    #[serde(default)]
    pub trigger: SourceTrigger,

    /// Artifact the fetched source is written to
    pub output: Artifact,
}

impl GitHubSource {
    /// Creates a poll-triggered source for the given repository coordinates
    pub fn new(
        owner: impl Into<String>,
        repo: impl Into<String>,
        branch: impl Into<String>,
        oauth_token: SecretString,
        output: Artifact,
    ) -> Self {
        Self {
            owner: owner.into(),
            repo: repo.into(),
            branch: branch.into(),
            oauth_token,
            trigger: SourceTrigger::Poll,
            output,
        }
    }

    /// Sets the trigger mode
    pub fn with_trigger(mut self, trigger: SourceTrigger) -> Self {
        self.trigger = trigger;
        self
    }

    /// Returns the https URL of the watched repository
    #[allow(clippy::missing_errors_doc)]
    pub fn repository_url(&self) -> Result<Url, url::ParseError> {
        Url::parse(&format!("https://github.com/{}/{}", self.owner, self.repo))
    }
}

/// Configuration for a build-run action
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildRun {
    /// Name of the build project the runner executes
    pub project: String,

    /// Artifact holding the source the build consumes
    pub input: Artifact,

    /// Artifacts the build declares as outputs
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub outputs: Vec<Artifact>,
}

/// Configuration for a manual approval gate.
///
/// The gate consumes no artifacts and produces none; the execution service
/// parks the pipeline until a human approves or rejects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ManualApproval {}

/// What an action does
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ActionKind {
    /// Fetch source from a repository
    Source(GitHubSource),

    /// Run a build project
    Build(BuildRun),

    /// Wait for a manual approval
    Approval(ManualApproval),
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Source(source) => {
                write!(f, "source({}/{}@{})", source.owner, source.repo, source.branch)
            }
            Self::Build(run) => write!(f, "build({})", run.project),
            Self::Approval(_) => write!(f, "approval"),
        }
    }
}

/// A single unit of work within a stage
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Action {
    /// Action name shown by the execution service
    pub name: String,

    /// What the action does
    #[serde(flatten)]
    pub kind: ActionKind,
}

impl Action {
    /// Creates a new action
    pub fn new(name: impl Into<String>, kind: ActionKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }

    /// Creates a source action
    pub fn source(name: impl Into<String>, source: GitHubSource) -> Self {
        Self::new(name, ActionKind::Source(source))
    }

    /// Creates a build action
    pub fn build(
        name: impl Into<String>,
        project: impl Into<String>,
        input: Artifact,
        outputs: Vec<Artifact>,
    ) -> Self {
        Self::new(
            name,
            ActionKind::Build(BuildRun {
                project: project.into(),
                input,
                outputs,
            }),
        )
    }

    /// Creates a manual approval action
    pub fn manual_approval(name: impl Into<String>) -> Self {
        Self::new(name, ActionKind::Approval(ManualApproval::default()))
    }

    /// Returns the artifacts this action consumes
    pub fn inputs(&self) -> &[Artifact] {
        match &self.kind {
            ActionKind::Build(run) => slice::from_ref(&run.input),
            ActionKind::Source(_) | ActionKind::Approval(_) => &[],
        }
    }

    /// Returns the artifacts this action produces
    pub fn outputs(&self) -> &[Artifact] {
        match &self.kind {
            ActionKind::Source(source) => slice::from_ref(&source.output),
            ActionKind::Build(run) => &run.outputs,
            ActionKind::Approval(_) => &[],
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Action({}): {}", self.name, self.kind)
    }
}

impl Validate for Action {
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

        match &self.kind {
            ActionKind::Source(source) => {
                if source.owner.is_empty() {
                    return Err(ValidationError::MissingField { field: "owner" });
                }
                if source.repo.is_empty() {
                    return Err(ValidationError::MissingField { field: "repo" });
                }
                if source.branch.is_empty() {
                    return Err(ValidationError::MissingField { field: "branch" });
                }
                source.output.validate()?;
            }
            ActionKind::Build(run) => {
                if run.project.is_empty() {
                    return Err(ValidationError::MissingField { field: "project" });
                }
                run.input.validate()?;
                for output in &run.outputs {
                    output.validate()?;
                }
            }
            ActionKind::Approval(_) => {}
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_source() -> GitHubSource {
        GitHubSource::new(
            "acme",
            "demo",
            "main",
            SecretString::new("ghp_hunter2"),
            Artifact::named("SourceOutput"),
        )
    }

    #[test]
    fn test_source_action_defaults_to_poll() {
        let action = Action::source("GithubSource", sample_source());
        assert!(matches!(
            action.kind,
            ActionKind::Source(GitHubSource {
                trigger: SourceTrigger::Poll,
                ..
            })
        ));
    }

    #[test]
    fn test_source_action_produces_its_output() {
        let action = Action::source("GithubSource", sample_source());
        assert!(action.inputs().is_empty());
        assert_eq!(action.outputs(), &[Artifact::named("SourceOutput")]);
    }

    #[test]
    fn test_build_action_wires_input_and_outputs() {
        let action = Action::build(
            "Build",
            "dev-demo",
            Artifact::named("SourceOutput"),
            vec![Artifact::named("BuildOutput")],
        );
        assert_eq!(action.inputs(), &[Artifact::named("SourceOutput")]);
        assert_eq!(action.outputs(), &[Artifact::named("BuildOutput")]);
    }

    #[test]
    fn test_approval_action_has_no_artifacts() {
        let action = Action::manual_approval("ApproveChanges");
        assert!(action.inputs().is_empty());
        assert!(action.outputs().is_empty());
    }

    #[test]
    fn test_action_display() {
        let action = Action::source("GithubSource", sample_source());
        assert_eq!(action.to_string(), "Action(GithubSource): source(acme/demo@main)");

        let approval = Action::manual_approval("ApproveChanges");
        assert_eq!(approval.to_string(), "Action(ApproveChanges): approval");
    }

    #[test]
    fn test_repository_url() {
        let url = sample_source().repository_url().unwrap();
        assert_eq!(url.as_str(), "https://github.com/acme/demo");
    }

    #[test]
    fn test_validation_rejects_empty_action_name() {
        let action = Action::manual_approval("");
        assert_eq!(action.validate(), Err(ValidationError::EmptyName));
    }

    #[test]
    fn test_validation_rejects_empty_owner() {
        let mut source = sample_source();
        source.owner = String::new();
        let action = Action::source("GithubSource", source);
        assert_eq!(
            action.validate(),
            Err(ValidationError::MissingField { field: "owner" })
        );
    }

    #[test]
    fn test_validation_rejects_empty_project() {
        let action = Action::build("Build", "", Artifact::named("in"), vec![]);
        assert_eq!(
            action.validate(),
            Err(ValidationError::MissingField { field: "project" })
        );
    }

    #[test]
    fn test_serialized_action_is_internally_tagged() {
        let action = Action::manual_approval("ApproveChanges");
        let json = serde_json::to_value(&action).unwrap();
        assert_eq!(json["name"], "ApproveChanges");
        assert_eq!(json["type"], "approval");
    }

    #[test]
    fn test_source_action_round_trip() {
        let action = Action::source("GithubSource", sample_source());
        let json = serde_json::to_string(&action).unwrap();
        let back: Action = serde_json::from_str(&json).unwrap();
        assert_eq!(back, action);
    }

    #[test]
    fn test_secret_not_leaked_by_debug() {
        let action = Action::source("GithubSource", sample_source());
        let debug = format!("{:?}", action);
        assert!(!debug.contains("ghp_hunter2"));
    }
}
