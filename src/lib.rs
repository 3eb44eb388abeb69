//! # Gantry - A delivery pipeline definition DSL in Rust
//!
//! Gantry synthesizes complete delivery definitions for containerized
//! services. From one small configuration it produces a container
//! repository, a build project that builds and pushes the image, and a
//! release pipeline that watches a GitHub branch, optionally waits for a
//! manual approval, and hands the source to the build.
//!
//! Synthesis is pure: the same configuration always yields the same
//! documents, so definitions can be diffed and reviewed before anything is
//! applied by an execution service.
//!
//! ## Quick Start
//!
//! For usage examples, see the [demos directory](https://github.com/gantry-org/gantry/tree/main/demos).
//!
//! ## Features
//!
//! - **Type-safe definitions**: Leverage Rust's type system for
//!   compile-time validation of pipeline wiring
//! - **Artifact checking**: Build inputs must be produced by an earlier
//!   stage, checked before a plan is emitted
//! - **Deterministic synthesis**: Same configuration in, same documents out
//! - **Two output formats**: JSON and YAML renditions of every document
//!
//! ## Documentation
//!
//! - [Full Documentation](https://docs.rs/gantry)
//! - [GitHub Repository](https://github.com/gantry-org/gantry)
//!
//! ## License
//!
//! Licensed under either of
//! - Apache License, Version 2.0 ([LICENSE-APACHE](LICENSE-APACHE) or <https://www.apache.org/licenses/LICENSE-2.0>)
//! - MIT license ([LICENSE-MIT](LICENSE-MIT) or <https://opensource.org/licenses/MIT>)
//!
//! at your option.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![cfg_attr(test, allow(clippy::unwrap_used))]

mod macros;

pub mod infrastructure;
pub mod pipeline;

// Prelude module for common imports
pub mod prelude;

// Re-export commonly used types
pub use infrastructure::{
    BuildEnvironment, BuildProject, BuildSpec, ContainerRepository, Effect, ImageDefinition,
    PolicyStatement, RemovalPolicy, init_logging,
};
pub use pipeline::{
    Action, ActionKind, Artifact, DeliveryPlan, GitHubSource, Pipeline, PipelineBuilder,
    PipelineConfig, PipelineError, SecretString, SourceTrigger, Stage, StageBuilder, Validate,
    ValidationError,
};

/// Version of the gantry crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
