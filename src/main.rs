//! gantry - CLI for synthesizing delivery pipeline definitions
//!
//! Turns a small JSON configuration into the complete set of documents an
//! execution service needs to deliver a containerized service: a container
//! repository, a build project, and a release pipeline.
//!
//! ## Commands
//!
//! - `gantry check` - Validate a delivery configuration
//! - `gantry synth` - Synthesize the full delivery plan document
//! - `gantry buildspec` - Render the build specification
//! - `gantry completions` - Generate shell completions
//!
//! ## Installation
//!
//! ```bash
//! cargo install gantry
//! ```
//!
//! ## Quick Start
//!
//! ```bash
//! # Validate a configuration
//! gantry check pipeline-config.json
//!
//! # Synthesize the full plan as YAML
//! gantry synth pipeline-config.json --format=yaml
//!
//! # Render the build specification for the build runner
//! gantry buildspec pipeline-config.json -o buildspec.yml
//!
//! # Generate shell completions
//! gantry completions bash > /etc/bash_completion.d/gantry
//! ```
//!
//! ## See Also
//!
//! - [gantry crate](https://crates.io/crates/gantry) - The core definition library

use std::process::ExitCode;

mod cli;

fn main() -> ExitCode {
    // Initialize tracing for debugging
    if std::env::var("GANTRY_DEBUG").is_ok() {
        gantry::init_logging("debug");
    }

    // Run the CLI
    match cli::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            if std::env::var("GANTRY_VERBOSE").is_ok() {
                eprintln!("{:?}", e);
            }
            ExitCode::FAILURE
        }
    }
}
