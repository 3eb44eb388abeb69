//! Declarative macros for assembling delivery definitions
//!
//! This module contains macros for building pipelines and build
//! specifications in a compact declarative syntax.

/// Creates a list of shell commands
#[macro_export]
macro_rules! commands {
    ($($cmd:expr),* $(,)?) => {
        vec![$($cmd.to_string()),*]
    };
}

/// Creates a list of actions
#[macro_export]
macro_rules! actions {
    ($($action:expr),* $(,)?) => {
        vec![$($action),*]
    };
}

/// Creates a named artifact
#[macro_export]
macro_rules! artifact {
    ($name:expr) => {
        $crate::pipeline::Artifact::named($name)
    };
}

/// Creates a manual approval action
#[macro_export]
macro_rules! approval {
    ($name:expr) => {
        $crate::pipeline::Action::manual_approval($name)
    };
}

/// Creates a stage
#[macro_export]
macro_rules! stage {
    ($name:expr, $actions:expr) => {
        $crate::pipeline::Stage::new($name, $actions)
    };
}

/// Creates a pipeline using declarative block syntax
#[macro_export]
macro_rules! pipeline {
    (
        name($name:expr)
        stages {
            $(stage!( $stage_name:expr, $stage_actions:expr $(,)? ))*
        }
    ) => {{
        $crate::pipeline::Pipeline::builder()
            .name($name)
            .stages({
                let mut stages_vec = vec![];
                $(
                    stages_vec.push($crate::pipeline::Stage::new($stage_name.to_string(), $stage_actions));
                )*
                stages_vec
            })
            .build_unchecked()
    }};
}
