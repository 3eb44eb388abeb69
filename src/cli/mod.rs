//! CLI tools for gantry
//!
//! Provides utilities around delivery configurations:
//! - `check`: Validate a configuration and show what it would synthesize
//! - `synth`: Synthesize the full delivery plan document
//! - `buildspec`: Render only the build specification
//! - `completions`: Generate shell completions

pub mod buildspec;
pub mod check;
pub mod completions;
pub mod synth;

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// CLI arguments for gantry
#[derive(Parser, Debug)]
#[command(name = "gantry")]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Validate a delivery configuration
    Check {
        /// Configuration file to validate
        file: PathBuf,
    },

    /// Synthesize the delivery plan from a configuration
    Synth {
        /// Configuration file to synthesize from
        file: PathBuf,
        /// Output format
        #[arg(short, long, value_enum)]
        format: Option<FormatArg>,
        /// Output file (stdout if not specified)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Render the build specification for a configuration
    Buildspec {
        /// Configuration file to render from
        file: PathBuf,
        /// Output format
        #[arg(short, long, value_enum)]
        format: Option<FormatArg>,
        /// Output file (stdout if not specified)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Generate shell completions
    Completions {
        /// Shell type
        #[arg(value_enum)]
        shell: ShellArg,
        /// Output file (stdout if not specified)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum FormatArg {
    Json,
    Yaml,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum ShellArg {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}

/// Build the CLI command for completion generation
pub fn build_cli() -> clap::Command {
    Args::command()
}

/// Parse and execute CLI arguments
pub fn run() -> Result<()> {
    let args = Args::parse();

    match args.command {
        Command::Check { file } => {
            check::check_config(&file)?;
        }
        Command::Synth {
            file,
            format,
            output,
        } => {
            let format = match format {
                Some(FormatArg::Yaml) => synth::OutputFormat::Yaml,
                Some(FormatArg::Json) | None => synth::OutputFormat::Json,
            };

            let document = synth::synth_plan(&file, format)?;

            if let Some(output_path) = output {
                synth::save_document(&document, &output_path)?;
            } else {
                println!("{}", document);
            }
        }
        Command::Buildspec {
            file,
            format,
            output,
        } => {
            let format = match format {
                Some(FormatArg::Json) => synth::OutputFormat::Json,
                Some(FormatArg::Yaml) | None => synth::OutputFormat::Yaml,
            };

            let document = buildspec::render_buildspec(&file, format)?;

            if let Some(output_path) = output {
                synth::save_document(&document, &output_path)?;
            } else {
                println!("{}", document);
            }
        }
        Command::Completions { shell, output } => {
            use clap_complete::Shell;

            let shell_enum = match shell {
                ShellArg::Bash => Shell::Bash,
                ShellArg::Zsh => Shell::Zsh,
                ShellArg::Fish => Shell::Fish,
                ShellArg::PowerShell => Shell::PowerShell,
            };

            let completions = completions::generate_completions(shell_enum)?;

            if let Some(output_path) = output {
                completions::save_completions(&completions, &output_path)?;
            } else {
                println!("{}", completions);
            }
        }
    }

    Ok(())
}
