//! Logging configuration
//!
//! Initializes tracing for the command line tool. Diagnostics go to stderr
//! so that synthesized documents on stdout stay machine-readable.

/// Initializes logging with the specified level for this crate.
///
/// `RUST_LOG` takes precedence when set.
pub fn init_logging(level: &str) {
    use tracing_subscriber::{EnvFilter, fmt};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("gantry={level}")));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
