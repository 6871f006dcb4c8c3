//! Sitesmith CLI Library
//!
//! Command implementations and the embedded HTTP server for the sitesmith
//! website generator.
//!
//! # Modules
//!
//! - [`cmd`] - Command implementations (serve, generate, list)
//! - [`server`] - Embedded generation/download/preview server

pub mod cmd;
pub mod server;

// Re-export core types for convenience
pub use sitesmith_core::{Config, TemplateDefinition};
pub use sitesmith_generator::{GenerationRequest, GenerationResult, Generator, TemplateStore};

/// Initialize tracing with the specified verbosity level.
///
/// # Arguments
///
/// * `verbose` - Verbosity level (0 = WARN, 1 = INFO, 2 = DEBUG, 3+ = TRACE)
pub fn init_tracing(verbose: u8) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()))
        .init();
}
