//! Flatlint Core
//!
//! Flat configuration resolution core for JavaScript linting. This crate
//! loads an ordered sequence of configuration fragments and produces the
//! effective configuration (globals, parser options, rule severities) for
//! any given file path. The lint engine, rule implementations, and file
//! walker are external collaborators.

pub mod config;
pub mod error;
pub mod result;

// Re-export commonly used types
pub use config::{
    ConfigFragment, ConfigLoader, ConfigSet, ConflictPolicy, EcmaVersion, EffectiveConfig,
    GlobalValue, LanguageOptions, ResolveOptions, RuleEntry, Severity, SourceType, globals,
};
pub use error::{ErrorKind, FlatlintError};
pub use result::{Result, ResultExt};

/// Initialize the tracing subscriber for logging
pub fn init_tracing() {
    use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("flatlint=info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_thread_ids(false)
                .with_file(true)
                .with_line_number(true),
        )
        .init();
}

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
