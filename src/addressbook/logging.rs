//! Tracing setup for the command-line tools.
//!
//! Standard output belongs to prompts and listings, so log events always go to
//! standard error.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Builds the default filter directive for this crate at `level`.
pub fn default_directive(level: &str) -> String {
    format!("addressbook={}", level)
}

/// Initialize the logging system.
///
/// `RUST_LOG`, when set and valid, takes precedence over `level`. Calling this
/// more than once is harmless.
pub fn init_logging(level: &str) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(level)));

    let subscriber = tracing_subscriber::registry().with(env_filter).with(
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_thread_ids(false)
            .with_file(false)
            .with_line_number(false),
    );

    // Ignore the error if a subscriber is already installed
    let _ = subscriber.try_init();
}
