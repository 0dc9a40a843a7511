//! Logging init: stderr with env-filter control.

use tracing_subscriber::EnvFilter;

/// Initialize structured logging to stderr. `RUST_LOG` overrides the default
/// filter. Keeping stdout clean matters because classification results are
/// printed there.
pub fn init_logging() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,feedlink=debug"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();
}
