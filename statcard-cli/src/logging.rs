//! Logging setup for the binary.

use tracing_subscriber::EnvFilter;

/// Install a fmt subscriber. `RUST_LOG` wins over `verbose`.
pub fn setup_logging(verbose: bool) {
    let default = if verbose { "statcard=debug,info" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
