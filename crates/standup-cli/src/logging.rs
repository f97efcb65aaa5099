use tracing_subscriber::{EnvFilter, fmt};

/// Installs the global subscriber, writing to stderr.
///
/// `RUST_LOG` wins over `default_filter` when set.
pub fn init_logging(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
