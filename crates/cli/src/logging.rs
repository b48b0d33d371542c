use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "warn";

/// Sends logs to stderr so stdout only carries the operator-facing lines.
///
/// An explicit `--log-level` wins over `RUST_LOG`.
pub fn init(level: Option<&str>) {
    let filter = match level {
        Some(level) => EnvFilter::new(level),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER)),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
