use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Level picked from `-v`/`-q`, or `None` to defer to `RUST_LOG`.
pub fn level_from_flags(verbose: u8, quiet: bool) -> Option<LevelFilter> {
    match (quiet, verbose) {
        (true, _) => Some(LevelFilter::WARN),
        (false, 0) => None,
        (false, 1) => Some(LevelFilter::DEBUG),
        (false, _) => Some(LevelFilter::TRACE),
    }
}

/// Log to stderr so stdout stays clean for JSON output.
pub fn enable_logging(verbose: u8, quiet: bool) {
    let crate_name = env!("CARGO_PKG_NAME").replace('-', "_");
    let filter = match level_from_flags(verbose, quiet) {
        Some(level) => EnvFilter::new(format!("{crate_name}={level}")),
        None => EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(format!("{crate_name}=info"))),
    };

    // A global subscriber may already be installed, e.g. under tests.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
