//! Logging initialization

/// Initialize logging based on debug flag
///
/// Stdout carries the values payload Helm reads, so logs always go to
/// stderr. Without the debug flag nothing is logged.
pub fn init_logging(debug: bool) {
    if !debug {
        return;
    }

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
        )
        .with_ansi(false)
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .init();

    tracing::debug!("Debug logging enabled");
}
