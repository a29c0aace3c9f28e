use tracing_subscriber::EnvFilter;

/// Installs the global `tracing` subscriber. `RUST_LOG` takes precedence over
/// `default_filter`. Calling this more than once is harmless; only the first
/// call installs anything.
pub fn initialise_tracing(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    // `try_init` also routes the `log` records emitted by actix into `tracing`.
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
