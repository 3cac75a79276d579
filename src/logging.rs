use tracing_subscriber::{fmt, EnvFilter};

/// Initializes the global tracing subscriber for the binary.
///
/// The filter comes from `RUST_LOG`, defaulting to `info`. Calling this twice
/// panics, so it belongs in `main` only.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt().with_env_filter(filter).with_target(false).init();
}
