use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize structured tracing on stderr. Call once at startup.
/// Uses JSON format with env-filter (`RUST_LOG` env var).
///
/// Stdout stays reserved for program output (flash messages, tables).
/// Safe to call multiple times — subsequent calls are silently ignored.
pub fn init_tracing() {
    let _ = tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(fmt::layer().json().with_writer(std::io::stderr))
        .try_init();
}
