use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Install the global tracing subscriber. Logs go to stderr so stdout only
/// carries the result. `RUST_LOG` takes precedence over `level`.
pub fn init_logging(level: &str) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .try_init();
}
