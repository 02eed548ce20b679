use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::errors::AppError;

/// Installs the global subscriber. Log lines go to stderr so they never mix
/// with menu output on stdout.
///
/// `RUST_LOG` decides the filter when set; `-v` flags still raise the global
/// level on top of it.
pub fn init(verbosity: u8) -> Result<(), AppError> {
    let level = level_for(verbosity);
    let mut filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();
    if verbosity > 0 {
        filter = filter.add_directive(level.into());
    }

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_names(false)
        .with_line_number(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| AppError::Logging(e.to_string()))
}

fn level_for(verbosity: u8) -> tracing::Level {
    match verbosity {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    }
}
