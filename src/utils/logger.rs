use std::env;
use std::sync::Once;
use tracing::Level;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

static INIT: Once = Once::new();

/// Environment variable holding the log level
pub const LOG_LEVEL_ENV: &str = "LOGLEVEL";

/// Maps a `LOGLEVEL` value to a tracing level, defaulting to INFO
pub fn parse_level(value: Option<&str>) -> Level {
    match value.map(str::to_uppercase).as_deref() {
        Some("DEBUG") => Level::DEBUG,
        Some("ERROR") => Level::ERROR,
        Some("WARN") => Level::WARN,
        Some("TRACE") => Level::TRACE,
        _ => Level::INFO,
    }
}

/// Sets up the global tracing subscriber once per process
///
/// Environment variables:
/// - LOGLEVEL: Sets the log level (DEBUG, INFO, WARN, ERROR, TRACE)
pub fn setup_logger() {
    INIT.call_once(|| {
        let level = parse_level(env::var(LOG_LEVEL_ENV).ok().as_deref());

        // Logs go to stderr so stdout stays clean for extracted data
        let registry = tracing_subscriber::registry()
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(false)
                    .with_thread_ids(true),
            )
            .with(tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()));

        if registry.try_init().is_err() {
            // Another subscriber was installed first, e.g. by a test harness
            return;
        }

        tracing::debug!("Log level set to: {}", level);
    });
}
