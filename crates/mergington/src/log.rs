pub use tracing::{debug, error, info, trace, warn};

use crate::errors::LogError;

/// Default filter used when `RUST_LOG` is not set.
pub const DEFAULT_LOG_FILTER: &str = "tracing=info,tower_http=debug,mergington_backend=debug";

/// Setup the logging system for the application.
/// This function will install the [`color_eyre`] error reporting system
/// and the [`tracing-subscriber`] logging system.
/// It will also set the `RUST_LIB_BACKTRACE` environment variable to `1`
/// and the `RUST_LOG` environment variable to [`DEFAULT_LOG_FILTER`]
/// if they are not already set.
pub fn setup() -> Result<(), LogError> {
    use tracing_subscriber::EnvFilter;

    if std::env::var("RUST_LIB_BACKTRACE").is_err() {
        unsafe { std::env::set_var("RUST_LIB_BACKTRACE", "1") }
    }
    color_eyre::install().map_err(LogError::ColorEyre)?;

    if std::env::var("RUST_LOG").is_err() {
        unsafe { std::env::set_var("RUST_LOG", DEFAULT_LOG_FILTER) }
    }
    tracing_subscriber::fmt::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .try_init()
        .map_err(LogError::TracingSubscriber)?;

    Ok(())
}
