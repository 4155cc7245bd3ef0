//! Structured telemetry initialisation for the CLI.

use std::io::{self, IsTerminal};

use gentler_config::{Config, LogFormat};
use once_cell::sync::OnceCell;
use tracing::{Subscriber, debug, subscriber::SetGlobalDefaultError};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;

static TELEMETRY_GUARD: OnceCell<()> = OnceCell::new();

/// Handle returned when telemetry has been initialised.
#[derive(Debug, Default, Clone, Copy)]
pub struct TelemetryHandle;

/// Errors encountered while configuring telemetry.
#[derive(Debug, thiserror::Error)]
pub enum TelemetryError {
    /// Failed to parse the configured log filter expression.
    #[error("invalid log filter: {0}")]
    Filter(String),
    /// Failed to install the tracing subscriber.
    #[error("failed to install telemetry subscriber: {0}")]
    Subscriber(SetGlobalDefaultError),
}

/// Configures the global tracing subscriber when invoked for the first time.
///
/// Later calls return a fresh [`TelemetryHandle`] without touching the
/// global subscriber again, so the configuration of the first call wins.
///
/// # Errors
///
/// Returns [`TelemetryError::Filter`] when `log_filter` does not parse and
/// [`TelemetryError::Subscriber`] when another subscriber is already
/// installed.
///
/// # Examples
///
/// ```rust
/// use gentler_cli::telemetry;
/// use gentler_config::{Config, LogFormat};
///
/// # fn main() -> Result<(), gentler_cli::telemetry::TelemetryError> {
/// let config = Config {
///     log_filter: String::from("gentler_engine=debug"),
///     log_format: LogFormat::Json,
///     ..Config::default()
/// };
/// telemetry::initialise(&config)?;
///
/// // A batch run started later in the same process keeps the JSON logger.
/// telemetry::initialise(&Config::default())?;
/// # Ok(())
/// # }
/// ```
pub fn initialise(config: &Config) -> Result<TelemetryHandle, TelemetryError> {
    TELEMETRY_GUARD
        .get_or_try_init(|| install_subscriber(config))
        .map(|_| TelemetryHandle)
}

fn install_subscriber(config: &Config) -> Result<(), TelemetryError> {
    let filter = EnvFilter::try_new(config.log_filter())
        .map_err(|error| TelemetryError::Filter(error.to_string()))?;

    let builder = |filter: EnvFilter| {
        fmt::Subscriber::builder()
            .with_env_filter(filter)
            .with_target(true)
            .with_level(true)
            .with_writer(io::stderr)
            .with_ansi(io::stderr().is_terminal())
            .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
    };

    let subscriber: Box<dyn Subscriber + Send + Sync> = match config.log_format() {
        LogFormat::Json => Box::new(builder(filter).json().flatten_event(true).finish()),
        LogFormat::Compact => Box::new(builder(filter).compact().finish()),
    };

    tracing::subscriber::set_global_default(subscriber).map_err(TelemetryError::Subscriber)?;
    debug!(
        format = %config.log_format(),
        filter = config.log_filter(),
        "telemetry installed"
    );
    Ok(())
}
