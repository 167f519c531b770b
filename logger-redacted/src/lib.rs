pub mod config;
pub mod redactor;

pub use config::*;
pub use redactor::*;

use error_common::{HospitalError, Result};
use tracing_subscriber::{
    fmt::{self, time::ChronoUtc},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

/// Logging for the admission desk with PII redaction
///
/// Installs a `tracing` subscriber writing to stderr, so the interactive
/// conversation on stdout is never interleaved with log lines. Patient names
/// and contact details pass through a [`PiiRedactor`] before they reach a log
/// field.
///
/// # Detected Data Types
///
/// - **Email Addresses**: jane@example.com → EMAIL[hash] or j***@e***
/// - **Phone Numbers**: (555) 123-4567 → PHONE[hash] or (***) ***-****
/// - **Names**: pseudonymized as PATIENT[hash] for correlation
///
/// # Example
///
/// ```rust,no_run
/// use logger_redacted::{init_logging, LoggerConfig};
///
/// let config = LoggerConfig::default();
/// init_logging(&config).unwrap();
///
/// let redactor = config.redactor();
/// tracing::info!(patient = %redactor.pseudonymize("Jane Doe"), "Patient registered");
/// ```
///
/// `RUST_LOG`, when set, takes precedence over [`LoggerConfig::log_level`].
pub fn init_logging(config: &LoggerConfig) -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .map_err(|e| {
            HospitalError::Config(format!("invalid log level '{}': {}", config.log_level, e))
        })?;

    let registry = tracing_subscriber::registry().with(env_filter);

    let installed = match config.format {
        LogFormat::Json => registry
            .with(
                fmt::layer()
                    .json()
                    .with_target(false)
                    .with_timer(ChronoUtc::rfc_3339())
                    .with_writer(std::io::stderr),
            )
            .try_init(),
        LogFormat::Text => registry
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_timer(ChronoUtc::rfc_3339())
                    .with_writer(std::io::stderr),
            )
            .try_init(),
    };

    installed.map_err(|e| HospitalError::Config(format!("logger already installed: {}", e)))?;

    tracing::debug!(
        level = %config.log_level,
        format = %config.format,
        redaction = config.redaction_enabled,
        "Logging initialized"
    );
    Ok(())
}
