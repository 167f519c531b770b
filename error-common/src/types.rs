use thiserror::Error;

use crate::codes;

/// Error enum shared by the admission desk crates
#[derive(Error, Debug)]
pub enum HospitalError {
    /// Non-integer text where an integer is required
    #[error("Invalid {field}: expected an integer, got {input:?}")]
    InvalidInteger { field: &'static str, input: String },

    /// Console read or write failures
    #[error("Input/output error: {0}")]
    Io(#[from] std::io::Error),

    /// A department listener failed to take an admission notice
    #[error("Notification error: {0}")]
    Notification(String),

    /// Logging or command line configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// A bill does not fit the decimal range
    #[error("Bill overflow: {0}")]
    BillOverflow(String),
}

impl HospitalError {
    pub fn invalid_integer(field: &'static str, input: impl Into<String>) -> Self {
        Self::InvalidInteger {
            field,
            input: input.into(),
        }
    }

    /// Stable error code for logs and exit messages
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidInteger { .. } => codes::input::INVALID_INTEGER,
            Self::Io(_) => codes::input::IO_FAILURE,
            Self::Notification(_) => codes::notification::DELIVERY_FAILED,
            Self::Config(_) => codes::system::CONFIGURATION,
            Self::BillOverflow(_) => codes::billing::AMOUNT_OVERFLOW,
        }
    }
}

/// Result type alias for admission desk operations
pub type Result<T> = std::result::Result<T, HospitalError>;

/// Log an error together with its code
pub fn log_error(context: &str, error: &HospitalError) {
    tracing::error!(
        context = context,
        error_code = error.code(),
        error = %error,
        "Admission desk error occurred"
    );
}
