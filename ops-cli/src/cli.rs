use clap::Parser;
use logger_redacted::{LogFormat, LoggerConfig};

/// Hospital admission desk
#[derive(Parser, Debug, Clone)]
#[command(name = "hospital-desk", version)]
#[command(about = "Admit a patient, notify Accounts and Admin, and print the final bill")]
pub struct Args {
    /// Log level or filter directive (RUST_LOG takes precedence)
    #[arg(long, env = "HOSPITAL_DESK_LOG_LEVEL", default_value = "warn")]
    pub log_level: String,

    /// Log output format: text or json
    #[arg(long, env = "HOSPITAL_DESK_LOG_FORMAT", default_value = "text")]
    pub log_format: LogFormat,

    /// Log patient names and contacts without redaction
    #[arg(long, env = "HOSPITAL_DESK_NO_REDACTION")]
    pub no_redaction: bool,
}

impl Args {
    pub fn logger_config(&self) -> LoggerConfig {
        LoggerConfig {
            redaction_enabled: !self.no_redaction,
            log_level: self.log_level.clone(),
            format: self.log_format,
        }
    }
}
