// Logger configuration
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::redactor::{PiiRedactor, RedactionConfig};

/// Output format of the log layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Text,
    Json,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(format!("unknown log format '{}', expected text or json", other)),
        }
    }
}

impl fmt::Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => f.write_str("text"),
            Self::Json => f.write_str("json"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggerConfig {
    pub redaction_enabled: bool,
    pub log_level: String,
    pub format: LogFormat,
}

impl LoggerConfig {
    /// Redactor matching this configuration
    pub fn redactor(&self) -> PiiRedactor {
        if self.redaction_enabled {
            PiiRedactor::new(RedactionConfig::default())
        } else {
            PiiRedactor::new(RedactionConfig::disabled())
        }
    }
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            redaction_enabled: true,
            log_level: "info".to_string(),
            format: LogFormat::Text,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_format_parsing() {
        assert_eq!("json".parse::<LogFormat>().unwrap(), LogFormat::Json);
        assert_eq!("TEXT".parse::<LogFormat>().unwrap(), LogFormat::Text);
        assert!("xml".parse::<LogFormat>().is_err());
    }

    #[test]
    fn test_disabled_redaction_passes_values_through() {
        let config = LoggerConfig {
            redaction_enabled: false,
            ..Default::default()
        };
        let redactor = config.redactor();
        assert_eq!(redactor.pseudonymize("Jane Doe"), "Jane Doe");
        assert_eq!(redactor.redact("call 555-123-4567"), "call 555-123-4567");
    }
}
