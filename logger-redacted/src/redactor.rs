use regex::Regex;
use lazy_static::lazy_static;
use sha2::{Sha256, Digest};
use base64::{Engine as _, engine::general_purpose};

lazy_static! {
    static ref EMAIL_REGEX: Regex = Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b").unwrap();
    static ref PHONE_REGEX: Regex = Regex::new(r"(?:\+\d{1,3}[-.\s]?)?\(?\b\d{3}\)?[-.\s]?\d{3}[-.\s]?\d{4}\b").unwrap();
}

/// PII redaction configuration
#[derive(Debug, Clone)]
pub struct RedactionConfig {
    pub redact_emails: bool,
    pub redact_phones: bool,
    pub pseudonymize_names: bool,
    pub hash_for_correlation: bool,
    pub custom_patterns: Vec<(Regex, String)>,
}

impl RedactionConfig {
    /// Configuration that leaves every value untouched
    pub fn disabled() -> Self {
        Self {
            redact_emails: false,
            redact_phones: false,
            pseudonymize_names: false,
            hash_for_correlation: false,
            custom_patterns: Vec::new(),
        }
    }
}

impl Default for RedactionConfig {
    fn default() -> Self {
        Self {
            redact_emails: true,
            redact_phones: true,
            pseudonymize_names: true,
            hash_for_correlation: true,
            custom_patterns: Vec::new(),
        }
    }
}

/// PII redactor for log fields
#[derive(Debug, Clone)]
pub struct PiiRedactor {
    config: RedactionConfig,
}

impl PiiRedactor {
    pub fn new(config: RedactionConfig) -> Self {
        Self { config }
    }

    /// Mask emails, phone numbers and custom patterns inside free text
    pub fn redact(&self, text: &str) -> String {
        let mut result = text.to_string();

        if self.config.redact_emails {
            result = self.redact_emails(&result);
        }

        if self.config.redact_phones {
            result = self.redact_phones(&result);
        }

        for (pattern, replacement) in &self.config.custom_patterns {
            result = pattern.replace_all(&result, replacement.as_str()).to_string();
        }

        result
    }

    /// Replace a whole identifying value (such as a patient name) with a
    /// stable pseudonym, so two log lines about the same patient correlate.
    pub fn pseudonymize(&self, value: &str) -> String {
        if self.config.pseudonymize_names {
            format!("PATIENT[{}]", self.hash_value(value))
        } else {
            value.to_string()
        }
    }

    /// Replace a whole contact value (phone, email, address) with a stable
    /// pseudonym. Unlike [`PiiRedactor::redact`], no part of the value is kept,
    /// whatever its format.
    pub fn pseudonymize_contact(&self, value: &str) -> String {
        if self.config.pseudonymize_names {
            format!("CONTACT[{}]", self.hash_value(value))
        } else {
            value.to_string()
        }
    }

    fn redact_emails(&self, text: &str) -> String {
        EMAIL_REGEX.replace_all(text, |caps: &regex::Captures| {
            let email = &caps[0];
            if self.config.hash_for_correlation {
                format!("EMAIL[{}]", self.hash_value(email))
            } else {
                match email.split_once('@') {
                    Some((local, domain)) => format!(
                        "{}***@{}***",
                        local.chars().next().unwrap_or('*'),
                        domain.chars().next().unwrap_or('*')
                    ),
                    None => "***@***".to_string(),
                }
            }
        }).to_string()
    }

    fn redact_phones(&self, text: &str) -> String {
        PHONE_REGEX.replace_all(text, |caps: &regex::Captures| {
            if self.config.hash_for_correlation {
                format!("PHONE[{}]", self.hash_value(&caps[0]))
            } else {
                "(***) ***-****".to_string()
            }
        }).to_string()
    }

    fn hash_value(&self, value: &str) -> String {
        let mut hasher = Sha256::new();
        hasher.update(value.as_bytes());
        let result = hasher.finalize();
        general_purpose::URL_SAFE_NO_PAD.encode(&result[..8]) // first 8 bytes keep the tag short
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn masking_redactor() -> PiiRedactor {
        PiiRedactor::new(RedactionConfig {
            hash_for_correlation: false,
            ..Default::default()
        })
    }

    #[test]
    fn test_email_redaction() {
        let redacted = masking_redactor().redact("contact jane.doe@example.com");
        assert_eq!(redacted, "contact j***@e***");
    }

    #[test]
    fn test_phone_redaction() {
        let redactor = masking_redactor();
        assert_eq!(redactor.redact("555-123-4567"), "(***) ***-****");
        assert_eq!(redactor.redact("call (555) 123-4567"), "call (***) ***-****");
        assert_eq!(redactor.redact("9876543210"), "(***) ***-****");
    }

    #[test]
    fn test_hashed_values_correlate() {
        let redactor = PiiRedactor::new(RedactionConfig::default());
        let first = redactor.redact("jane@example.com");
        let second = redactor.redact("jane@example.com");
        assert_eq!(first, second);
        assert!(first.starts_with("EMAIL["));
        assert!(!first.contains("jane"));
    }

    #[test]
    fn test_pseudonymize_hides_name() {
        let redactor = PiiRedactor::new(RedactionConfig::default());
        let alias = redactor.pseudonymize("Jane Doe");
        assert!(alias.starts_with("PATIENT["));
        assert!(!alias.contains("Jane"));
        assert_eq!(alias, redactor.pseudonymize("Jane Doe"));
        assert_ne!(alias, redactor.pseudonymize("John Doe"));
    }

    #[test]
    fn test_pseudonymize_contact_any_format() {
        let redactor = PiiRedactor::new(RedactionConfig::default());
        for contact in ["+44 20 7946 0958", "12 Baker Street, London NW1 6XE", "ravi@example.com", "555-010-2000"] {
            let alias = redactor.pseudonymize_contact(contact);
            assert!(alias.starts_with("CONTACT["));
            assert!(!alias.contains(contact));
            assert_eq!(alias.len(), "CONTACT[]".len() + 11);
            assert_eq!(alias, redactor.pseudonymize_contact(contact));
        }
        assert_ne!(
            redactor.pseudonymize_contact("+44 20 7946 0958"),
            redactor.pseudonymize_contact("+44 20 7946 0959")
        );
    }

    #[test]
    fn test_pseudonymize_contact_disabled() {
        let redactor = PiiRedactor::new(RedactionConfig::disabled());
        assert_eq!(redactor.pseudonymize_contact("+44 20 7946 0958"), "+44 20 7946 0958");
    }

    #[test]
    fn test_custom_pattern() {
        let redactor = PiiRedactor::new(RedactionConfig {
            custom_patterns: vec![(Regex::new(r"\bMRN\d+").unwrap(), "MRN[REDACTED]".to_string())],
            ..RedactionConfig::disabled()
        });
        assert_eq!(redactor.redact("record MRN123456"), "record MRN[REDACTED]");
    }

    #[test]
    fn test_plain_text_untouched() {
        let redactor = PiiRedactor::new(RedactionConfig::default());
        assert_eq!(redactor.redact("walk-in"), "walk-in");
    }
}
