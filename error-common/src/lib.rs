//! Common error handling for the hospital admission desk
//!
//! Provides the shared [`HospitalError`] type, stable error codes, and a
//! logging helper used by the billing, notification, and desk crates.
//!
//! # Example
//!
//! ```rust
//! use error_common::{HospitalError, Result};
//!
//! fn parse_age(text: &str) -> Result<u32> {
//!     text.trim()
//!         .parse()
//!         .map_err(|_| HospitalError::invalid_integer("age", text))
//! }
//!
//! assert_eq!(parse_age(" 42 ").unwrap(), 42);
//! assert!(parse_age("forty").is_err());
//! ```

pub mod codes;
pub mod types;

pub use types::*;
