//! Admission notifications for the hospital desk
//!
//! A synchronous fan-out: one admission notice, formatted once, delivered to
//! an explicit ordered list of listeners such as the Accounts and Admin
//! departments.
//!
//! # Example
//!
//! ```rust
//! use billing_service::{CareCategory, Patient, PatientDetails, Tariff};
//! use events_bus::{admit_patient, Department};
//!
//! let patient = Patient::new(
//!     PatientDetails {
//!         name: "Asha".to_string(),
//!         age: 34,
//!         gender: "F".to_string(),
//!         disease: "Fever".to_string(),
//!         contact: "555-010-2000".to_string(),
//!     },
//!     Tariff::standard().care_for(CareCategory::OutPatient),
//! );
//!
//! let mut accounts = Department::accounts(Vec::new());
//! let mut admin = Department::admin(Vec::new());
//! admit_patient(&patient, &mut [&mut accounts, &mut admin]).unwrap();
//!
//! let printed = String::from_utf8(accounts.into_inner()).unwrap();
//! assert_eq!(printed, "Accounts: Patient Asha, Age 34, Gender F, Disease Fever admitted\n");
//! ```

pub mod departments;
pub mod error;
pub mod event;
pub mod listener;
pub mod notifier;

pub use departments::*;
pub use error::*;
pub use event::*;
pub use listener::*;
pub use notifier::*;
