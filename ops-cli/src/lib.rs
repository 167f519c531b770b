//! Interactive hospital admission desk
//!
//! Sequences one admission on a text console:
//! collect patient details → classify → compute base bill → notify the
//! departments → apply the billing strategy → print the final bill.
//!
//! # Example Session
//!
//! ```text
//! Name:
//! Asha
//! Age:
//! 34
//! Gender:
//! F
//! Disease:
//! Fever
//! Contact:
//! 555-010-2000
//! 1-InPatient  2-OutPatient  3-Emergency
//! 2
//! Accounts: Patient Asha, Age 34, Gender F, Disease Fever admitted
//! Admin: Patient Asha, Age 34, Gender F, Disease Fever admitted
//! Apply Insurance? yes/no
//! yes
//! Final Bill: 840
//! ```

pub mod cli;
pub mod desk;
pub mod intake;

pub use cli::*;
pub use desk::*;
pub use intake::*;
