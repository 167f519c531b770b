//! Billing for the hospital admission desk
//!
//! Provides:
//! - Patient records with one care type per admission category
//! - The fixed tariff the desk fills care charges from
//! - Base bill calculation per care type
//! - Billing strategies (normal or insurance-discounted) for the final bill

pub mod models;
pub mod tariff;
pub mod calculator;
pub mod strategy;

pub use models::*;
pub use tariff::*;
pub use calculator::*;
pub use strategy::*;
