use error_common::{HospitalError, Result};
use rust_decimal::Decimal;

use crate::models::{CareType, Patient};

/// Base bill for a patient, from the category-specific charge fields.
///
/// - In-patient: days stayed × charge per day
/// - Out-patient: consultation fee
/// - Emergency: emergency charge + treatment cost
///
/// Charges are taken as given; negative values are not rejected. A total
/// outside the `Decimal` range is reported as
/// [`HospitalError::BillOverflow`] and never wraps or saturates.
pub fn calculate_bill(patient: &Patient) -> Result<Decimal> {
    match &patient.care {
        CareType::InPatient {
            days_stayed,
            charge_per_day,
        } => Decimal::from(*days_stayed)
            .checked_mul(*charge_per_day)
            .ok_or_else(|| {
                HospitalError::BillOverflow(format!(
                    "{} days at {} per day",
                    days_stayed, charge_per_day
                ))
            }),
        CareType::OutPatient { consultation_fee } => Ok(*consultation_fee),
        CareType::Emergency {
            emergency_charge,
            treatment_cost,
        } => emergency_charge.checked_add(*treatment_cost).ok_or_else(|| {
            HospitalError::BillOverflow(format!(
                "emergency charge {} plus treatment cost {}",
                emergency_charge, treatment_cost
            ))
        }),
    }
}
