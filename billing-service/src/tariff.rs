use serde::{Deserialize, Serialize};
use rust_decimal::Decimal;

use crate::models::{CareCategory, CareType};

/// Fixed charge schedule the desk fills care fields from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tariff {
    pub in_patient_days: u32,
    pub charge_per_day: Decimal,
    pub consultation_fee: Decimal,
    pub emergency_charge: Decimal,
    pub treatment_cost: Decimal,
}

impl Tariff {
    /// Standard hospital schedule
    pub fn standard() -> Self {
        Self {
            in_patient_days: 4,
            charge_per_day: Decimal::from(2500),
            consultation_fee: Decimal::from(1200),
            emergency_charge: Decimal::from(3000),
            treatment_cost: Decimal::from(5000),
        }
    }

    /// Charges for a category under this schedule
    pub fn care_for(&self, category: CareCategory) -> CareType {
        match category {
            CareCategory::InPatient => CareType::InPatient {
                days_stayed: self.in_patient_days,
                charge_per_day: self.charge_per_day,
            },
            CareCategory::OutPatient => CareType::OutPatient {
                consultation_fee: self.consultation_fee,
            },
            CareCategory::Emergency => CareType::Emergency {
                emergency_charge: self.emergency_charge,
                treatment_cost: self.treatment_cost,
            },
        }
    }
}

impl Default for Tariff {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_schedule() {
        let tariff = Tariff::standard();
        assert_eq!(
            tariff.care_for(CareCategory::InPatient),
            CareType::InPatient {
                days_stayed: 4,
                charge_per_day: Decimal::from(2500),
            }
        );
        assert_eq!(
            tariff.care_for(CareCategory::Emergency),
            CareType::Emergency {
                emergency_charge: Decimal::from(3000),
                treatment_cost: Decimal::from(5000),
            }
        );
    }

    #[test]
    fn test_care_matches_requested_category() {
        let tariff = Tariff::default();
        for category in [CareCategory::InPatient, CareCategory::OutPatient, CareCategory::Emergency] {
            assert_eq!(tariff.care_for(category).category(), category);
        }
    }
}
