use serde::{Deserialize, Serialize};
use error_common::Result;
use rust_decimal::Decimal;
use std::fmt;

use crate::calculator::calculate_bill;

/// Demographics collected at the admission desk
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatientDetails {
    pub name: String,
    pub age: u32,
    pub gender: String,
    pub disease: String,
    pub contact: String,
}

/// Admission category tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CareCategory {
    InPatient,
    OutPatient,
    Emergency,
}

impl CareCategory {
    /// Map the desk's menu selector to a category.
    ///
    /// `1` and `2` pick in-patient and out-patient care; every other value,
    /// including out-of-menu numbers, falls through to emergency.
    pub fn from_selector(selector: i64) -> Self {
        match selector {
            1 => Self::InPatient,
            2 => Self::OutPatient,
            _ => Self::Emergency,
        }
    }

    /// Whether the selector is one of the menu entries 1, 2 or 3
    pub fn is_menu_selector(selector: i64) -> bool {
        (1..=3).contains(&selector)
    }
}

impl fmt::Display for CareCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InPatient => f.write_str("InPatient"),
            Self::OutPatient => f.write_str("OutPatient"),
            Self::Emergency => f.write_str("Emergency"),
        }
    }
}

/// Category-specific charge fields
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "category", rename_all = "snake_case")]
pub enum CareType {
    InPatient {
        days_stayed: u32,
        charge_per_day: Decimal,
    },
    OutPatient {
        consultation_fee: Decimal,
    },
    Emergency {
        emergency_charge: Decimal,
        treatment_cost: Decimal,
    },
}

impl CareType {
    pub fn category(&self) -> CareCategory {
        match self {
            Self::InPatient { .. } => CareCategory::InPatient,
            Self::OutPatient { .. } => CareCategory::OutPatient,
            Self::Emergency { .. } => CareCategory::Emergency,
        }
    }
}

/// Patient record, immutable once built
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Patient {
    pub details: PatientDetails,
    pub care: CareType,
}

impl Patient {
    pub fn new(details: PatientDetails, care: CareType) -> Self {
        Self { details, care }
    }

    pub fn category(&self) -> CareCategory {
        self.care.category()
    }

    /// Bill before any billing strategy is applied
    pub fn base_bill(&self) -> Result<Decimal> {
        calculate_bill(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selector_mapping() {
        assert_eq!(CareCategory::from_selector(1), CareCategory::InPatient);
        assert_eq!(CareCategory::from_selector(2), CareCategory::OutPatient);
        assert_eq!(CareCategory::from_selector(3), CareCategory::Emergency);
    }

    #[test]
    fn test_unknown_selectors_fall_back_to_emergency() {
        for selector in [0, -1, 4, 99, i64::MAX, i64::MIN] {
            assert_eq!(CareCategory::from_selector(selector), CareCategory::Emergency);
            assert!(!CareCategory::is_menu_selector(selector));
        }
        assert!(CareCategory::is_menu_selector(3));
    }

    #[test]
    fn test_care_type_category() {
        let care = CareType::OutPatient {
            consultation_fee: Decimal::from(1200),
        };
        assert_eq!(care.category(), CareCategory::OutPatient);
        assert_eq!(care.category().to_string(), "OutPatient");
    }
}
