// Admission event and message format
use billing_service::{CareCategory, PatientDetails};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Record of one broadcast admission
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Admission {
    pub id: Uuid,
    pub category: CareCategory,
    pub message: String,
    pub admitted_at: DateTime<Utc>,
}

impl Admission {
    pub fn new(category: CareCategory, message: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            category,
            message,
            admitted_at: Utc::now(),
        }
    }
}

/// Notice text sent to every department
pub fn admission_message(details: &PatientDetails) -> String {
    format!(
        "Patient {}, Age {}, Gender {}, Disease {} admitted",
        details.name, details.age, details.gender, details.disease
    )
}
