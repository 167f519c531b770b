use std::io::{BufRead, Write};

use billing_service::{generate_bill, BillingStrategy, CareCategory, Patient, Tariff};
use error_common::Result;
use events_bus::{admit_patient, Admission, NotificationListener};
use logger_redacted::{PiiRedactor, RedactionConfig};
use rust_decimal::Decimal;
use tracing::{info, warn};

use crate::intake::{collect_details, Prompter, CATEGORY_PROMPT, INSURANCE_PROMPT};

/// Result of one pass through the desk
#[derive(Debug, Clone)]
pub struct DeskOutcome {
    pub admission: Admission,
    pub base_bill: Decimal,
    pub strategy: BillingStrategy,
    pub final_bill: Decimal,
}

/// Admission desk: collect, classify, bill, notify, discount, print
pub struct AdmissionDesk {
    tariff: Tariff,
    redactor: PiiRedactor,
}

impl AdmissionDesk {
    pub fn new(tariff: Tariff, redactor: PiiRedactor) -> Self {
        Self { tariff, redactor }
    }

    /// Run one admission over `input`/`output`, notifying `listeners`.
    ///
    /// A non-integer age or category stops the run with
    /// [`HospitalError::InvalidInteger`](error_common::HospitalError::InvalidInteger);
    /// whatever was printed before stays printed.
    pub fn run<R: BufRead, W: Write>(
        &self,
        input: R,
        output: W,
        listeners: &mut [&mut dyn NotificationListener],
    ) -> Result<DeskOutcome> {
        let mut prompter = Prompter::new(input, output);

        let details = collect_details(&mut prompter)?;
        let selector: i64 = prompter.ask_integer(CATEGORY_PROMPT, "category")?;
        let category = CareCategory::from_selector(selector);
        if !CareCategory::is_menu_selector(selector) {
            warn!(selector, "Unrecognized category selector, admitting as emergency");
        }

        let patient = Patient::new(details, self.tariff.care_for(category));
        info!(
            patient = %self.redactor.pseudonymize(&patient.details.name),
            contact = %self.redactor.pseudonymize_contact(&patient.details.contact),
            age = patient.details.age,
            category = %category,
            "Patient registered"
        );

        let base_bill = patient.base_bill()?;
        let admission = admit_patient(&patient, listeners)?;

        let answer = prompter.ask(INSURANCE_PROMPT)?;
        let strategy = BillingStrategy::from_insurance_answer(&answer);
        let final_bill = generate_bill(base_bill, strategy);

        let output = prompter.output();
        writeln!(output, "Final Bill: {}", final_bill.normalize())?;
        output.flush()?;

        info!(
            admission_id = %admission.id,
            base_bill = %base_bill,
            final_bill = %final_bill,
            insurance = strategy.is_insurance(),
            "Bill generated"
        );

        Ok(DeskOutcome {
            admission,
            base_bill,
            strategy,
            final_bill,
        })
    }
}

impl Default for AdmissionDesk {
    fn default() -> Self {
        Self::new(Tariff::standard(), PiiRedactor::new(RedactionConfig::default()))
    }
}
