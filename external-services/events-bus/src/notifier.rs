use billing_service::Patient;
use tracing::{debug, info};

use crate::error::Result;
use crate::event::{admission_message, Admission};
use crate::listener::NotificationListener;

/// Broadcast an admission notice to `listeners`, in order.
///
/// Every listener receives the same message exactly once. The first failing
/// listener stops the broadcast and its error is returned; listeners after it
/// are not notified. With no listeners the admission is still recorded.
pub fn admit_patient(
    patient: &Patient,
    listeners: &mut [&mut dyn NotificationListener],
) -> Result<Admission> {
    let admission = Admission::new(patient.category(), admission_message(&patient.details));

    for listener in listeners.iter_mut() {
        listener.notify(&admission.message)?;
        debug!(
            admission_id = %admission.id,
            listener = listener.name(),
            "Admission notice delivered"
        );
    }

    info!(
        admission_id = %admission.id,
        category = %admission.category,
        listeners = listeners.len(),
        "Patient admitted"
    );
    Ok(admission)
}

/// Fixed, ordered subscriber list for repeated admissions
#[derive(Default)]
pub struct AdmissionNotifier<'a> {
    listeners: Vec<Box<dyn NotificationListener + 'a>>,
}

impl<'a> AdmissionNotifier<'a> {
    pub fn new() -> Self {
        Self {
            listeners: Vec::new(),
        }
    }

    /// Add a listener after all previously registered ones
    pub fn register(&mut self, listener: impl NotificationListener + 'a) {
        self.listeners.push(Box::new(listener));
    }

    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }

    pub fn admit(&mut self, patient: &Patient) -> Result<Admission> {
        let mut listeners: Vec<&mut dyn NotificationListener> = self
            .listeners
            .iter_mut()
            .map(|listener| &mut **listener as &mut dyn NotificationListener)
            .collect();
        admit_patient(patient, &mut listeners)
    }
}
