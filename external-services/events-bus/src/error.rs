use error_common::HospitalError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EventBusError {
    #[error("Delivery to {listener} failed: {source}")]
    Delivery {
        listener: String,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, EventBusError>;

impl From<EventBusError> for HospitalError {
    fn from(err: EventBusError) -> Self {
        HospitalError::Notification(err.to_string())
    }
}
