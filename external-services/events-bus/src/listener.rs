use crate::error::Result;

/// Recipient of admission notices
pub trait NotificationListener {
    /// Name used in logs and delivery errors
    fn name(&self) -> &str {
        "listener"
    }

    fn notify(&mut self, message: &str) -> Result<()>;
}

impl<F> NotificationListener for F
where
    F: FnMut(&str),
{
    fn notify(&mut self, message: &str) -> Result<()> {
        self(message);
        Ok(())
    }
}
