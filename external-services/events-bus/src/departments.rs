use std::io::Write;

use crate::error::{EventBusError, Result};
use crate::listener::NotificationListener;

pub const ACCOUNTS: &str = "Accounts";
pub const ADMIN: &str = "Admin";

/// Hospital department printing each notice as `{label}: {message}`
#[derive(Debug)]
pub struct Department<W: Write> {
    label: &'static str,
    out: W,
}

impl<W: Write> Department<W> {
    pub fn new(label: &'static str, out: W) -> Self {
        Self { label, out }
    }

    pub fn accounts(out: W) -> Self {
        Self::new(ACCOUNTS, out)
    }

    pub fn admin(out: W) -> Self {
        Self::new(ADMIN, out)
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> NotificationListener for Department<W> {
    fn name(&self) -> &str {
        self.label
    }

    fn notify(&mut self, message: &str) -> Result<()> {
        let label = self.label;
        writeln!(self.out, "{}: {}", label, message)
            .and_then(|_| self.out.flush())
            .map_err(|source| EventBusError::Delivery {
                listener: label.to_string(),
                source,
            })
    }
}
