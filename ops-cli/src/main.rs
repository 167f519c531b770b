use std::io;

use admission_desk::{AdmissionDesk, Args};
use billing_service::Tariff;
use clap::Parser;
use error_common::log_error;
use events_bus::Department;
use logger_redacted::init_logging;

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let logger_config = args.logger_config();
    init_logging(&logger_config)?;

    let desk = AdmissionDesk::new(Tariff::standard(), logger_config.redactor());

    let mut accounts = Department::accounts(io::stdout());
    let mut admin = Department::admin(io::stdout());

    let stdin = io::stdin();
    let stdout = io::stdout();
    if let Err(e) = desk.run(stdin.lock(), stdout.lock(), &mut [&mut accounts, &mut admin]) {
        log_error("admission", &e);
        return Err(e.into());
    }

    Ok(())
}
