use std::io::{BufRead, Write};
use std::str::FromStr;

use billing_service::PatientDetails;
use error_common::{HospitalError, Result};

pub const NAME_PROMPT: &str = "Name:";
pub const AGE_PROMPT: &str = "Age:";
pub const GENDER_PROMPT: &str = "Gender:";
pub const DISEASE_PROMPT: &str = "Disease:";
pub const CONTACT_PROMPT: &str = "Contact:";
pub const CATEGORY_PROMPT: &str = "1-InPatient  2-OutPatient  3-Emergency";
pub const INSURANCE_PROMPT: &str = "Apply Insurance? yes/no";

/// Line-oriented question and answer over the desk console
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Print `prompt` on its own line and read one answer line.
    ///
    /// The line terminator is stripped; end of input reads as an empty answer.
    pub fn ask(&mut self, prompt: &str) -> Result<String> {
        writeln!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        self.input.read_line(&mut line)?;
        Ok(strip_line_ending(&line).to_string())
    }

    /// Ask for an integer; surrounding whitespace is ignored.
    pub fn ask_integer<T: FromStr>(&mut self, prompt: &str, field: &'static str) -> Result<T> {
        let answer = self.ask(prompt)?;
        answer
            .trim()
            .parse()
            .map_err(|_| HospitalError::invalid_integer(field, answer))
    }

    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }
}

fn strip_line_ending(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}

/// Collect name, age, gender, disease and contact, in that order
pub fn collect_details<R: BufRead, W: Write>(prompter: &mut Prompter<R, W>) -> Result<PatientDetails> {
    let name = prompter.ask(NAME_PROMPT)?;
    let age = prompter.ask_integer(AGE_PROMPT, "age")?;
    let gender = prompter.ask(GENDER_PROMPT)?;
    let disease = prompter.ask(DISEASE_PROMPT)?;
    let contact = prompter.ask(CONTACT_PROMPT)?;

    Ok(PatientDetails {
        name,
        age,
        gender,
        disease,
        contact,
    })
}
