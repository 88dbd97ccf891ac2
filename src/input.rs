//! Input validation
//!
//! Every field the operator types goes through a pure validator
//! (`&str -> Result<T>`) and the iterative loop in [`Terminal::ask_until`]:
//!
//! ```text
//! AwaitingInput -> Validating -> Accepted -> caller mutates / reports
//!                             -> Rejected -> message, AwaitingInput
//! ```
//!
//! Recoverable errors loop without limit. Abort errors (`NoAccount`,
//! `MissingRate`) and fatal ones leave the loop and go back to the caller.

use crate::account::validate_amount;
use crate::console::Console;
use crate::currency::{Currency, CATALOG_SIZE};
use crate::error::{BankError, Result};
use crate::rates::validate_rate;
use std::io::{BufRead, Write};

/// Parse a whole decimal number. Trailing text, NaN and infinities are rejected.
pub fn parse_decimal(input: &str) -> Result<f64> {
    let trimmed = input.trim();
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(BankError::Parse(trimmed.to_string())),
    }
}

/// Parse a whole integer
pub fn parse_integer(input: &str) -> Result<i64> {
    let trimmed = input.trim();
    trimmed
        .parse::<i64>()
        .map_err(|_| BankError::Parse(trimmed.to_string()))
}

/// Strictly positive deposit/withdraw/exchange amount
pub fn parse_amount(input: &str) -> Result<f64> {
    validate_amount(parse_decimal(input)?)
}

/// Strictly positive exchange rate
pub fn parse_rate(input: &str) -> Result<f64> {
    validate_rate(parse_decimal(input)?)
}

/// Any catalog currency, selected by index
pub fn parse_currency(input: &str) -> Result<Currency> {
    let index = parse_integer(input)?;
    usize::try_from(index)
        .map_err(|_| out_of_catalog())
        .and_then(|i| Currency::from_index(i).map_err(|_| out_of_catalog()))
}

/// A currency whose rate may be recorded (base excluded)
pub fn parse_foreign_currency(input: &str) -> Result<Currency> {
    let index = parse_integer(input)?;
    if !(1..CATALOG_SIZE as i64).contains(&index) {
        return Err(BankError::Range(format!(
            "Please enter a number from 1 to {}",
            CATALOG_SIZE - 1
        )));
    }
    Currency::from_index(index as usize)
}

/// Non-negative number of days
pub fn parse_days(input: &str) -> Result<u32> {
    let days = parse_integer(input)?;
    if days < 0 {
        return Err(BankError::Range(format!(
            "number of days must be 0 or more, got {}",
            days
        )));
    }
    u32::try_from(days).map_err(|_| {
        BankError::Range(format!(
            "number of days must be at most {}, got {}",
            u32::MAX,
            days
        ))
    })
}

/// Y/N answer, case-insensitive
pub fn parse_yes_no(input: &str) -> Result<bool> {
    match input.trim().to_uppercase().as_str() {
        "Y" => Ok(true),
        "N" => Ok(false),
        other => Err(BankError::Range(format!("'{}' is not Y or N", other))),
    }
}

fn out_of_catalog() -> BankError {
    BankError::Range(format!(
        "currency option must be between 0 and {}",
        CATALOG_SIZE - 1
    ))
}

/// Operator input and output for one session
pub struct Terminal<R: BufRead, W: Write> {
    input: R,
    console: Console<W>,
}

impl<R: BufRead, W: Write> Terminal<R, W> {
    pub fn new(input: R, console: Console<W>) -> Self {
        Self { input, console }
    }

    pub fn console(&mut self) -> &mut Console<W> {
        &mut self.console
    }

    pub fn into_console(self) -> Console<W> {
        self.console
    }

    /// Prompt once and read a raw line. End of input is `InputClosed`.
    pub fn ask(&mut self, label: &str) -> Result<String> {
        self.console.prompt(label)?;

        let mut raw = Vec::new();
        if self.input.read_until(b'\n', &mut raw)? == 0 {
            // keep the transcript readable when input ends mid-prompt
            self.console.blank()?;
            return Err(BankError::InputClosed);
        }
        // invalid UTF-8 becomes U+FFFD and is rejected by the field validator
        let line = String::from_utf8_lossy(&raw);
        Ok(line.trim_end_matches(&['\r', '\n'][..]).to_string())
    }

    /// Prompt until `validate` accepts the input.
    ///
    /// Each rejection is shown to the operator before asking again. Errors
    /// that are not recoverable are returned as-is.
    pub fn ask_until<T, F>(&mut self, label: &str, mut validate: F) -> Result<T>
    where
        F: FnMut(&str) -> Result<T>,
    {
        loop {
            let line = self.ask(label)?;
            match validate(&line) {
                Ok(value) => return Ok(value),
                Err(err) if err.is_recoverable() => {
                    log::debug!("Rejected input for '{}': {}", label, err);
                    self.console.error(&err)?;
                }
                Err(err) => return Err(err),
            }
        }
    }

    pub fn ask_yes_no(&mut self, label: &str) -> Result<bool> {
        self.ask_until(label, parse_yes_no)
    }
}
