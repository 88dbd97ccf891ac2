//! Exchange rate table
//!
//! Rates are quoted as units of the base currency per one unit of the
//! foreign currency, so converting between two currencies is
//! `amount * source_rate / target_rate`.
//!
//! # Example
//!
//! ```
//! use bank_teller::currency::Currency;
//! use bank_teller::rates::RateTable;
//!
//! let mut table = RateTable::new();
//! table.record(Currency::JPY, 58.0).unwrap();
//! table.record(Currency::GBP, 0.40).unwrap();
//!
//! let gbp = table.convert(100.0, Currency::JPY, Currency::GBP).unwrap();
//! assert!((gbp - 14500.0).abs() < 1e-9);
//! ```

use crate::currency::{Currency, CATALOG_SIZE};
use crate::error::{BankError, Result};
use serde::Serialize;

/// Rate of the base currency against itself
pub const BASE_RATE: f64 = 1.0;

/// One slot per catalog currency. `None` means the rate was never recorded,
/// which is different from any numeric value.
#[derive(Debug, Clone, PartialEq)]
pub struct RateTable {
    rates: [Option<f64>; CATALOG_SIZE],
}

/// A recorded rate, for listings and snapshots
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RecordedRate {
    pub currency: Currency,
    pub rate: f64,
}

impl RateTable {
    /// Table with only the base currency recorded
    pub fn new() -> Self {
        let mut rates = [None; CATALOG_SIZE];
        rates[Currency::BASE.index()] = Some(BASE_RATE);
        Self { rates }
    }

    /// Record (or overwrite) the rate for a foreign currency.
    ///
    /// Returns the previously recorded rate, if any.
    pub fn record(&mut self, currency: Currency, rate: f64) -> Result<Option<f64>> {
        if currency.is_base() {
            return Err(BankError::BaseRateFixed);
        }
        validate_rate(rate)?;

        let previous = self.rates[currency.index()].replace(rate);
        log::debug!(
            "Recorded rate {} = {} (previous: {:?})",
            currency,
            rate,
            previous
        );
        Ok(previous)
    }

    /// Recorded rate, or `None` if never recorded
    pub fn get(&self, currency: Currency) -> Option<f64> {
        self.rates[currency.index()]
    }

    /// Recorded rate, or `MissingRate`
    pub fn rate(&self, currency: Currency) -> Result<f64> {
        self.get(currency).ok_or_else(|| BankError::MissingRate {
            currency: currency.code().to_string(),
        })
    }

    pub fn is_recorded(&self, currency: Currency) -> bool {
        self.get(currency).is_some()
    }

    /// All recorded rates in catalog order, base included
    pub fn recorded(&self) -> Vec<RecordedRate> {
        Currency::ALL
            .iter()
            .filter_map(|&currency| {
                self.get(currency)
                    .map(|rate| RecordedRate { currency, rate })
            })
            .collect()
    }

    /// Convert an amount between two currencies using the recorded rates
    pub fn convert(&self, amount: f64, from: Currency, to: Currency) -> Result<f64> {
        let source_rate = self.rate(from)?;
        let target_rate = self.rate(to)?;
        Ok(convert_amount(amount, source_rate, target_rate))
    }
}

impl Default for RateTable {
    fn default() -> Self {
        Self::new()
    }
}

/// Pure conversion: `amount * source_rate / target_rate`.
///
/// Both rates must be positive, which `RateTable` guarantees for anything
/// it hands out.
pub fn convert_amount(amount: f64, source_rate: f64, target_rate: f64) -> f64 {
    amount * (source_rate / target_rate)
}

/// A rate must be a finite number greater than zero
pub fn validate_rate(rate: f64) -> Result<f64> {
    if !rate.is_finite() || rate <= 0.0 {
        return Err(BankError::Range(format!(
            "exchange rate must be greater than 0, got {}",
            rate
        )));
    }
    Ok(rate)
}
