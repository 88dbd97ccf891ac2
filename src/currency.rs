//! Currency catalog
//!
//! A fixed, ordered list of supported currencies. Index 0 is the base
//! currency every rate is quoted against.

use crate::error::{BankError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of currencies in the catalog
pub const CATALOG_SIZE: usize = 6;

/// Supported currencies, in catalog order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Currency {
    /// Philippine Peso (base)
    PHP,
    /// United States Dollar
    USD,
    /// Japanese Yen
    JPY,
    /// British Pound Sterling
    GBP,
    /// Euro
    EUR,
    /// Chinese Yuan Renminbi
    CNY,
}

impl Currency {
    /// The base currency; its rate is always 1.0
    pub const BASE: Currency = Currency::PHP;

    /// All currencies, ordered by catalog index
    pub const ALL: [Currency; CATALOG_SIZE] = [
        Currency::PHP,
        Currency::USD,
        Currency::JPY,
        Currency::GBP,
        Currency::EUR,
        Currency::CNY,
    ];

    /// ISO 4217 code
    pub fn code(&self) -> &'static str {
        match self {
            Currency::PHP => "PHP",
            Currency::USD => "USD",
            Currency::JPY => "JPY",
            Currency::GBP => "GBP",
            Currency::EUR => "EUR",
            Currency::CNY => "CNY",
        }
    }

    /// Full currency name
    pub fn name(&self) -> &'static str {
        match self {
            Currency::PHP => "Philippine Peso",
            Currency::USD => "United States Dollar",
            Currency::JPY => "Japanese Yen",
            Currency::GBP => "British Pound Sterling",
            Currency::EUR => "Euro",
            Currency::CNY => "Chinese Yuan Renminbi",
        }
    }

    /// Position in the catalog
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Look up a currency by catalog index
    pub fn from_index(index: usize) -> Result<Self> {
        Self::ALL.get(index).copied().ok_or_else(|| {
            BankError::Range(format!(
                "currency option must be between 0 and {}",
                CATALOG_SIZE - 1
            ))
        })
    }

    pub fn is_base(&self) -> bool {
        *self == Self::BASE
    }

    /// Currencies whose rates the operator may record
    pub fn foreign() -> impl Iterator<Item = Currency> {
        Self::ALL.into_iter().filter(|c| !c.is_base())
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
