//! Teller session - owns all state for one run of the program
//!
//! Each operation here is a guarded state transition: the preconditions are
//! checked against the account and rate table first, and nothing is mutated
//! unless every check passes. The interactive layer in `operations` only
//! collects input and calls into this type.

use crate::account::{validate_amount, Account, Registration};
use crate::currency::Currency;
use crate::error::{BankError, Result};
use crate::interest::{project, InterestTerms, Projection};
use crate::rates::{convert_amount, RateTable, RecordedRate};
use serde::Serialize;

/// Session-wide settings
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SessionSettings {
    pub interest: InterestTerms,
}

/// Result of a currency conversion. Balance is never touched by an exchange.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ExchangeQuote {
    pub from: Currency,
    pub to: Currency,
    pub amount: f64,
    pub source_rate: f64,
    pub target_rate: f64,
    pub converted: f64,
}

/// Serialisable view of the session state
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionSnapshot {
    pub account_name: Option<String>,
    pub balance: f64,
    pub currency: Currency,
    pub rates: Vec<RecordedRate>,
}

#[derive(Debug, Clone, Default)]
pub struct Session {
    account: Account,
    rates: RateTable,
    settings: SessionSettings,
}

impl Session {
    /// Fresh session: unregistered account, zero balance, only the base rate
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_settings(settings: SessionSettings) -> Self {
        Self {
            settings,
            ..Self::default()
        }
    }

    pub fn account(&self) -> &Account {
        &self.account
    }

    pub fn rates(&self) -> &RateTable {
        &self.rates
    }

    pub fn settings(&self) -> &SessionSettings {
        &self.settings
    }

    /// Registered account name, or `NoAccount`
    pub fn require_account(&self) -> Result<&str> {
        self.account.require_registered()
    }

    pub fn register(&mut self, name: &str) -> Result<Registration> {
        self.account.register(name)
    }

    pub fn deposit(&mut self, amount: f64) -> Result<f64> {
        self.account.deposit(amount)
    }

    pub fn withdraw(&mut self, amount: f64) -> Result<f64> {
        self.account.withdraw(amount)
    }

    /// Record a foreign currency rate. Last write wins.
    pub fn record_rate(&mut self, currency: Currency, rate: f64) -> Result<Option<f64>> {
        self.require_account()?;
        self.rates.record(currency, rate)
    }

    /// Rate for a currency chosen as an exchange leg
    pub fn exchange_rate(&self, currency: Currency) -> Result<f64> {
        self.rates.rate(currency)
    }

    /// Convert `amount` from one currency to another at the recorded rates
    pub fn exchange(&self, from: Currency, to: Currency, amount: f64) -> Result<ExchangeQuote> {
        self.require_account()?;
        if from == to {
            return Err(BankError::SameCurrency);
        }
        let amount = validate_amount(amount)?;
        let source_rate = self.rates.rate(from)?;
        let target_rate = self.rates.rate(to)?;

        let quote = ExchangeQuote {
            from,
            to,
            amount,
            source_rate,
            target_rate,
            converted: convert_amount(amount, source_rate, target_rate),
        };
        log::debug!("Exchange quote: {:?}", quote);
        Ok(quote)
    }

    /// Project simple interest on the current balance. Read-only.
    pub fn project_interest(&self, days: u32) -> Result<Projection> {
        self.require_account()?;
        Ok(project(self.account.balance(), days, &self.settings.interest))
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            account_name: self.account.name().map(str::to_string),
            balance: self.account.balance(),
            currency: self.account.currency(),
            rates: self.rates.recorded(),
        }
    }
}
