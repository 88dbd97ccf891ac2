//! Account object - the single account of a teller session
//!
//! The name is set at most once. The balance is held in the base currency
//! and never drops below zero.

use crate::currency::Currency;
use crate::error::{BankError, Result};
use serde::{Deserialize, Serialize};

/// Outcome of a registration attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Registration {
    /// The name was accepted and is now final
    Registered(String),
    /// An account already exists; nothing changed
    AlreadyRegistered(String),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Account {
    name: Option<String>,
    balance: f64,
}

impl Account {
    /// Unregistered account with a zero balance
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn balance(&self) -> f64 {
        self.balance
    }

    /// Balances are always held in the base currency
    pub fn currency(&self) -> Currency {
        Currency::BASE
    }

    pub fn is_registered(&self) -> bool {
        self.name.is_some()
    }

    /// Registered name, or `NoAccount`
    pub fn require_registered(&self) -> Result<&str> {
        self.name().ok_or(BankError::NoAccount)
    }

    /// Set the account name. The first successful registration is final.
    pub fn register(&mut self, name: &str) -> Result<Registration> {
        if let Some(existing) = &self.name {
            return Ok(Registration::AlreadyRegistered(existing.clone()));
        }

        let name = validate_name(name)?;
        log::debug!("Registered account '{}'", name);
        self.name = Some(name.clone());
        Ok(Registration::Registered(name))
    }

    /// Add a positive amount; returns the new balance
    pub fn deposit(&mut self, amount: f64) -> Result<f64> {
        self.require_registered()?;
        let amount = validate_amount(amount)?;

        self.balance = self.check_deposit(amount)?;
        log::debug!("Deposited {} -> balance {}", amount, self.balance);
        Ok(self.balance)
    }

    /// Remove a positive amount not exceeding the balance; returns the new balance
    pub fn withdraw(&mut self, amount: f64) -> Result<f64> {
        self.require_registered()?;
        let amount = validate_amount(amount)?;
        self.check_funds(amount)?;

        self.balance -= amount;
        log::debug!("Withdrew {} -> balance {}", amount, self.balance);
        Ok(self.balance)
    }

    /// Balance after depositing `amount`, without mutating.
    /// Deposits that would overflow the balance are rejected.
    pub fn check_deposit(&self, amount: f64) -> Result<f64> {
        let balance = self.balance + amount;
        if !balance.is_finite() {
            return Err(BankError::Range(format!(
                "deposit of {} would exceed the largest balance this account can hold",
                amount
            )));
        }
        Ok(balance)
    }

    /// Check a withdrawal against the current balance without mutating
    pub fn check_funds(&self, amount: f64) -> Result<()> {
        if amount > self.balance {
            return Err(BankError::InsufficientFunds {
                requested: amount,
                available: self.balance,
            });
        }
        Ok(())
    }
}

/// A deposit or withdrawal amount must be finite and strictly positive
pub fn validate_amount(amount: f64) -> Result<f64> {
    if !amount.is_finite() || amount <= 0.0 {
        return Err(BankError::Range(format!(
            "amount must be greater than 0, got {}",
            amount
        )));
    }
    Ok(amount)
}

/// Names are trimmed and must not be empty
pub fn validate_name(name: &str) -> Result<String> {
    let name = name.trim();
    if name.is_empty() {
        return Err(BankError::EmptyName);
    }
    Ok(name.to_string())
}
