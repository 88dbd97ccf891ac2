//! Error types for the bank teller
//!
//! Every variant's `Display` text is what the operator sees, so each kind of
//! rejection reads differently on screen.

use thiserror::Error;

/// Main error type for teller operations
#[derive(Error, Debug)]
pub enum BankError {
    #[error("Invalid Input! '{0}' is not a valid number")]
    Parse(String),

    #[error("Invalid Input! {0}")]
    Range(String),

    #[error("Invalid choice! Source and exchange currency must differ")]
    SameCurrency,

    #[error("Invalid Input! Account name cannot be empty")]
    EmptyName,

    #[error("Insufficient Balance! Requested {requested:.2}, available {available:.2}")]
    InsufficientFunds { requested: f64, available: f64 },

    #[error("No account registered yet. Please register an account name first.")]
    NoAccount,

    #[error("Exchange rate for {currency} is not recorded yet. Please record the exchange rate first.")]
    MissingRate { currency: String },

    #[error("The base currency rate is fixed at 1.0 and cannot be recorded")]
    BaseRateFixed,

    #[error("Invalid choice! '{0}' is not a menu option")]
    UnrecognizedMenuChoice(String),

    #[error("Input closed")]
    InputClosed,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl BankError {
    /// Whether the error is answered by asking the same question again.
    ///
    /// `NoAccount` and `MissingRate` abort the operation instead, and
    /// `Io`/`InputClosed` end the session.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            BankError::Parse(_)
                | BankError::Range(_)
                | BankError::SameCurrency
                | BankError::EmptyName
                | BankError::InsufficientFunds { .. }
                | BankError::BaseRateFixed
                | BankError::UnrecognizedMenuChoice(_)
        )
    }

    /// Whether the error aborts the current operation back to the return prompt.
    pub fn is_abort(&self) -> bool {
        matches!(self, BankError::NoAccount | BankError::MissingRate { .. })
    }
}

/// Result type alias for teller operations
pub type Result<T> = std::result::Result<T, BankError>;
