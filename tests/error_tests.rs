//! Tests for operator-visible error messages
//!
//! Every rejection the operator can hit must read differently so a retry is
//! never silent or ambiguous.

use bank_teller::error::BankError;
use std::collections::HashSet;

#[cfg(test)]
mod error_message_tests {
    use super::*;

    // ========== Reprompt errors ==========

    #[test]
    fn test_parse_error() {
        let err = BankError::Parse("12abc".to_string());
        let msg = err.to_string();
        assert!(msg.starts_with("Invalid Input!"));
        assert!(msg.contains("12abc"));
        assert!(err.is_recoverable());
    }

    #[test]
    fn test_range_error() {
        let err = BankError::Range("amount must be greater than 0, got -5".to_string());
        assert_eq!(
            err.to_string(),
            "Invalid Input! amount must be greater than 0, got -5"
        );
        assert!(err.is_recoverable());
    }

    #[test]
    fn test_insufficient_funds() {
        let err = BankError::InsufficientFunds {
            requested: 600.0,
            available: 500.0,
        };
        let msg = err.to_string();
        assert!(msg.starts_with("Insufficient Balance!"));
        assert!(msg.contains("600.00"));
        assert!(msg.contains("500.00"));
        assert!(err.is_recoverable());
    }

    // ========== Abort errors ==========

    #[test]
    fn test_no_account() {
        let err = BankError::NoAccount;
        assert!(err.to_string().contains("register an account name first"));
        assert!(err.is_abort());
        assert!(!err.is_recoverable());
    }

    #[test]
    fn test_missing_rate() {
        let err = BankError::MissingRate {
            currency: "JPY".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("JPY"));
        assert!(msg.contains("Please record the exchange rate first."));
        assert!(err.is_abort());
    }

    // ========== Fatal errors ==========

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        let err: BankError = io.into();
        assert!(err.to_string().contains("pipe closed"));
        assert!(!err.is_recoverable());
        assert!(!err.is_abort());
    }

    #[test]
    fn test_messages_are_distinct() {
        let errors = vec![
            BankError::Parse("x".to_string()),
            BankError::Range("x".to_string()),
            BankError::SameCurrency,
            BankError::EmptyName,
            BankError::InsufficientFunds {
                requested: 1.0,
                available: 0.0,
            },
            BankError::NoAccount,
            BankError::MissingRate {
                currency: "USD".to_string(),
            },
            BankError::BaseRateFixed,
            BankError::UnrecognizedMenuChoice("x".to_string()),
        ];
        let messages: HashSet<String> = errors.iter().map(|e| e.to_string()).collect();
        assert_eq!(messages.len(), errors.len());
    }
}
