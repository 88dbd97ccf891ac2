//! # Bank Teller
//!
//! A single-session, terminal-driven simulation of one bank account:
//! register a name, deposit and withdraw, convert between currencies at
//! recorded exchange rates, and project simple daily interest.
//!
//! All state lives in a [`session::Session`] owned by the
//! [`menu::MenuController`]; nothing is persisted between runs.
//!
//! ## Example
//!
//! ```rust
//! use bank_teller::prelude::*;
//! use std::io::Cursor;
//!
//! let input = Cursor::new("1\nAlice\nY\n2\n500\nN\n");
//! let terminal = Terminal::new(input, Console::new(Vec::new(), ConsoleStyle::plain()));
//! let mut controller = MenuController::new(Session::new(), terminal);
//! controller.run().unwrap();
//!
//! assert_eq!(controller.session().account().balance(), 500.0);
//! ```

pub mod account;
pub mod console;
pub mod currency;
pub mod error;
pub mod input;
pub mod interest;
pub mod menu;
pub mod money;
pub mod operations;
pub mod rates;
pub mod session;

pub mod prelude {
    //! Commonly used types
    pub use crate::account::{Account, Registration};
    pub use crate::console::{Console, ConsoleStyle};
    pub use crate::currency::Currency;
    pub use crate::error::{BankError, Result};
    pub use crate::input::Terminal;
    pub use crate::interest::{InterestTerms, Projection, ProjectionRow};
    pub use crate::menu::MenuController;
    pub use crate::operations::Operation;
    pub use crate::rates::RateTable;
    pub use crate::session::{ExchangeQuote, Session, SessionSettings, SessionSnapshot};
}
