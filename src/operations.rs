//! Interactive drivers for the six teller operations
//!
//! Each driver prints its header, collects input through the validation
//! loops in [`crate::input`], and applies the result to the [`Session`].
//! `NoAccount` and `MissingRate` are returned to the caller, which reports
//! them once and moves on to the return prompt.

use crate::account::validate_name;
use crate::currency::Currency;
use crate::error::{BankError, Result};
use crate::input::{
    parse_amount, parse_currency, parse_days, parse_foreign_currency, parse_rate, Terminal,
};
use crate::money::format_amount;
use crate::session::Session;
use std::fmt;
use std::io::{BufRead, Write};

/// One menu-selectable unit of work
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Register,
    Deposit,
    Withdraw,
    Exchange,
    RecordRate,
    ProjectInterest,
}

impl Operation {
    /// Menu order
    pub const ALL: [Operation; 6] = [
        Operation::Register,
        Operation::Deposit,
        Operation::Withdraw,
        Operation::Exchange,
        Operation::RecordRate,
        Operation::ProjectInterest,
    ];

    /// 1-based menu number
    pub fn number(&self) -> usize {
        *self as usize + 1
    }

    pub fn from_number(number: i64) -> Option<Self> {
        usize::try_from(number)
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|i| Self::ALL.get(i).copied())
    }

    pub fn label(&self) -> &'static str {
        match self {
            Operation::Register => "Register Account Name",
            Operation::Deposit => "Deposit Amount",
            Operation::Withdraw => "Withdraw Amount",
            Operation::Exchange => "Currency Exchange",
            Operation::RecordRate => "Record Exchange Rates",
            Operation::ProjectInterest => "Show Interest Computation",
        }
    }

    /// Run this operation to completion or abort
    pub fn run<R: BufRead, W: Write>(
        &self,
        session: &mut Session,
        term: &mut Terminal<R, W>,
    ) -> Result<()> {
        log::debug!("Running operation: {}", self.label());
        match self {
            Operation::Register => register(session, term),
            Operation::Deposit => deposit(session, term),
            Operation::Withdraw => withdraw(session, term),
            Operation::Exchange => exchange(session, term),
            Operation::RecordRate => record_rate(session, term),
            Operation::ProjectInterest => project_interest(session, term),
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]. {}", self.number(), self.label())
    }
}

pub fn register<R: BufRead, W: Write>(
    session: &mut Session,
    term: &mut Terminal<R, W>,
) -> Result<()> {
    term.console().heading("Register Account Name")?;

    if let Some(existing) = session.account().name() {
        let message = format!("An account is already registered under '{}'.", existing);
        return term.console().notice(&message);
    }

    let name = term.ask_until("Enter Account Name", validate_name)?;
    session.register(&name)?;
    term.console().success(&format!("Account '{}' registered.", name))
}

pub fn deposit<R: BufRead, W: Write>(
    session: &mut Session,
    term: &mut Terminal<R, W>,
) -> Result<()> {
    session.require_account()?;
    term.console().heading("Deposit Amount")?;
    account_header(session, term)?;

    let account = session.account();
    let amount = term.ask_until("Deposit Amount", |line| {
        let amount = parse_amount(line)?;
        account.check_deposit(amount)?;
        Ok(amount)
    })?;

    let balance = session.deposit(amount)?;
    term.console().field("New Balance", format_amount(balance))
}

pub fn withdraw<R: BufRead, W: Write>(
    session: &mut Session,
    term: &mut Terminal<R, W>,
) -> Result<()> {
    session.require_account()?;
    term.console().heading("Withdraw Amount")?;
    account_header(session, term)?;

    let account = session.account();
    let amount = term.ask_until("Withdraw Amount", |line| {
        let amount = parse_amount(line)?;
        account.check_funds(amount)?;
        Ok(amount)
    })?;

    let balance = session.withdraw(amount)?;
    term.console().field("New Balance", format_amount(balance))
}

/// Quote conversions until the operator declines another one
pub fn exchange<R: BufRead, W: Write>(
    session: &mut Session,
    term: &mut Terminal<R, W>,
) -> Result<()> {
    session.require_account()?;
    loop {
        exchange_once(session, term)?;
        if !term.ask_yes_no("Convert another currency (Y/N)")? {
            return Ok(());
        }
    }
}

fn exchange_once<R: BufRead, W: Write>(
    session: &Session,
    term: &mut Terminal<R, W>,
) -> Result<()> {
    term.console().heading("Foreign Currency Exchange")?;
    list_currencies(session, term, Currency::ALL)?;

    // an out-of-range option reprompts; a valid option without a rate aborts
    let source = term.ask_until("Source Currency Option", |line| {
        let currency = parse_currency(line)?;
        session.exchange_rate(currency)?;
        Ok(currency)
    })?;

    let amount = term.ask_until("Source Amount", parse_amount)?;

    term.console().line("Exchanged Currency Options:")?;
    list_currencies(session, term, Currency::ALL)?;

    let target = term.ask_until("Exchange Currency", |line| {
        let currency = parse_currency(line)?;
        if currency == source {
            return Err(BankError::SameCurrency);
        }
        session.exchange_rate(currency)?;
        Ok(currency)
    })?;

    let quote = session.exchange(source, target, amount)?;
    term.console().field(
        "Exchanged Amount",
        format!("{} {}", format_amount(quote.converted), quote.to.code()),
    )
}

pub fn record_rate<R: BufRead, W: Write>(
    session: &mut Session,
    term: &mut Terminal<R, W>,
) -> Result<()> {
    session.require_account()?;
    term.console().heading("Record Exchange Rates")?;
    list_currencies(session, term, Currency::foreign())?;

    let currency = term.ask_until("Select Foreign Currency", parse_foreign_currency)?;
    let rate = term.ask_until("Exchange Rate", parse_rate)?;

    let previous = session.record_rate(currency, rate)?;
    let base = Currency::BASE.code();
    if let Some(previous) = previous {
        term.console().notice(&format!(
            "Replaced previous rate: 1 {} = {} {}",
            currency, previous, base
        ))?;
    }
    term.console()
        .success(&format!("Recorded rate: 1 {} = {} {}", currency, rate, base))
}

pub fn project_interest<R: BufRead, W: Write>(
    session: &mut Session,
    term: &mut Terminal<R, W>,
) -> Result<()> {
    session.require_account()?;
    let terms = session.settings().interest;

    term.console().heading("Show Interest Amount")?;
    account_header(session, term)?;
    term.console()
        .field("Interest Rate", format!("{}%", terms.annual_percent()))?;
    term.console().blank()?;

    let days = term.ask_until("Total Number of Days", parse_days)?;
    let projection = session.project_interest(days)?;

    let console = term.console();
    console.line("Day | Interest | Balance")?;
    for row in projection.rows() {
        console.line(format!(
            "{:<4}| {:<9}| {}",
            row.day,
            format_amount(row.interest),
            format_amount(row.balance)
        ))?;
    }
    Ok(())
}

fn account_header<R: BufRead, W: Write>(
    session: &Session,
    term: &mut Terminal<R, W>,
) -> Result<()> {
    let account = session.account();
    let console = term.console();
    console.field("Account Name", account.require_registered()?)?;
    console.field("Current Balance", format_amount(account.balance()))?;
    console.field("Currency", account.currency().code())?;
    console.blank()
}

fn list_currencies<R, W, I>(
    session: &Session,
    term: &mut Terminal<R, W>,
    currencies: I,
) -> Result<()>
where
    R: BufRead,
    W: Write,
    I: IntoIterator<Item = Currency>,
{
    let console = term.console();
    for currency in currencies {
        let rate = match session.rates().get(currency) {
            Some(rate) => format!("rate {}", rate),
            None => "rate not recorded".to_string(),
        };
        console.line(format!(
            "[{}]. {} ({}) - {}",
            currency.index(),
            currency.name(),
            currency.code(),
            rate
        ))?;
    }
    console.blank()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::{Console, ConsoleStyle};
    use std::io::Cursor;

    fn run(operation: Operation, session: &mut Session, input: &str) -> (Result<()>, String) {
        let mut term = Terminal::new(
            Cursor::new(input.as_bytes().to_vec()),
            Console::new(Vec::new(), ConsoleStyle::plain()),
        );
        let result = operation.run(session, &mut term);
        let out = String::from_utf8(term.into_console().into_inner()).unwrap();
        (result, out)
    }

    fn registered() -> Session {
        let mut session = Session::new();
        session.register("Alice").unwrap();
        session
    }

    #[test]
    fn test_menu_numbers() {
        assert_eq!(Operation::from_number(1), Some(Operation::Register));
        assert_eq!(Operation::from_number(6), Some(Operation::ProjectInterest));
        assert_eq!(Operation::from_number(0), None);
        assert_eq!(Operation::from_number(7), None);
        assert_eq!(Operation::from_number(-1), None);
        assert_eq!(Operation::Exchange.to_string(), "[4]. Currency Exchange");
    }

    #[test]
    fn test_register_reprompts_empty_name() {
        let mut session = Session::new();
        let (result, out) = run(Operation::Register, &mut session, "  \nAlice\n");
        assert!(result.is_ok());
        assert!(out.contains("Account name cannot be empty"));
        assert_eq!(session.account().name(), Some("Alice"));
    }

    #[test]
    fn test_register_twice_keeps_first_name() {
        let mut session = registered();
        let (result, out) = run(Operation::Register, &mut session, "Bob\n");
        assert!(result.is_ok());
        assert!(out.contains("already registered under 'Alice'"));
        assert!(!out.contains("Enter Account Name"));
        assert_eq!(session.account().name(), Some("Alice"));
    }

    #[test]
    fn test_deposit_without_account_aborts() {
        let mut session = Session::new();
        let (result, out) = run(Operation::Deposit, &mut session, "100\n");
        assert!(matches!(result, Err(BankError::NoAccount)));
        assert!(!out.contains("Deposit Amount: "));
    }

    #[test]
    fn test_deposit_reprompts_invalid_amounts() {
        let mut session = registered();
        let (result, out) = run(Operation::Deposit, &mut session, "abc\n0\n-10\n500\n");
        assert!(result.is_ok());
        assert_eq!(out.matches("Invalid Input!").count(), 3);
        assert!(out.contains("Account Name: Alice"));
        assert!(out.contains("New Balance: 500.00"));
        assert_eq!(session.account().balance(), 500.0);
    }

    #[test]
    fn test_withdraw_checks_current_balance() {
        let mut session = registered();
        session.deposit(500.0).unwrap();
        let (result, out) = run(Operation::Withdraw, &mut session, "600\nxyz\n600\n200\n");
        assert!(result.is_ok());
        assert_eq!(out.matches("Insufficient Balance!").count(), 2);
        assert_eq!(out.matches("Invalid Input!").count(), 1);
        assert!(out.contains("New Balance: 300.00"));
        assert_eq!(session.account().balance(), 300.0);
    }

    #[test]
    fn test_record_rate_reprompts() {
        let mut session = registered();
        let (result, out) = run(Operation::RecordRate, &mut session, "0\n9\n2\n-1\nabc\n58\n");
        assert!(result.is_ok());
        assert_eq!(out.matches("Please enter a number from 1 to 5").count(), 2);
        assert!(out.contains("exchange rate must be greater than 0"));
        assert!(out.contains("Recorded rate: 1 JPY = 58 PHP"));
        assert_eq!(session.rates().get(Currency::JPY), Some(58.0));
    }

    #[test]
    fn test_exchange_scenario() {
        let mut session = registered();
        session.record_rate(Currency::JPY, 58.0).unwrap();
        session.record_rate(Currency::GBP, 0.40).unwrap();

        let (result, out) = run(Operation::Exchange, &mut session, "2\n100\n2\n7\n3\nn\n");
        assert!(result.is_ok());
        assert!(out.contains("Source and exchange currency must differ"));
        assert!(out.contains("currency option must be between 0 and 5"));
        assert!(out.contains("Exchanged Amount: 14500.00 GBP"));
        assert_eq!(session.account().balance(), 0.0);
    }

    #[test]
    fn test_exchange_missing_rate_aborts() {
        let mut session = registered();
        let (result, out) = run(Operation::Exchange, &mut session, "1\n100\n");
        assert!(matches!(
            result,
            Err(BankError::MissingRate { ref currency }) if currency == "USD"
        ));
        assert!(!out.contains("Source Amount"));
    }

    #[test]
    fn test_exchange_repeats_on_yes() {
        let mut session = registered();
        session.record_rate(Currency::USD, 50.0).unwrap();
        let input = "1\n2\n0\nmaybe\ny\n0\n100\n1\nN\n";
        let (result, out) = run(Operation::Exchange, &mut session, input);
        assert!(result.is_ok());
        assert!(out.contains("Exchanged Amount: 100.00 PHP"));
        assert!(out.contains("Exchanged Amount: 2.00 USD"));
        assert!(out.contains("'MAYBE' is not Y or N"));
    }

    #[test]
    fn test_interest_table() {
        let mut session = registered();
        session.deposit(1000.0).unwrap();
        let (result, out) = run(Operation::ProjectInterest, &mut session, "-3\n3\n");
        assert!(result.is_ok());
        assert!(out.contains("Interest Rate: 5%"));
        assert!(out.contains("number of days must be 0 or more"));
        assert!(out.contains("1   | 0.14     | 1000.14"));
        assert!(out.contains("2   | 0.14     | 1000.28"));
        assert!(out.contains("3   | 0.14     | 1000.42"));
        assert_eq!(session.account().balance(), 1000.0);
    }
}
