//! Menu controller - the top-level loop of a teller session

use crate::console::Console;
use crate::error::{BankError, Result};
use crate::input::{parse_integer, Terminal};
use crate::operations::Operation;
use crate::session::Session;
use std::io::{BufRead, Write};

pub const FAREWELL: &str = "Thank you for using the program!";

/// Parse a menu selection (1-6)
pub fn parse_menu_choice(input: &str) -> Result<Operation> {
    parse_integer(input)
        .ok()
        .and_then(Operation::from_number)
        .ok_or_else(|| BankError::UnrecognizedMenuChoice(input.trim().to_string()))
}

/// Drives one session: menu, operation, return prompt, until the operator
/// exits or input ends.
pub struct MenuController<R: BufRead, W: Write> {
    session: Session,
    terminal: Terminal<R, W>,
}

impl<R: BufRead, W: Write> MenuController<R, W> {
    pub fn new(session: Session, terminal: Terminal<R, W>) -> Self {
        Self { session, terminal }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Split back into the session and the console, e.g. to inspect a transcript
    pub fn into_parts(self) -> (Session, Console<W>) {
        (self.session, self.terminal.into_console())
    }

    /// Run until the operator answers N at the return prompt or input ends
    pub fn run(&mut self) -> Result<()> {
        log::info!("Teller session started");

        loop {
            let operation = match self.select_operation() {
                Ok(Some(operation)) => operation,
                Ok(None) => continue,
                Err(BankError::InputClosed) => break,
                Err(err) => return Err(err),
            };

            match operation.run(&mut self.session, &mut self.terminal) {
                Ok(()) => {}
                Err(err) if err.is_abort() => self.terminal.console().error(&err)?,
                Err(BankError::InputClosed) => break,
                Err(err) => return Err(err),
            }

            match self.terminal.ask_yes_no("Back to the main menu (Y/N)") {
                Ok(true) => continue,
                Ok(false) | Err(BankError::InputClosed) => break,
                Err(err) => return Err(err),
            }
        }

        self.terminal.console().success(FAREWELL)?;
        self.teardown()
    }

    /// Show the menu and read one selection. `None` means the selection was
    /// rejected and the menu should be shown again.
    fn select_operation(&mut self) -> Result<Option<Operation>> {
        self.display_menu()?;
        let line = self.terminal.ask("Please select an option")?;

        match parse_menu_choice(&line) {
            Ok(operation) => Ok(Some(operation)),
            Err(err) => {
                log::debug!("Unrecognized menu choice: {:?}", line);
                self.terminal.console().error(&err)?;
                Ok(None)
            }
        }
    }

    fn display_menu(&mut self) -> Result<()> {
        let console = self.terminal.console();
        console.blank()?;
        console.heading("Select Transaction:")?;
        for operation in Operation::ALL {
            console.line(operation.to_string())?;
        }
        console.blank()
    }

    fn teardown(&self) -> Result<()> {
        if log::log_enabled!(log::Level::Debug) {
            let snapshot = serde_json::to_string(&self.session.snapshot())?;
            log::debug!("Session snapshot at exit: {}", snapshot);
        }
        log::info!("Teller session ended");
        Ok(())
    }
}
