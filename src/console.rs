//! Operator-facing output
//!
//! Wraps any `Write` so the same code drives a real terminal and the
//! in-memory buffers used in tests.

use crate::error::{BankError, Result};
use colored::Colorize;
use std::io::Write;

/// Output styling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConsoleStyle {
    pub color: bool,
}

impl ConsoleStyle {
    pub fn plain() -> Self {
        Self { color: false }
    }

    pub fn colored() -> Self {
        Self { color: true }
    }
}

pub struct Console<W: Write> {
    out: W,
    style: ConsoleStyle,
}

impl<W: Write> Console<W> {
    pub fn new(out: W, style: ConsoleStyle) -> Self {
        Self { out, style }
    }

    /// Give back the underlying writer
    pub fn into_inner(self) -> W {
        self.out
    }

    pub fn line(&mut self, text: impl AsRef<str>) -> Result<()> {
        writeln!(self.out, "{}", text.as_ref())?;
        Ok(())
    }

    pub fn blank(&mut self) -> Result<()> {
        writeln!(self.out)?;
        Ok(())
    }

    pub fn heading(&mut self, text: &str) -> Result<()> {
        if self.style.color {
            self.line(text.cyan().bold().to_string())
        } else {
            self.line(text)
        }
    }

    /// A labelled value, e.g. `Current Balance: 500.00`
    pub fn field(&mut self, label: &str, value: impl AsRef<str>) -> Result<()> {
        if self.style.color {
            self.line(format!("{} {}", format!("{}:", label).bold(), value.as_ref()))
        } else {
            self.line(format!("{}: {}", label, value.as_ref()))
        }
    }

    pub fn success(&mut self, text: &str) -> Result<()> {
        if self.style.color {
            self.line(text.green().to_string())
        } else {
            self.line(text)
        }
    }

    pub fn notice(&mut self, text: &str) -> Result<()> {
        if self.style.color {
            self.line(text.yellow().to_string())
        } else {
            self.line(text)
        }
    }

    pub fn error(&mut self, err: &BankError) -> Result<()> {
        if self.style.color {
            self.line(err.to_string().red().to_string())
        } else {
            self.line(err.to_string())
        }
    }

    /// Print a prompt label without a newline
    pub fn prompt(&mut self, label: &str) -> Result<()> {
        write!(self.out, "{}: ", label)?;
        self.out.flush()?;
        Ok(())
    }
}
