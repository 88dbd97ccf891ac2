//! bank-teller CLI - interactive single-account teller
//!
//! ## Example Usage
//!
//! ```bash
//! # Start a session
//! bank-teller
//!
//! # Plain output, debug logging to stderr
//! RUST_LOG=debug bank-teller --no-color
//! ```

use anyhow::Context as _;
use bank_teller::console::{Console, ConsoleStyle};
use bank_teller::input::Terminal;
use bank_teller::menu::MenuController;
use bank_teller::money::format_amount;
use bank_teller::session::Session;
use clap::Parser;
use colored::Colorize;
use std::io;
use std::process;

/// bank-teller: register, deposit, withdraw, exchange and project interest
#[derive(Parser)]
#[command(name = "bank-teller")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Interactive single-account bank teller", long_about = None)]
struct Cli {
    /// Print a version banner and a session summary on exit
    #[arg(short, long)]
    verbose: bool,

    /// Disable coloured output
    #[arg(long)]
    no_color: bool,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    if cli.no_color {
        colored::control::set_override(false);
    }

    if let Err(e) = run(&cli) {
        eprintln!("{} {:#}", "Error:".red().bold(), e);
        process::exit(1);
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let style = if cli.no_color {
        ConsoleStyle::plain()
    } else {
        ConsoleStyle::colored()
    };

    if cli.verbose {
        println!(
            "{} v{}",
            "bank-teller".cyan().bold(),
            env!("CARGO_PKG_VERSION")
        );
    }

    let stdin = io::stdin();
    let terminal = Terminal::new(stdin.lock(), Console::new(io::stdout(), style));
    let mut controller = MenuController::new(Session::new(), terminal);
    controller.run().context("teller session failed")?;

    if cli.verbose {
        print_summary(controller.session());
    }
    Ok(())
}

fn print_summary(session: &Session) {
    let snapshot = session.snapshot();
    println!();
    println!("{}", "Session Summary".green().bold());
    println!("{}", "===============".green());
    println!(
        "  {} {}",
        "Account:".bold(),
        snapshot.account_name.as_deref().unwrap_or("(none)")
    );
    println!(
        "  {} {} {}",
        "Balance:".bold(),
        format_amount(snapshot.balance),
        snapshot.currency
    );
    for recorded in snapshot.rates.iter().filter(|r| !r.currency.is_base()) {
        println!(
            "  {} 1 {} = {} {}",
            "Rate:".bold(),
            recorded.currency,
            recorded.rate,
            snapshot.currency
        );
    }
}
