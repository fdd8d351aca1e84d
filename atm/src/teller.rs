//! Console session: PIN check, then the transaction menu until Exit.

use std::io::{BufRead, Write};

use anyhow::Result;
use console_io::{Console, Reading};
use tracing::{debug, info, warn};

use crate::config::AtmConfig;
use crate::core::account::{Account, Rejection};
use crate::core::auth::{AuthStep, PinFailure, PinGate};
use crate::core::menu::{MENU_LINES, MenuChoice};

const BANNER: &str = "=====================================";

/// How the session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// Authenticated and chose Exit.
    Exited,
    /// Ran out of PIN attempts.
    Locked,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TellerOutcome {
    pub end: SessionEnd,
    pub balance: f64,
}

/// Run one ATM session from the welcome banner to the goodbye line.
pub fn run_session<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    config: &AtmConfig,
) -> Result<TellerOutcome> {
    console.say(BANNER)?;
    console.say("      Welcome to the Rust-Bank ATM")?;
    console.say(BANNER)?;

    let mut gate = PinGate::new(config.pin, config.max_pin_attempts);
    let mut account = Account::new(config.opening_balance);

    authenticate(console, &mut gate)?;
    let end = if gate.is_authenticated() {
        info!("pin accepted");
        console.say("\nPIN accepted. Access granted.")?;
        transact(console, &mut account)?;
        SessionEnd::Exited
    } else {
        warn!("card locked after failed pin attempts");
        console.say("\nToo many incorrect PIN attempts. Your card has been locked.")?;
        console.say("Please contact your bank for assistance.")?;
        SessionEnd::Locked
    };

    console.say("\nThank you for using the ATM. Goodbye!")?;
    Ok(TellerOutcome {
        end,
        balance: account.balance(),
    })
}

/// Prompt until the gate grants access or locks.
fn authenticate<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    gate: &mut PinGate,
) -> Result<()> {
    while !gate.is_locked() {
        console.prompt("Please enter your 4-digit PIN: ")?;
        let entry = match console.read_once::<i32>()? {
            Reading::Value(pin) => Some(pin),
            Reading::Malformed => None,
        };
        match gate.attempt(entry) {
            AuthStep::Granted => return Ok(()),
            AuthStep::Rejected { failure, remaining } => {
                warn!(?failure, remaining, "pin rejected");
                console.say(match failure {
                    PinFailure::Malformed => "Invalid input. Please enter numbers only.",
                    PinFailure::Incorrect => "Incorrect PIN.",
                })?;
                console.say(format!("You have {remaining} attempt(s) remaining.\n"))?;
            }
            AuthStep::Locked => break,
        }
    }
    Ok(())
}

fn transact<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    account: &mut Account,
) -> Result<()> {
    loop {
        console.say("\n---------- ATM Main Menu ----------")?;
        for line in MENU_LINES {
            console.say(line)?;
        }
        console.say("-----------------------------------")?;
        console.prompt("Please select an option: ")?;
        let selected: i32 =
            console.read_until_valid("Invalid input. Please enter a number (1-4): ")?;

        match MenuChoice::from(selected) {
            MenuChoice::CheckBalance => console.say(format!(
                "\n-> Your current account balance is: ${:.2}",
                account.balance()
            ))?,
            MenuChoice::Withdraw => withdraw(console, account)?,
            MenuChoice::Deposit => deposit(console, account)?,
            MenuChoice::Exit => return Ok(()),
            MenuChoice::Unknown(value) => {
                debug!(value, "unknown menu option");
                console.say("Invalid option selected. Please try again.")?;
            }
        }
    }
}

/// Read one amount. A malformed answer aborts the transaction.
fn read_amount<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    ask: &str,
) -> Result<Option<f64>> {
    console.prompt(ask)?;
    match console.read_once::<f64>()? {
        Reading::Value(amount) => Ok(Some(amount)),
        Reading::Malformed => {
            console.say("Invalid amount entered.")?;
            Ok(None)
        }
    }
}

fn withdraw<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    account: &mut Account,
) -> Result<()> {
    let Some(amount) = read_amount(console, "\n-> Enter the amount to withdraw: $")? else {
        return Ok(());
    };
    match account.withdraw(amount) {
        Ok(balance) => {
            debug!(amount, balance, "withdrawal");
            console.say(format!("Please take your cash: ${amount:.2}"))?;
            console.say(format!("Your new balance is: ${balance:.2}"))
        }
        Err(rejection) => {
            warn!(%rejection, "withdrawal rejected");
            console.say(match rejection {
                Rejection::NonPositive { .. } => "Withdrawal amount must be positive.",
                Rejection::InsufficientFunds { .. } => {
                    "Insufficient funds. You cannot withdraw more than you have."
                }
            })
        }
    }
}

fn deposit<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    account: &mut Account,
) -> Result<()> {
    let Some(amount) = read_amount(console, "\n-> Enter the amount to deposit: $")? else {
        return Ok(());
    };
    match account.deposit(amount) {
        Ok(balance) => {
            debug!(amount, balance, "deposit");
            console.say(format!("Successfully deposited ${amount:.2}"))?;
            console.say(format!("Your new balance is: ${balance:.2}"))
        }
        Err(rejection) => {
            warn!(%rejection, "deposit rejected");
            console.say("Deposit amount must be positive.")
        }
    }
}
