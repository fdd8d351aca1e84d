//! Single in-memory balance with withdrawal and deposit rules.

use std::fmt;

pub const OPENING_BALANCE: f64 = 5000.75;

/// Why a transaction left the balance untouched.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Rejection {
    /// Zero or negative amount.
    NonPositive { amount: f64 },
    /// Withdrawal larger than the current balance.
    InsufficientFunds { requested: f64, available: f64 },
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositive { amount } => write!(f, "amount {amount:.2} is not positive"),
            Self::InsufficientFunds {
                requested,
                available,
            } => write!(f, "requested {requested:.2} exceeds available {available:.2}"),
        }
    }
}

impl std::error::Error for Rejection {}

#[derive(Debug, Clone, PartialEq)]
pub struct Account {
    balance: f64,
}

impl Account {
    pub fn new(opening_balance: f64) -> Self {
        Self {
            balance: opening_balance,
        }
    }

    pub fn balance(&self) -> f64 {
        self.balance
    }

    /// Take `amount` out and return the new balance.
    ///
    /// Never lets the balance drop below zero.
    pub fn withdraw(&mut self, amount: f64) -> Result<f64, Rejection> {
        if amount <= 0.0 {
            return Err(Rejection::NonPositive { amount });
        }
        if amount > self.balance {
            return Err(Rejection::InsufficientFunds {
                requested: amount,
                available: self.balance,
            });
        }
        self.balance -= amount;
        Ok(self.balance)
    }

    /// Add `amount` and return the new balance. Deposits have no upper bound.
    pub fn deposit(&mut self, amount: f64) -> Result<f64, Rejection> {
        if amount <= 0.0 {
            return Err(Rejection::NonPositive { amount });
        }
        self.balance += amount;
        Ok(self.balance)
    }
}

impl Default for Account {
    fn default() -> Self {
        Self::new(OPENING_BALANCE)
    }
}
