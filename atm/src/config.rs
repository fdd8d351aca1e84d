//! ATM configuration (`--config <PATH>`, TOML).

use anyhow::{Result, bail};
use console_io::config::Validate;
use serde::{Deserialize, Serialize};

use crate::core::account::OPENING_BALANCE;
use crate::core::auth::{DEFAULT_PIN, MAX_PIN_ATTEMPTS};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AtmConfig {
    /// The single PIN the card accepts (four digits).
    pub pin: i32,
    pub opening_balance: f64,
    /// Attempts before the card is locked.
    pub max_pin_attempts: u32,
}

impl Default for AtmConfig {
    fn default() -> Self {
        Self {
            pin: DEFAULT_PIN,
            opening_balance: OPENING_BALANCE,
            max_pin_attempts: MAX_PIN_ATTEMPTS,
        }
    }
}

impl Validate for AtmConfig {
    fn validate(&self) -> Result<()> {
        if !(0..=9999).contains(&self.pin) {
            bail!("pin must be between 0 and 9999");
        }
        if !self.opening_balance.is_finite() || self.opening_balance < 0.0 {
            bail!("opening_balance must be a finite amount >= 0");
        }
        if self.max_pin_attempts == 0 {
            bail!("max_pin_attempts must be > 0");
        }
        Ok(())
    }
}
