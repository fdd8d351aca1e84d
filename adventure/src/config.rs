//! Adventure configuration (`--config <PATH>`, TOML).

use anyhow::{Result, bail};
use console_io::config::Validate;
use serde::{Deserialize, Serialize};

use crate::core::session::DEFAULT_STARTING_HEALTH;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct AdventureConfig {
    /// Health the player enters the starting chamber with.
    pub starting_health: i32,
}

impl Default for AdventureConfig {
    fn default() -> Self {
        Self {
            starting_health: DEFAULT_STARTING_HEALTH,
        }
    }
}

impl Validate for AdventureConfig {
    fn validate(&self) -> Result<()> {
        if self.starting_health <= 0 {
            bail!("starting_health must be > 0");
        }
        Ok(())
    }
}
