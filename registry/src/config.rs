//! Registry configuration (`--config <PATH>`, TOML).

use anyhow::{Result, bail};
use console_io::config::Validate;
use serde::{Deserialize, Serialize};

use crate::core::registry::DEFAULT_CAPACITY;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct RegistryConfig {
    /// Maximum number of records.
    pub capacity: usize,
    /// Name buffer size including its terminator; names keep
    /// `max_name_len - 1` characters.
    pub max_name_len: usize,
    /// Clear the terminal before drawing the menu. Ignored when stdout is
    /// not a terminal.
    pub clear_screen: bool,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            max_name_len: 50,
            clear_screen: true,
        }
    }
}

impl RegistryConfig {
    pub fn max_name_chars(&self) -> usize {
        self.max_name_len.saturating_sub(1)
    }
}

impl Validate for RegistryConfig {
    fn validate(&self) -> Result<()> {
        if self.capacity == 0 {
            bail!("capacity must be > 0");
        }
        if self.max_name_len < 2 {
            bail!("max_name_len must be >= 2");
        }
        Ok(())
    }
}
