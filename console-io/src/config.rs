//! Optional TOML configuration for the simulation binaries.
//!
//! Each binary defines its own `#[serde(default)]` config struct. Running
//! without `--config` uses the built-in defaults; a file only needs to name
//! the fields it overrides.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;

/// Semantic checks that TOML deserialization cannot express.
pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Load config from `path`, or the defaults when no path is given.
///
/// An explicit path that cannot be read is an error.
pub fn load_config<T>(path: Option<&Path>) -> Result<T>
where
    T: DeserializeOwned + Default + Validate,
{
    let cfg = match path {
        None => T::default(),
        Some(path) => {
            let contents =
                fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
            toml::from_str(&contents).with_context(|| format!("parse {}", path.display()))?
        }
    };
    cfg.validate()?;
    Ok(cfg)
}
