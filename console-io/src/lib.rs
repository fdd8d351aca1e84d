//! Line-oriented console plumbing shared by the lab simulations.
//!
//! The simulations themselves (`adventure`, `atm`, `registry`) own all of their
//! state and rules. This crate only carries the ambient pieces they have in
//! common:
//!
//! - **[`console`]**: prompt/read loop over any `BufRead`/`Write` pair, with
//!   retry-on-malformed-input combinators.
//! - **[`scan`]**: pure `scanf`-style numeric prefix scanning.
//! - **[`config`]**: optional TOML config loading with validation.
//! - **[`logging`]**: `tracing` setup writing to stderr.
//! - **[`exit_codes`]**: process exit codes.

pub mod config;
pub mod console;
pub mod exit_codes;
pub mod logging;
pub mod scan;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use console::{Console, InputClosed, Reading};
pub use scan::Scan;
