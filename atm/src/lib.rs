//! PIN-gated ATM simulator.
//!
//! - **[`core`]**: account arithmetic, PIN gate and menu decoding. Pure, no I/O.
//! - **[`teller`]**: the console session that authenticates the user and runs
//!   the transaction menu until Exit.

pub mod config;
pub mod core;
pub mod teller;
