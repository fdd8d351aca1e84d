//! Deterministic ATM rules, free of console I/O.

pub mod account;
pub mod auth;
pub mod menu;
