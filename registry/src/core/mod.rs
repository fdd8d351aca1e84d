//! Deterministic registry rules, free of console I/O.

pub mod grade;
pub mod menu;
pub mod record;
pub mod registry;
