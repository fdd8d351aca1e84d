//! Fixed-capacity student grade registry.
//!
//! - **[`core`]**: records, scores, letter grades and the append-only registry.
//!   Pure, no I/O.
//! - **[`report`]**: fixed-width table rendering.
//! - **[`app`]**: the console menu loop.

pub mod app;
pub mod config;
pub mod core;
pub mod report;
