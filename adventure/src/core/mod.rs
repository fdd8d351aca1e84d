//! Deterministic adventure rules.
//!
//! Core modules never touch the console. Every transition takes the session
//! by `&mut` and returns the narration to print, so whole playthroughs can be
//! replayed in tests from a list of choices.

pub mod room;
pub mod session;
pub mod transitions;
