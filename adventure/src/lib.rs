//! Five-room text adventure.
//!
//! - **[`core`]**: the room state machine. Pure functions over a [`core::session::Session`];
//!   no I/O.
//! - **[`play`]**: the console loop that shows each scene, reads the player's
//!   choice, and applies the transition.

pub mod config;
pub mod core;
pub mod play;
