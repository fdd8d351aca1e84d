//! Process exit codes shared by the simulation binaries.

/// The session ended through one of its own exit paths (won, perished,
/// card locked, menu exit).
pub const OK: i32 = 0;
/// The session could not run: bad config, I/O failure, or input closed
/// while an answer was required.
pub const INVALID: i32 = 1;
