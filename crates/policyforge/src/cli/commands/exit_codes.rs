//! Exit code constants for CLI commands.

/// Successful operation.
pub const EXIT_SUCCESS: i32 = 0;

/// Any failure: unreadable input, invalid configuration, unknown preset.
pub const EXIT_ERROR: i32 = 2;
