//! Exit codes for the pancanga binary
//!
//! Leaving through the `Exit` menu choice always ends with status 0.

/// General error - unspecified failure
pub const ERROR: i32 = 1;

/// Engine error - the calendar engine could not be reached or failed
pub const ENGINE_ERROR: i32 = 3;

/// IO error - the terminal went away or output could not be written
pub const IO_ERROR: i32 = 5;
