//! Process exit codes

/// Successful execution
pub const EXIT_SUCCESS: u8 = 0;

/// General error, including failure to write output
pub const EXIT_ERROR: u8 = 1;

/// Invalid arguments or unknown command (clap's own usage code)
pub const EXIT_USAGE: u8 = 2;

/// The commands file could not be read or parsed
pub const EXIT_LOAD_ERROR: u8 = 3;
