/// Standard Unix exit codes for the learnify CLI application.
///
/// These codes follow the BSD convention where possible.
///
/// Successful termination
pub const SUCCESS: i32 = 0;

/// Command line usage error - invalid arguments, unknown ids, etc.
pub const USAGE: i32 = 64;

/// Internal or runtime failure, e.g. the browser could not be launched
pub const SOFTWARE: i32 = 70;

/// Persisting a store to disk failed
pub const IOERR: i32 = 74;

/// Operation was cancelled by user (typically Ctrl+C or declined confirmation)
pub const CANCEL: i32 = 130;
