//! Standard exit codes (BSD sysexits.h compatible)

/// Successful termination; for `same`, the trees are equivalent
pub const OK: i32 = 0;

/// Trees are not equivalent
pub const DIFFERENT: i32 = 1;

/// Command line usage error
pub const USAGE: i32 = 64;

/// Data format error
pub const DATAERR: i32 = 65;

/// Input/output error
pub const IOERR: i32 = 74;

/// Configuration error
pub const CONFIG: i32 = 78;
