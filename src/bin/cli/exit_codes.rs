//! Exit codes for the CLI tool.

use bytepack::Error;

/// Exit code constants
pub const SUCCESS: i32 = 0;
/// Fatal error occurred
pub const FATAL_ERROR: i32 = 2;
/// Input data is truncated or malformed
pub const BAD_DATA: i32 = 3;
/// A safety limit was hit
pub const LIMIT_EXCEEDED: i32 = 4;
/// I/O error
pub const IO_ERROR: i32 = 5;
/// Invalid command line arguments
pub const BAD_ARGS: i32 = 255;

/// Exit code enum for structured handling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    Success,
    FatalError,
    BadData,
    LimitExceeded,
    IoError,
    BadArgs,
}

impl ExitCode {
    /// Returns the numeric exit code
    pub fn code(self) -> i32 {
        match self {
            Self::Success => SUCCESS,
            Self::FatalError => FATAL_ERROR,
            Self::BadData => BAD_DATA,
            Self::LimitExceeded => LIMIT_EXCEEDED,
            Self::IoError => IO_ERROR,
            Self::BadArgs => BAD_ARGS,
        }
    }
}

/// Converts a bytepack error to an exit code
pub fn error_to_exit_code(error: &Error) -> ExitCode {
    match error {
        Error::Io(_) => ExitCode::IoError,
        Error::Truncated { .. }
        | Error::VarintOverflow { .. }
        | Error::CorruptBlock { .. }
        | Error::InvalidSymbol { .. }
        | Error::InvalidFormat(_) => ExitCode::BadData,
        Error::InvalidArgument(_) => ExitCode::BadArgs,
        Error::ResourceLimitExceeded(_) => ExitCode::LimitExceeded,
        // Future error variants - required by #[non_exhaustive]
        _ => ExitCode::FatalError,
    }
}
