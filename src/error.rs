//! Error types for byte stream, codec and cipher operations.
//!
//! This module provides the [`Error`] enum which represents all possible
//! failure modes of the crate, along with a convenient [`Result<T>`] type alias.
//!
//! # Error Handling
//!
//! Every fallible operation returns `Result<T, Error>`. Writes into a
//! [`ByteStream`](crate::ByteStream) never fail; reads, decompression and
//! decoding report malformed or truncated input instead of reading out of range.
//!
//! ```rust
//! use bytepack::{ByteStream, Error};
//!
//! let mut stream = ByteStream::from_buffer(vec![0x01, 0x02]);
//! match stream.read_int() {
//!     Err(Error::Truncated { offset, needed, available }) => {
//!         assert_eq!((offset, needed, available), (0, 4, 2));
//!     }
//!     other => panic!("unexpected result: {:?}", other),
//! }
//! ```

use std::io;

/// The main error type for this crate.
///
/// # Error Categories
///
/// | Category | Variants | Typical Cause |
/// |----------|----------|---------------|
/// | I/O | [`Io`][Self::Io] | File access in the CLI, `Read`/`Write` adapters |
/// | Truncation | [`Truncated`][Self::Truncated] | Reading past the end of a buffer |
/// | Corruption | [`CorruptBlock`][Self::CorruptBlock], [`VarintOverflow`][Self::VarintOverflow] | Malformed LZ4 or VLQ data |
/// | Encoding | [`InvalidSymbol`][Self::InvalidSymbol], [`InvalidFormat`][Self::InvalidFormat] | Malformed Base64 text |
/// | Usage | [`InvalidArgument`][Self::InvalidArgument] | Bad parameters from the caller |
/// | Resources | [`ResourceLimitExceeded`][Self::ResourceLimitExceeded] | Safety limits |
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A read needed more bytes than the buffer holds.
    ///
    /// The cursor is left where it was before the failed read.
    #[error("Truncated input at offset {offset}: needed {needed} bytes, {available} available")]
    Truncated {
        /// Offset at which the read started.
        offset: usize,
        /// Number of bytes the read required.
        needed: usize,
        /// Number of bytes left in the buffer at `offset`.
        available: usize,
    },

    /// A variable-length quantity does not fit in 64 bits.
    #[error("Variable-length quantity at offset {offset} overflows 64 bits")]
    VarintOverflow {
        /// Offset of the first byte of the quantity.
        offset: usize,
    },

    /// An LZ4 token stream is malformed.
    #[error("Corrupt LZ4 block at input offset {offset}: {reason}")]
    CorruptBlock {
        /// Input offset where the problem was detected.
        offset: usize,
        /// A description of the corruption.
        reason: String,
    },

    /// A Base64 string contains a symbol outside the 7-bit decode table.
    #[error("Invalid Base64 symbol {symbol:?} at position {position}")]
    InvalidSymbol {
        /// Character index of the offending symbol.
        position: usize,
        /// The offending symbol.
        symbol: char,
    },

    /// Encoded text has an invalid structure.
    #[error("Invalid format: {0}")]
    InvalidFormat(String),

    /// A caller-supplied argument is out of its valid domain.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A resource limit was exceeded.
    ///
    /// This protects against blobs whose length prefix declares an
    /// unreasonably large output.
    ///
    /// ```rust
    /// use bytepack::ResourceLimits;
    ///
    /// let limits = ResourceLimits::default().max_output_size(1 << 20);
    /// assert_eq!(limits.max_output_size, 1 << 20);
    /// ```
    #[error("Resource limit exceeded: {0}")]
    ResourceLimitExceeded(String),
}

impl Error {
    /// Returns `true` if this is a data corruption error.
    pub fn is_corruption(&self) -> bool {
        matches!(
            self,
            Error::CorruptBlock { .. } | Error::VarintOverflow { .. }
        )
    }

    /// Returns `true` if the input ended before a read could complete.
    pub fn is_truncation(&self) -> bool {
        match self {
            Error::Truncated { .. } => true,
            Error::Io(e) => e.kind() == io::ErrorKind::UnexpectedEof,
            _ => false,
        }
    }

    /// Returns the byte offset associated with this error, if any.
    ///
    /// # Example
    ///
    /// ```rust
    /// use bytepack::Error;
    ///
    /// let err = Error::corrupt_block(12, "zero match offset");
    /// assert_eq!(err.offset(), Some(12));
    /// ```
    pub fn offset(&self) -> Option<usize> {
        match self {
            Error::Truncated { offset, .. } => Some(*offset),
            Error::VarintOverflow { offset } => Some(*offset),
            Error::CorruptBlock { offset, .. } => Some(*offset),
            Error::InvalidSymbol { position, .. } => Some(*position),
            _ => None,
        }
    }

    /// Creates a Truncated error.
    pub fn truncated(offset: usize, needed: usize, available: usize) -> Self {
        Error::Truncated {
            offset,
            needed,
            available,
        }
    }

    /// Creates a CorruptBlock error.
    pub fn corrupt_block(offset: usize, reason: impl Into<String>) -> Self {
        Error::CorruptBlock {
            offset,
            reason: reason.into(),
        }
    }
}

impl From<Error> for io::Error {
    fn from(err: Error) -> Self {
        match err {
            Error::Io(e) => e,
            Error::Truncated { .. } => io::Error::new(io::ErrorKind::UnexpectedEof, err),
            other => io::Error::new(io::ErrorKind::InvalidData, other),
        }
    }
}

/// A specialized Result type for this crate.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_from() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
        assert!(err.to_string().contains("I/O error"));
    }

    #[test]
    fn test_truncated_display() {
        let err = Error::truncated(8, 4, 1);
        assert_eq!(
            err.to_string(),
            "Truncated input at offset 8: needed 4 bytes, 1 available"
        );
        assert!(err.is_truncation());
        assert!(!err.is_corruption());
        assert_eq!(err.offset(), Some(8));
    }

    #[test]
    fn test_corrupt_block() {
        let err = Error::corrupt_block(0x10, "match offset out of range");
        assert_eq!(
            err.to_string(),
            "Corrupt LZ4 block at input offset 16: match offset out of range"
        );
        assert!(err.is_corruption());
    }

    #[test]
    fn test_invalid_symbol_display() {
        let err = Error::InvalidSymbol {
            position: 3,
            symbol: 'é',
        };
        assert!(err.to_string().contains("position 3"));
        assert_eq!(err.offset(), Some(3));
    }

    #[test]
    fn test_no_offset_for_usage_errors() {
        let err = Error::InvalidArgument("key length must be non-zero".into());
        assert_eq!(err.offset(), None);
        assert!(!err.is_corruption());
    }

    #[test]
    fn test_into_io_error_kind() {
        let eof: io::Error = Error::truncated(0, 1, 0).into();
        assert_eq!(eof.kind(), io::ErrorKind::UnexpectedEof);

        let bad: io::Error = Error::corrupt_block(0, "bad").into();
        assert_eq!(bad.kind(), io::ErrorKind::InvalidData);
    }

    #[test]
    fn test_eof_io_error_is_truncation() {
        let err = Error::Io(io::Error::new(io::ErrorKind::UnexpectedEof, "eof"));
        assert!(err.is_truncation());
    }
}
