//! Variable-length quantities.
//!
//! A VLUQ stores an unsigned integer in big-endian groups of 7 bits. Every byte
//! except the last has its high bit (0x80) set:
//!
//! - `0xxxxxxx`: 0-127
//! - `1xxxxxxx 0xxxxxxx`: 128-16383
//! - `1xxxxxxx 1xxxxxxx 0xxxxxxx`: 16384-2097151
//! - and so on, up to 10 bytes for a full `u64`.
//!
//! A VLSQ stores a signed integer as the VLUQ of `(|value| << 1) | sign`.
//! `i64::MIN` has no positive counterpart: its magnitude loses the top bit and
//! it reads back as zero.

use super::ByteStream;
use crate::{Error, Result};

/// Returns the number of bytes the VLUQ encoding of `value` takes.
pub fn vluq_len(value: u64) -> usize {
    if value == 0 {
        1
    } else {
        (u64::BITS - value.leading_zeros()).div_ceil(7) as usize
    }
}

impl ByteStream {
    /// Reads a variable-length unsigned quantity.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Truncated`] if the buffer ends before a byte without the
    /// continuation bit, or [`Error::VarintOverflow`] if the value does not fit
    /// in 64 bits. The cursor is not moved on error.
    pub fn read_vluq(&mut self) -> Result<u64> {
        let start = self.index;
        let mut accumulator = 0u64;
        loop {
            let byte = match self.read_byte() {
                Ok(byte) => byte,
                Err(e) => {
                    self.index = start;
                    return Err(e);
                }
            };
            if accumulator > u64::MAX >> 7 {
                self.index = start;
                return Err(Error::VarintOverflow { offset: start });
            }
            accumulator = (accumulator << 7) | (byte & 0x7f) as u64;
            if byte & 0x80 == 0 {
                return Ok(accumulator);
            }
        }
    }

    /// Reads a variable-length signed quantity.
    pub fn read_vlsq(&mut self) -> Result<i64> {
        let value = self.read_vluq()?;
        let magnitude = (value >> 1) as i64;
        Ok(if value & 1 != 0 { -magnitude } else { magnitude })
    }

    /// Writes a variable-length unsigned quantity using the fewest bytes.
    pub fn write_vluq(&mut self, value: u64) {
        let groups = vluq_len(value);
        self.ensure_capacity(groups);
        for group in (1..groups).rev() {
            let bits = (value >> (group * 7)) & 0x7f;
            self.write_byte(bits as u8 | 0x80);
        }
        self.write_byte((value & 0x7f) as u8);
    }

    /// Writes a variable-length signed quantity.
    pub fn write_vlsq(&mut self, value: i64) {
        let sign = (value < 0) as u64;
        self.write_vluq((value.unsigned_abs() << 1) | sign);
    }
}
