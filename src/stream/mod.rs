//! Growable byte buffer with a read/write cursor.
//!
//! [`ByteStream`] owns a single `Vec<u8>` and exposes typed accessors on top of
//! it: fixed-width integers and floats, variable-length quantities, raw byte
//! runs and single-byte strings.
//!
//! # Reads and Writes
//!
//! Writes never fail. When a write does not fit, the buffer grows to
//! `capacity + max(requested, capacity)` bytes and the existing contents are
//! preserved. Reads are bounds-checked against the buffer capacity and return
//! [`Error::Truncated`] instead of reading out of range; a failed read leaves
//! the cursor untouched.
//!
//! The capacity is the whole backing buffer, not just the bytes written so
//! far: reading past the logical end of the written data returns whatever is
//! in the zero-filled tail. Use [`ByteStream::write_buffer`] to get only the
//! written bytes.
//!
//! # Example
//!
//! ```rust
//! use bytepack::ByteStream;
//!
//! let mut out = ByteStream::new();
//! out.write_short(0xBEEF);
//! out.write_vluq(300);
//! out.write_nt_string("hero");
//!
//! let mut input = ByteStream::from_buffer(out.write_buffer().to_vec());
//! assert_eq!(input.read_short()?, 0xBEEF);
//! assert_eq!(input.read_vluq()?, 300);
//! assert_eq!(input.read_nt_string()?, "hero");
//! # Ok::<(), bytepack::Error>(())
//! ```

mod text;
mod vlq;

use std::io::{self, Read, Write};

use crate::{Error, Result};

pub use vlq::vluq_len;

/// Initial capacity of a stream created without a buffer.
pub const DEFAULT_CAPACITY: usize = 256;

/// Byte order of multi-byte fixed-width fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Endianness {
    /// Least significant byte first.
    #[default]
    Little,
    /// Most significant byte first.
    Big,
}

/// A growable byte buffer with a cursor and typed accessors.
#[derive(Clone, PartialEq)]
pub struct ByteStream {
    buffer: Vec<u8>,
    index: usize,
    endianness: Endianness,
}

impl std::fmt::Debug for ByteStream {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ByteStream")
            .field("capacity", &self.buffer.len())
            .field("index", &self.index)
            .field("endianness", &self.endianness)
            .finish()
    }
}

impl Default for ByteStream {
    fn default() -> Self {
        Self::new()
    }
}

impl ByteStream {
    /// Creates an empty stream with a [`DEFAULT_CAPACITY`]-byte buffer.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Creates an empty stream with a zero-filled buffer of `capacity` bytes.
    pub fn with_capacity(capacity: usize) -> Self {
        Self::from_buffer(vec![0; capacity])
    }

    /// Wraps an existing buffer, with the cursor at the start.
    pub fn from_buffer(buffer: Vec<u8>) -> Self {
        Self {
            buffer,
            index: 0,
            endianness: Endianness::default(),
        }
    }

    /// Rewinds the cursor to the start without touching the buffer.
    pub fn reset(&mut self) {
        self.index = 0;
    }

    /// Replaces the backing buffer.
    ///
    /// The cursor is not reset; call [`reset`](Self::reset) to read the new
    /// buffer from the start.
    pub fn set_buffer(&mut self, buffer: Vec<u8>) {
        self.buffer = buffer;
    }

    /// Switches multi-byte fields to big-endian byte order.
    pub fn set_big_endian(&mut self) {
        self.endianness = Endianness::Big;
    }

    /// Sets the byte order of multi-byte fields.
    pub fn set_endianness(&mut self, endianness: Endianness) {
        self.endianness = endianness;
    }

    /// Returns the byte order of multi-byte fields.
    pub fn endianness(&self) -> Endianness {
        self.endianness
    }

    /// Returns the entire backing buffer, including the unwritten tail.
    pub fn raw_buffer(&self) -> &[u8] {
        &self.buffer
    }

    /// Returns the bytes before the cursor, i.e. everything written so far.
    pub fn write_buffer(&self) -> &[u8] {
        &self.buffer[..self.index.min(self.buffer.len())]
    }

    /// Returns the cursor position.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Returns the size of the backing buffer.
    pub fn capacity(&self) -> usize {
        self.buffer.len()
    }

    /// Returns the number of bytes between the cursor and the end of the buffer.
    pub fn remaining(&self) -> usize {
        self.buffer.len().saturating_sub(self.index)
    }

    /// Consumes the stream and returns the backing buffer.
    pub fn into_inner(self) -> Vec<u8> {
        self.buffer
    }

    /// Consumes `count` bytes and returns them.
    fn take(&mut self, count: usize) -> Result<&[u8]> {
        let available = self.remaining();
        if count > available {
            return Err(Error::truncated(self.index, count, available));
        }
        let start = self.index;
        self.index += count;
        Ok(&self.buffer[start..self.index])
    }

    fn take_array<const N: usize>(&mut self) -> Result<[u8; N]> {
        let mut bytes = [0u8; N];
        bytes.copy_from_slice(self.take(N)?);
        Ok(bytes)
    }

    /// Grows the buffer so that `extra` bytes fit at the cursor.
    fn ensure_capacity(&mut self, extra: usize) {
        let required = self.index.saturating_add(extra);
        let capacity = self.buffer.len();
        if required <= capacity {
            return;
        }
        // The cursor may sit beyond the end after set_buffer swapped in a smaller buffer
        let new_capacity = (capacity + extra.max(capacity)).max(required);
        log::debug!(
            "Growing byte stream buffer from {} to {} bytes",
            capacity,
            new_capacity
        );
        self.buffer.resize(new_capacity, 0);
    }

    fn put(&mut self, bytes: &[u8]) {
        self.ensure_capacity(bytes.len());
        let end = self.index + bytes.len();
        self.buffer[self.index..end].copy_from_slice(bytes);
        self.index = end;
    }

    /// Reads an unsigned 8-bit integer.
    pub fn read_byte(&mut self) -> Result<u8> {
        let [byte] = self.take_array::<1>()?;
        Ok(byte)
    }

    /// Reads an unsigned 16-bit integer.
    pub fn read_short(&mut self) -> Result<u16> {
        let bytes = self.take_array::<2>()?;
        Ok(match self.endianness {
            Endianness::Little => u16::from_le_bytes(bytes),
            Endianness::Big => u16::from_be_bytes(bytes),
        })
    }

    /// Reads an unsigned 32-bit integer.
    pub fn read_int(&mut self) -> Result<u32> {
        let bytes = self.take_array::<4>()?;
        Ok(self.decode_u32(bytes))
    }

    /// Reads an unsigned 64-bit integer stored as two 32-bit words.
    ///
    /// The first word is the high half and the second the low half, each in
    /// the stream's byte order. Under big-endian this is a plain big-endian
    /// `u64`; under little-endian it is not a little-endian `u64`.
    pub fn read_long(&mut self) -> Result<u64> {
        let bytes = self.take_array::<8>()?;
        let high = self.decode_u32([bytes[0], bytes[1], bytes[2], bytes[3]]);
        let low = self.decode_u32([bytes[4], bytes[5], bytes[6], bytes[7]]);
        Ok(((high as u64) << 32) | low as u64)
    }

    /// Reads an IEEE 754 single-precision float.
    pub fn read_float(&mut self) -> Result<f32> {
        let bytes = self.take_array::<4>()?;
        Ok(match self.endianness {
            Endianness::Little => f32::from_le_bytes(bytes),
            Endianness::Big => f32::from_be_bytes(bytes),
        })
    }

    /// Reads an IEEE 754 double-precision float.
    pub fn read_double(&mut self) -> Result<f64> {
        let bytes = self.take_array::<8>()?;
        Ok(match self.endianness {
            Endianness::Little => f64::from_le_bytes(bytes),
            Endianness::Big => f64::from_be_bytes(bytes),
        })
    }

    /// Reads `count` raw bytes.
    pub fn read_bytes(&mut self, count: usize) -> Result<Vec<u8>> {
        self.take(count).map(<[u8]>::to_vec)
    }

    fn decode_u32(&self, bytes: [u8; 4]) -> u32 {
        match self.endianness {
            Endianness::Little => u32::from_le_bytes(bytes),
            Endianness::Big => u32::from_be_bytes(bytes),
        }
    }

    fn encode_u32(&self, value: u32) -> [u8; 4] {
        match self.endianness {
            Endianness::Little => value.to_le_bytes(),
            Endianness::Big => value.to_be_bytes(),
        }
    }

    /// Writes an unsigned 8-bit integer.
    pub fn write_byte(&mut self, value: u8) {
        self.put(&[value]);
    }

    /// Writes an unsigned 16-bit integer.
    pub fn write_short(&mut self, value: u16) {
        let bytes = match self.endianness {
            Endianness::Little => value.to_le_bytes(),
            Endianness::Big => value.to_be_bytes(),
        };
        self.put(&bytes);
    }

    /// Writes an unsigned 32-bit integer.
    pub fn write_int(&mut self, value: u32) {
        let bytes = self.encode_u32(value);
        self.put(&bytes);
    }

    /// Writes an unsigned 64-bit integer as its high word followed by its low word.
    pub fn write_long(&mut self, value: u64) {
        self.write_int((value >> 32) as u32);
        self.write_int((value & 0xffff_ffff) as u32);
    }

    /// Writes an IEEE 754 single-precision float.
    pub fn write_float(&mut self, value: f32) {
        let bytes = match self.endianness {
            Endianness::Little => value.to_le_bytes(),
            Endianness::Big => value.to_be_bytes(),
        };
        self.put(&bytes);
    }

    /// Writes an IEEE 754 double-precision float.
    pub fn write_double(&mut self, value: f64) {
        let bytes = match self.endianness {
            Endianness::Little => value.to_le_bytes(),
            Endianness::Big => value.to_be_bytes(),
        };
        self.put(&bytes);
    }

    /// Writes raw bytes.
    pub fn write_bytes(&mut self, bytes: &[u8]) {
        self.put(bytes);
    }
}

impl From<Vec<u8>> for ByteStream {
    fn from(buffer: Vec<u8>) -> Self {
        Self::from_buffer(buffer)
    }
}

impl Read for ByteStream {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let count = buf.len().min(self.remaining());
        buf[..count].copy_from_slice(self.take(count)?);
        Ok(count)
    }
}

impl Write for ByteStream {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.write_bytes(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_stream_defaults() {
        let stream = ByteStream::new();
        assert_eq!(stream.capacity(), DEFAULT_CAPACITY);
        assert_eq!(stream.index(), 0);
        assert_eq!(stream.endianness(), Endianness::Little);
        assert!(stream.write_buffer().is_empty());
    }

    #[test]
    fn test_little_endian_layout() {
        let mut stream = ByteStream::new();
        stream.write_short(0x0102);
        stream.write_int(0x03040506);
        assert_eq!(stream.write_buffer(), &[0x02, 0x01, 0x06, 0x05, 0x04, 0x03]);
    }

    #[test]
    fn test_big_endian_layout() {
        let mut stream = ByteStream::new();
        stream.set_big_endian();
        stream.write_short(0x0102);
        stream.write_int(0x03040506);
        assert_eq!(stream.write_buffer(), &[0x01, 0x02, 0x03, 0x04, 0x05, 0x06]);
    }

    #[test]
    fn test_long_is_high_word_first() {
        let mut stream = ByteStream::new();
        stream.write_long(0x0102030405060708);
        // Each half little-endian, high half first
        assert_eq!(
            stream.write_buffer(),
            &[0x04, 0x03, 0x02, 0x01, 0x08, 0x07, 0x06, 0x05]
        );

        stream.reset();
        assert_eq!(stream.read_long().unwrap(), 0x0102030405060708);
    }

    #[test]
    fn test_long_big_endian_matches_u64() {
        let mut stream = ByteStream::new();
        stream.set_big_endian();
        stream.write_long(0x0102030405060708);
        assert_eq!(stream.write_buffer(), &0x0102030405060708u64.to_be_bytes());
    }

    #[test]
    fn test_fixed_width_roundtrip_both_orders() {
        for endianness in [Endianness::Little, Endianness::Big] {
            let mut stream = ByteStream::new();
            stream.set_endianness(endianness);
            stream.write_byte(0xFF);
            stream.write_short(u16::MAX);
            stream.write_int(u32::MAX);
            stream.write_long(u64::MAX);
            stream.write_long(0x0000_0001_0000_0000);
            stream.write_float(-1.5);
            stream.write_double(std::f64::consts::PI);
            stream.write_long(0);

            stream.reset();
            assert_eq!(stream.read_byte().unwrap(), 0xFF);
            assert_eq!(stream.read_short().unwrap(), u16::MAX);
            assert_eq!(stream.read_int().unwrap(), u32::MAX);
            assert_eq!(stream.read_long().unwrap(), u64::MAX);
            assert_eq!(stream.read_long().unwrap(), 0x0000_0001_0000_0000);
            assert_eq!(stream.read_float().unwrap(), -1.5);
            assert_eq!(stream.read_double().unwrap(), std::f64::consts::PI);
            assert_eq!(stream.read_long().unwrap(), 0);
            assert_eq!(stream.index(), 1 + 2 + 4 + 8 + 8 + 4 + 8 + 8);
        }
    }

    #[test]
    fn test_growth_doubles_capacity() {
        let mut stream = ByteStream::with_capacity(4);
        stream.write_int(0xAABBCCDD);
        assert_eq!(stream.capacity(), 4);

        stream.write_byte(0x11);
        assert_eq!(stream.capacity(), 8);
        assert_eq!(stream.write_buffer(), &[0xDD, 0xCC, 0xBB, 0xAA, 0x11]);
    }

    #[test]
    fn test_growth_large_write() {
        let mut stream = ByteStream::with_capacity(4);
        stream.write_byte(1);
        stream.write_bytes(&[7u8; 100]);
        // 4 + max(100, 4)
        assert_eq!(stream.capacity(), 104);
        assert_eq!(stream.index(), 101);
        assert_eq!(stream.write_buffer()[0], 1);
        assert!(stream.write_buffer()[1..].iter().all(|&b| b == 7));
    }

    #[test]
    fn test_growth_from_empty_buffer() {
        let mut stream = ByteStream::with_capacity(0);
        stream.write_int(5);
        assert_eq!(stream.capacity(), 4);
        stream.write_byte(6);
        assert_eq!(stream.capacity(), 8);
        assert_eq!(stream.write_buffer(), &[5, 0, 0, 0, 6]);
    }

    #[test]
    fn test_read_truncated_keeps_cursor() {
        let mut stream = ByteStream::from_buffer(vec![1, 2, 3]);
        assert_eq!(stream.read_byte().unwrap(), 1);

        let err = stream.read_int().unwrap_err();
        assert!(matches!(
            err,
            Error::Truncated {
                offset: 1,
                needed: 4,
                available: 2
            }
        ));
        assert_eq!(stream.index(), 1);
        assert_eq!(stream.read_short().unwrap(), 0x0302);
    }

    #[test]
    fn test_read_bytes() {
        let mut stream = ByteStream::from_buffer(vec![1, 2, 3, 4, 5]);
        assert_eq!(stream.read_bytes(3).unwrap(), vec![1, 2, 3]);
        assert_eq!(stream.read_bytes(0).unwrap(), Vec::<u8>::new());
        assert!(stream.read_bytes(3).is_err());
        assert_eq!(stream.read_bytes(2).unwrap(), vec![4, 5]);
    }

    #[test]
    fn test_set_buffer_keeps_cursor() {
        let mut stream = ByteStream::from_buffer(vec![0; 8]);
        stream.read_int().unwrap();
        stream.set_buffer(vec![9, 9, 9, 9, 1, 2]);
        assert_eq!(stream.index(), 4);
        assert_eq!(stream.read_short().unwrap(), 0x0201);
    }

    #[test]
    fn test_write_after_cursor_beyond_buffer() {
        let mut stream = ByteStream::from_buffer(vec![0; 16]);
        stream.read_bytes(12).unwrap();
        stream.set_buffer(vec![0; 2]);
        stream.write_byte(0xAB);
        assert_eq!(stream.capacity(), 13);
        assert_eq!(stream.raw_buffer()[12], 0xAB);
    }

    #[test]
    fn test_io_read_write() {
        let mut stream = ByteStream::with_capacity(2);
        stream.write_all(b"hello world").unwrap();
        assert_eq!(stream.write_buffer(), b"hello world");

        let mut input = ByteStream::from_buffer(stream.write_buffer().to_vec());
        let mut text = String::new();
        input.read_to_string(&mut text).unwrap();
        assert_eq!(text, "hello world");
        assert_eq!(input.remaining(), 0);
    }

    #[test]
    fn test_debug_omits_contents() {
        let stream = ByteStream::with_capacity(3);
        let debug = format!("{:?}", stream);
        assert!(debug.contains("capacity: 3"));
        assert!(debug.contains("index: 0"));
    }
}
