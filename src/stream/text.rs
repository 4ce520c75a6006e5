//! Single-byte string accessors.
//!
//! Strings are stored one byte per character. Writing truncates each code
//! point to its low 8 bits; reading maps each byte to the char with the same
//! value (Latin-1). ASCII text round-trips exactly, other text does not.

use super::ByteStream;
use crate::{Error, Result};

fn latin1_bytes(s: &str) -> Vec<u8> {
    s.chars().map(|c| c as u32 as u8).collect()
}

fn latin1_string(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| b as char).collect()
}

impl ByteStream {
    /// Reads a string of exactly `length` bytes.
    pub fn read_string(&mut self, length: usize) -> Result<String> {
        self.take(length).map(latin1_string)
    }

    /// Reads a null-terminated string and skips the terminator.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Truncated`] if no zero byte follows the cursor.
    pub fn read_nt_string(&mut self) -> Result<String> {
        let rest = self.buffer.get(self.index..).unwrap_or_default();
        let Some(len) = rest.iter().position(|&b| b == 0) else {
            return Err(Error::truncated(self.index, rest.len() + 1, rest.len()));
        };
        let value = latin1_string(&rest[..len]);
        self.index += len + 1;
        Ok(value)
    }

    /// Reads a string prefixed with its byte length as a VLUQ.
    pub fn read_vluq_string(&mut self) -> Result<String> {
        let start = self.index;
        let length = self.read_vluq()?;
        let length = usize::try_from(length).unwrap_or(usize::MAX);
        match self.read_string(length) {
            Ok(value) => Ok(value),
            Err(e) => {
                self.index = start;
                Err(e)
            }
        }
    }

    /// Writes a string, one byte per character, without a terminator.
    pub fn write_string(&mut self, s: &str) {
        self.write_bytes(&latin1_bytes(s));
    }

    /// Writes a string followed by a zero byte.
    ///
    /// A string containing `'\0'` will read back cut at that character.
    pub fn write_nt_string(&mut self, s: &str) {
        self.write_string(s);
        self.write_byte(0);
    }

    /// Writes a string prefixed with its length as a VLUQ.
    pub fn write_vluq_string(&mut self, s: &str) {
        let bytes = latin1_bytes(s);
        self.write_vluq(bytes.len() as u64);
        self.write_bytes(&bytes);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_roundtrip() {
        let mut stream = ByteStream::new();
        stream.write_string("abc");
        stream.write_string("");
        stream.write_string("defg");
        stream.reset();
        assert_eq!(stream.read_string(3).unwrap(), "abc");
        assert_eq!(stream.read_string(0).unwrap(), "");
        assert_eq!(stream.read_string(4).unwrap(), "defg");
    }

    #[test]
    fn test_nt_string_layout() {
        let mut stream = ByteStream::new();
        stream.write_nt_string("hi");
        stream.write_nt_string("");
        assert_eq!(stream.write_buffer(), &[b'h', b'i', 0, 0]);

        stream.reset();
        assert_eq!(stream.read_nt_string().unwrap(), "hi");
        assert_eq!(stream.read_nt_string().unwrap(), "");
        assert_eq!(stream.index(), 4);
    }

    #[test]
    fn test_nt_string_missing_terminator() {
        let mut stream = ByteStream::from_buffer(b"abc".to_vec());
        let err = stream.read_nt_string().unwrap_err();
        assert!(matches!(
            err,
            Error::Truncated {
                offset: 0,
                needed: 4,
                available: 3
            }
        ));
        assert_eq!(stream.index(), 0);
    }

    #[test]
    fn test_vluq_string_roundtrip() {
        let long = "x".repeat(200);
        let mut stream = ByteStream::new();
        stream.write_vluq_string("name");
        stream.write_vluq_string(&long);
        stream.write_vluq_string("");

        // 200 needs a two-byte length prefix
        assert_eq!(stream.index(), 1 + 4 + 2 + 200 + 1);

        stream.reset();
        assert_eq!(stream.read_vluq_string().unwrap(), "name");
        assert_eq!(stream.read_vluq_string().unwrap(), long);
        assert_eq!(stream.read_vluq_string().unwrap(), "");
    }

    #[test]
    fn test_vluq_string_truncated_body() {
        let mut stream = ByteStream::from_buffer(vec![0x05, b'a', b'b']);
        assert!(stream.read_vluq_string().is_err());
        assert_eq!(stream.index(), 0);
    }

    #[test]
    fn test_characters_truncate_to_one_byte() {
        let mut stream = ByteStream::new();
        // U+0141 truncates to 0x41 ('A'); U+00E9 stays 0xE9
        stream.write_string("\u{0141}\u{00E9}");
        assert_eq!(stream.write_buffer(), &[0x41, 0xE9]);

        stream.reset();
        assert_eq!(stream.read_string(2).unwrap(), "A\u{00E9}");
    }
}
