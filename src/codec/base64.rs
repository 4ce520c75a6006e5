//! Base64 encoding and decoding.
//!
//! Two alphabets are supported: standard (`A-Za-z0-9+/`) and URL-safe
//! (`A-Za-z0-9-_`). A single decode table accepts both, so the decoder does
//! not need to be told which alphabet produced its input. Decoding is
//! padding-agnostic: `=` characters may be present or omitted.
//!
//! # Example
//!
//! ```rust
//! use bytepack::codec::base64;
//!
//! assert_eq!(base64::encode(b"hi?", false, false), "aGk/");
//! assert_eq!(base64::encode(b"hi?", true, false), "aGk_");
//! assert_eq!(base64::encode(b"h", false, true), "aA");
//! assert_eq!(base64::decode("aA==")?, b"h");
//! assert_eq!(base64::decode("aA")?, b"h");
//! # Ok::<(), bytepack::Error>(())
//! ```

use crate::{Error, Result};

const STANDARD_SYMBOLS: &[u8; 64] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";
const URL_SAFE_SYMBOLS: &[u8; 64] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789-_";

/// Decode table entry for the padding character.
const PAD: i8 = -1;

/// Maps a 7-bit character to its 6-bit value for both alphabets.
///
/// `+` and `-` both map to 62, `/` and `_` both map to 63, and `=` maps to
/// [`PAD`]. Characters outside both alphabets map to 0.
#[rustfmt::skip]
const DECODE_TABLE: [i8; 128] = [
    0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 62, 0, 62, 0, 63,
    52, 53, 54, 55, 56, 57, 58, 59,
    60, 61, 0, 0, 0, PAD, 0, 0,
    0, 0, 1, 2, 3, 4, 5, 6,
    7, 8, 9, 10, 11, 12, 13, 14,
    15, 16, 17, 18, 19, 20, 21, 22,
    23, 24, 25, 0, 0, 0, 0, 63,
    0, 26, 27, 28, 29, 30, 31, 32,
    33, 34, 35, 36, 37, 38, 39, 40,
    41, 42, 43, 44, 45, 46, 47, 48,
    49, 50, 51, 0, 0, 0, 0, 0,
];

/// Base64 symbol set used for encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alphabet {
    /// `A-Z a-z 0-9 + /`
    #[default]
    Standard,
    /// `A-Z a-z 0-9 - _`, safe in URLs and file names.
    UrlSafe,
}

impl Alphabet {
    fn symbols(self) -> &'static [u8; 64] {
        match self {
            Self::Standard => STANDARD_SYMBOLS,
            Self::UrlSafe => URL_SAFE_SYMBOLS,
        }
    }
}

/// Returns the length of the encoding of `input_len` bytes.
pub fn encoded_len(input_len: usize, pad: bool) -> usize {
    if pad {
        input_len.div_ceil(3) * 4
    } else {
        (input_len * 4).div_ceil(3)
    }
}

/// Encodes bytes as Base64.
///
/// `url_safe` selects the URL-safe alphabet; `truncate` omits the trailing
/// `=` padding.
pub fn encode(input: &[u8], url_safe: bool, truncate: bool) -> String {
    let alphabet = if url_safe {
        Alphabet::UrlSafe
    } else {
        Alphabet::Standard
    };
    encode_with(input, alphabet, !truncate)
}

/// Encodes bytes as Base64 with an explicit alphabet and padding choice.
pub fn encode_with(input: &[u8], alphabet: Alphabet, pad: bool) -> String {
    let symbols = alphabet.symbols();
    let symbol = |value: u32| symbols[(value & 0x3f) as usize] as char;

    let mut output = String::with_capacity(encoded_len(input.len(), pad));
    let mut bits = 0u32;
    let mut shift = 0u32;
    let mut i = 0;

    // Each step emits one sextet; a new byte is pulled in on three steps out of four
    while i < input.len() {
        shift = (shift + 2) & 7;
        if shift != 0 {
            bits = ((bits << 8) | input[i] as u32) & 0xffff;
            i += 1;
        }
        output.push(symbol(bits >> shift));
    }

    match shift {
        2 => {
            output.push(symbol(bits << 4));
            if pad {
                output.push_str("==");
            }
        }
        4 => {
            output.push(symbol(bits << 2));
            if pad {
                output.push('=');
            }
        }
        6 => output.push(symbol(bits)),
        _ => {}
    }

    output
}

/// Looks up the symbol at byte `position` of `input`.
fn sextet(input: &str, position: usize) -> Result<i8> {
    let byte = input.as_bytes()[position];
    match DECODE_TABLE.get(byte as usize) {
        Some(&value) => Ok(value),
        None => Err(Error::InvalidSymbol {
            position,
            symbol: input[position..].chars().next().unwrap_or('\u{FFFD}'),
        }),
    }
}

/// Decodes Base64 text in either alphabet, with or without padding.
///
/// Input is consumed in groups of up to four symbols; a group with two
/// symbols yields one byte, three yield two, four yield three. Padding counts
/// as an absent symbol.
///
/// # Errors
///
/// - [`Error::InvalidSymbol`] for a non-ASCII character.
/// - [`Error::InvalidFormat`] for a lone trailing symbol or for padding in
///   the first two positions of a group.
pub fn decode(input: &str) -> Result<Vec<u8>> {
    let len = input.len();
    let mut output = Vec::with_capacity(len / 4 * 3 + 2);
    let mut i = 0;

    while i < len {
        if i + 1 >= len {
            return Err(Error::InvalidFormat(format!(
                "dangling Base64 symbol at position {}",
                i
            )));
        }
        let a = sextet(input, i)?;
        let b = sextet(input, i + 1)?;
        if a == PAD || b == PAD {
            return Err(Error::InvalidFormat(format!(
                "unexpected Base64 padding at position {}",
                i
            )));
        }
        i += 2;

        let mut c = PAD;
        if i < len {
            c = sextet(input, i)?;
            i += 1;
        }
        let mut d = PAD;
        if i < len {
            d = sextet(input, i)?;
            i += 1;
        }

        let (a, b) = (a as u32, b as u32);
        if c == PAD {
            let bits = (a << 6) | b;
            output.push((bits >> 4) as u8);
        } else if d == PAD {
            let bits = (a << 12) | (b << 6) | c as u32;
            output.push((bits >> 10) as u8);
            output.push((bits >> 2) as u8);
        } else {
            let bits = (a << 18) | (b << 12) | ((c as u32) << 6) | d as u32;
            output.push((bits >> 16) as u8);
            output.push((bits >> 8) as u8);
            output.push(bits as u8);
        }
    }

    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rfc4648_vectors() {
        let vectors: [(&[u8], &str); 7] = [
            (b"", ""),
            (b"f", "Zg=="),
            (b"fo", "Zm8="),
            (b"foo", "Zm9v"),
            (b"foob", "Zm9vYg=="),
            (b"fooba", "Zm9vYmE="),
            (b"foobar", "Zm9vYmFy"),
        ];
        for (raw, encoded) in vectors {
            assert_eq!(encode(raw, false, false), encoded);
            assert_eq!(decode(encoded).unwrap(), raw);
        }
    }

    #[test]
    fn test_truncate_drops_padding() {
        assert_eq!(encode(b"f", false, true), "Zg");
        assert_eq!(encode(b"fo", false, true), "Zm8");
        assert_eq!(encode(b"foo", false, true), "Zm9v");
        assert_eq!(decode("Zg").unwrap(), b"f");
        assert_eq!(decode("Zm8").unwrap(), b"fo");
    }

    #[test]
    fn test_url_safe_alphabet() {
        let raw = [0xFB, 0xFF, 0xBF];
        assert_eq!(encode(&raw, false, false), "+/+/");
        assert_eq!(encode(&raw, true, false), "-_-_");
        assert_eq!(decode("+/+/").unwrap(), raw);
        assert_eq!(decode("-_-_").unwrap(), raw);
    }

    #[test]
    fn test_encoded_len() {
        for n in 0..10 {
            let data = vec![0xA5; n];
            assert_eq!(encode_with(&data, Alphabet::Standard, true).len(), encoded_len(n, true));
            assert_eq!(encode_with(&data, Alphabet::UrlSafe, false).len(), encoded_len(n, false));
        }
    }

    #[test]
    fn test_all_byte_values_roundtrip() {
        let data: Vec<u8> = (0..=255u8).collect();
        for url_safe in [false, true] {
            for truncate in [false, true] {
                let text = encode(&data, url_safe, truncate);
                assert_eq!(decode(&text).unwrap(), data);
            }
        }
    }

    #[test]
    fn test_dangling_symbol() {
        assert!(matches!(decode("Zm9vY"), Err(Error::InvalidFormat(_))));
    }

    #[test]
    fn test_leading_padding_rejected() {
        assert!(matches!(decode("=AAA"), Err(Error::InvalidFormat(_))));
        assert!(matches!(decode("Zm9v=A"), Err(Error::InvalidFormat(_))));
    }

    #[test]
    fn test_non_ascii_rejected() {
        let err = decode("Zm9é").unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidSymbol {
                position: 3,
                symbol: 'é'
            }
        ));
    }
}
