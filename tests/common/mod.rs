//! Shared test utilities for integration tests.
//!
//! Blob builders produce valid LZ4 blocks without an encoder: literal runs
//! and single-byte repeats are enough to exercise every decoder path.
//!
//! Note: `#![allow(dead_code)]` is required because each integration test file
//! compiles as a separate crate and may only use a subset of these helpers.

#![allow(dead_code)]

use bytepack::Vigenere;

/// Appends a 4-bit length with its 255-continuation extension bytes.
///
/// Returns the nibble to place in the token.
fn push_length(out: &mut Vec<u8>, length: usize) -> u8 {
    if length < 15 {
        return length as u8;
    }
    let mut rest = length - 15;
    while rest >= 255 {
        out.push(0xFF);
        rest -= 255;
    }
    out.push(rest as u8);
    15
}

/// Builds a length-prefixed LZ4 blob holding `payload` as a single literal run.
///
/// # Example
///
/// ```ignore
/// let blob = literal_blob(b"hello");
/// assert_eq!(bytepack::codec::lz4::decompress(&blob, 0).unwrap(), b"hello");
/// ```
pub fn literal_blob(payload: &[u8]) -> Vec<u8> {
    let mut blob = (payload.len() as u32).to_le_bytes().to_vec();
    if payload.is_empty() {
        return blob;
    }
    let token_at = blob.len();
    blob.push(0);
    let nibble = push_length(&mut blob, payload.len());
    blob[token_at] = nibble << 4;
    blob.extend_from_slice(payload);
    blob
}

/// Builds a blob that expands to `count` copies of `byte`.
///
/// One literal followed by an overlapping match at offset 1. `count` must be
/// at least 5 so that the match meets the minimum length.
pub fn repeat_blob(byte: u8, count: usize) -> Vec<u8> {
    assert!(count >= 5, "repeat_blob needs at least 5 bytes");
    let mut blob = (count as u32).to_le_bytes().to_vec();
    let mut tail = vec![byte, 0x01, 0x00];
    let nibble = push_length(&mut tail, count - 1 - 4);
    blob.push(0x10 | nibble);
    blob.extend_from_slice(&tail);
    blob
}

/// Enciphers `data` with the key derived from `seed` and `key_length`.
pub fn encipher(seed: u32, key_length: usize, data: &[u8]) -> Vec<u8> {
    let cipher = Vigenere::new(seed, key_length).unwrap();
    data.iter()
        .zip(cipher.key().iter().cycle())
        .map(|(&b, &k)| b.wrapping_add(k))
        .collect()
}
