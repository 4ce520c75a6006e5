//! LZ4 block decompression (pure Rust implementation).
//!
//! Only decompression is supported, and only of the raw block format with a
//! small length prefix. There is no frame header, no magic number and no
//! checksum.
//!
//! # Format
//!
//! ```text
//! [u32 LE uncompressed length][sequence]...
//!
//! sequence = token [literal length ext...] literals
//!            [offset u16 LE] [match length ext...]
//! ```
//!
//! The high nibble of the token is the literal length and the low nibble the
//! match length. A nibble of 15 is followed by extension bytes that are added
//! to it, continuing while the extension byte is 255. The match length has an
//! implicit bias of [`MIN_MATCH`]. The stream always ends with a literal run:
//! once the output reaches the declared length, decoding stops without reading
//! a match offset.
//!
//! Every access is validated; malformed input fails with
//! [`Error::CorruptBlock`] rather than reading or writing out of range.
//!
//! See: <https://github.com/lz4/lz4/blob/dev/doc/lz4_Block_format.md>

use crate::safety::ResourceLimits;
use crate::{Error, Result};

/// Minimum match length; added to the encoded match length.
pub const MIN_MATCH: usize = 4;

/// Size of the uncompressed length prefix.
pub const LENGTH_PREFIX_SIZE: usize = 4;

/// Token nibble value that announces extension bytes.
const RUN_MASK: usize = 0x0f;

/// Upper bound of output bytes per input byte, used to cap the up-front allocation.
const MAX_EXPANSION: usize = 255;

/// Reads the uncompressed length prefix at `input_offset`.
///
/// # Errors
///
/// Returns [`Error::Truncated`] if fewer than four bytes are available.
pub fn decompressed_len(input: &[u8], input_offset: usize) -> Result<usize> {
    let rest = input.get(input_offset..).unwrap_or_default();
    let Some(prefix) = rest.first_chunk::<LENGTH_PREFIX_SIZE>() else {
        return Err(Error::truncated(input_offset, LENGTH_PREFIX_SIZE, rest.len()));
    };
    Ok(u32::from_le_bytes(*prefix) as usize)
}

/// Decompresses a length-prefixed LZ4 block starting at `input_offset`.
///
/// The returned buffer has exactly the length declared by the prefix. No size
/// limit applies; use [`decompress_with_limits`] for untrusted input.
///
/// # Example
///
/// ```rust
/// use bytepack::codec::lz4;
///
/// // "abcabcabc": three literals, then a 6-byte match at offset 3
/// let blob = [9, 0, 0, 0, 0x32, b'a', b'b', b'c', 3, 0];
/// assert_eq!(lz4::decompress(&blob, 0)?, b"abcabcabc");
/// # Ok::<(), bytepack::Error>(())
/// ```
pub fn decompress(input: &[u8], input_offset: usize) -> Result<Vec<u8>> {
    decompress_with_limits(input, input_offset, &ResourceLimits::unlimited())
}

/// Decompresses a length-prefixed LZ4 block, rejecting oversized declarations.
///
/// # Errors
///
/// Returns [`Error::ResourceLimitExceeded`] before allocating anything if the
/// prefix declares more than `limits.max_output_size` bytes.
pub fn decompress_with_limits(
    input: &[u8],
    input_offset: usize,
    limits: &ResourceLimits,
) -> Result<Vec<u8>> {
    let target = decompressed_len(input, input_offset)?;
    limits.check_output_size(target)?;

    let start = input_offset + LENGTH_PREFIX_SIZE;
    let reserve = target.min(input.len().saturating_sub(start).saturating_mul(MAX_EXPANSION));
    let mut output = Vec::with_capacity(reserve);
    decompress_block(input, start, &mut output, target)?;

    log::debug!(
        "Decompressed LZ4 block: {} input bytes -> {} output bytes",
        input.len() - input_offset,
        output.len()
    );
    Ok(output)
}

/// Decodes sequences from `input[pos..]` into `output` until it holds `target` bytes.
fn decompress_block(
    input: &[u8],
    mut pos: usize,
    output: &mut Vec<u8>,
    target: usize,
) -> Result<()> {
    while output.len() < target {
        let token = *input
            .get(pos)
            .ok_or_else(|| Error::corrupt_block(pos, "missing token"))?;
        pos += 1;

        // Literals
        let literal_len = read_length(input, &mut pos, (token >> 4) as usize)?;
        let literals = pos
            .checked_add(literal_len)
            .and_then(|end| input.get(pos..end))
            .ok_or_else(|| Error::corrupt_block(pos, "incomplete literals"))?;
        if literal_len > target - output.len() {
            return Err(Error::corrupt_block(
                pos,
                format!(
                    "literal run of {} bytes overruns declared length {}",
                    literal_len, target
                ),
            ));
        }
        output.extend_from_slice(literals);
        pos += literal_len;

        // The last sequence carries literals only
        if output.len() == target {
            break;
        }

        let offset_bytes = input
            .get(pos..pos + 2)
            .ok_or_else(|| Error::corrupt_block(pos, "incomplete match offset"))?;
        let match_offset = u16::from_le_bytes([offset_bytes[0], offset_bytes[1]]) as usize;
        if match_offset == 0 || match_offset > output.len() {
            return Err(Error::corrupt_block(
                pos,
                format!(
                    "match offset {} outside {} bytes of output",
                    match_offset,
                    output.len()
                ),
            ));
        }
        pos += 2;

        let match_len = read_length(input, &mut pos, (token & 0x0f) as usize)? + MIN_MATCH;
        if match_len > target - output.len() {
            return Err(Error::corrupt_block(
                pos,
                format!(
                    "match of {} bytes overruns declared length {}",
                    match_len, target
                ),
            ));
        }

        // Byte by byte: source and destination overlap when offset < length
        let from = output.len() - match_offset;
        for i in from..from + match_len {
            let byte = output[i];
            output.push(byte);
        }
    }

    Ok(())
}

/// Reads a nibble length and its 255-continuation extension bytes.
fn read_length(input: &[u8], pos: &mut usize, nibble: usize) -> Result<usize> {
    let mut length = nibble;
    if nibble != RUN_MASK {
        return Ok(length);
    }
    loop {
        let byte = *input
            .get(*pos)
            .ok_or_else(|| Error::corrupt_block(*pos, "incomplete length extension"))?;
        *pos += 1;
        length = length
            .checked_add(byte as usize)
            .ok_or_else(|| Error::corrupt_block(*pos, "length extension overflows"))?;
        if byte != 0xff {
            return Ok(length);
        }
    }
}
