//! Codecs for delivered data.
//!
//! - [`lz4`]: decompression of length-prefixed LZ4 blocks
//! - [`base64`]: Base64 encoding and decoding, standard and URL-safe

pub mod base64;
pub mod lz4;
