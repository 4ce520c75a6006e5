//! Decipher and decompress pipeline for delivered blobs.
//!
//! Data is delivered enciphered with [`Vigenere`], LZ4-compressed, or both.
//! [`Unpacker`] undoes these steps in order and hands back a [`ByteStream`]
//! positioned at the start of the payload.
//!
//! # Example
//!
//! ```rust
//! use bytepack::{UnpackOptions, Unpacker};
//!
//! // 3-byte LZ4 blob holding "abc", not enciphered
//! let blob = vec![3, 0, 0, 0, 0x30, b'a', b'b', b'c'];
//! let unpacker = Unpacker::new(UnpackOptions::new())?;
//! let mut stream = unpacker.unpack(blob)?;
//! assert_eq!(stream.read_string(3)?, "abc");
//! # Ok::<(), bytepack::Error>(())
//! ```

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::codec::lz4;
use crate::crypto::Vigenere;
use crate::safety::ResourceLimits;
use crate::stream::{ByteStream, Endianness};
use crate::{Error, Result};

/// Cipher parameters: generator seed and key length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CipherParams {
    /// Seed for the key generator.
    pub seed: u32,
    /// Number of key bytes.
    pub key_length: usize,
}

/// Options for [`Unpacker`].
#[derive(Debug, Clone)]
pub struct UnpackOptions {
    cipher: Option<CipherParams>,
    compressed: bool,
    endianness: Endianness,
    limits: ResourceLimits,
}

impl Default for UnpackOptions {
    fn default() -> Self {
        Self {
            cipher: None,
            compressed: true,
            endianness: Endianness::Little,
            limits: ResourceLimits::default(),
        }
    }
}

impl UnpackOptions {
    /// Creates options for an unenciphered, compressed, little-endian blob.
    pub fn new() -> Self {
        Self::default()
    }

    /// Deciphers input with a key derived from `seed` and `key_length`.
    pub fn cipher(mut self, seed: u32, key_length: usize) -> Self {
        self.cipher = Some(CipherParams { seed, key_length });
        self
    }

    /// Sets whether input is an LZ4 blob. Defaults to `true`.
    pub fn compressed(mut self, compressed: bool) -> Self {
        self.compressed = compressed;
        self
    }

    /// Sets whether the resulting stream reads big-endian values.
    pub fn big_endian(mut self, big_endian: bool) -> Self {
        self.endianness = if big_endian {
            Endianness::Big
        } else {
            Endianness::Little
        };
        self
    }

    /// Sets the resource limits for decompression.
    pub fn limits(mut self, limits: ResourceLimits) -> Self {
        self.limits = limits;
        self
    }

    /// Returns the cipher parameters, if any.
    pub fn cipher_params(&self) -> Option<CipherParams> {
        self.cipher
    }

    /// Returns whether input is decompressed.
    pub fn is_compressed(&self) -> bool {
        self.compressed
    }

    /// Returns the endianness of produced streams.
    pub fn endianness(&self) -> Endianness {
        self.endianness
    }
}

/// Turns delivered blobs back into readable streams.
///
/// The cipher key is derived once in [`Unpacker::new`]; unpacking does not
/// mutate the unpacker, so one instance can serve many threads.
#[derive(Debug, Clone)]
pub struct Unpacker {
    cipher: Option<Vigenere>,
    options: UnpackOptions,
}

impl Unpacker {
    /// Creates an unpacker.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if a cipher with a zero key length
    /// was requested.
    pub fn new(options: UnpackOptions) -> Result<Self> {
        let cipher = options
            .cipher
            .map(|params| Vigenere::new(params.seed, params.key_length))
            .transpose()?;
        Ok(Self { cipher, options })
    }

    /// Returns the options this unpacker was built with.
    pub fn options(&self) -> &UnpackOptions {
        &self.options
    }

    /// Deciphers and decompresses one blob.
    ///
    /// # Errors
    ///
    /// Propagates [`Error::Truncated`], [`Error::CorruptBlock`] and
    /// [`Error::ResourceLimitExceeded`] from decompression. Uncompressed input
    /// never fails.
    pub fn unpack(&self, mut data: Vec<u8>) -> Result<ByteStream> {
        if let Some(cipher) = &self.cipher {
            let len = data.len();
            cipher.decipher(&mut data, 0, len);
            log::debug!("Deciphered {} bytes", len);
        }

        let payload = if self.options.compressed {
            lz4::decompress_with_limits(&data, 0, &self.options.limits)?
        } else {
            data
        };

        let mut stream = ByteStream::from_buffer(payload);
        stream.set_endianness(self.options.endianness);
        Ok(stream)
    }

    /// Unpacks independent blobs, keeping input order in the results.
    ///
    /// Runs on the rayon thread pool when the `parallel` feature is enabled.
    #[cfg(feature = "parallel")]
    pub fn unpack_many(&self, blobs: Vec<Vec<u8>>) -> Vec<Result<ByteStream>> {
        log::debug!("Unpacking {} blobs in parallel", blobs.len());
        blobs
            .into_par_iter()
            .map(|blob| self.unpack(blob))
            .collect()
    }

    /// Unpacks independent blobs, keeping input order in the results.
    #[cfg(not(feature = "parallel"))]
    pub fn unpack_many(&self, blobs: Vec<Vec<u8>>) -> Vec<Result<ByteStream>> {
        blobs.into_iter().map(|blob| self.unpack(blob)).collect()
    }
}

/// Builds a one-off [`Unpacker`] and unpacks a single blob.
///
/// # Errors
///
/// See [`Unpacker::new`] and [`Unpacker::unpack`].
pub fn unpack(data: Vec<u8>, options: UnpackOptions) -> Result<ByteStream> {
    Unpacker::new(options)?.unpack(data)
}

impl TryFrom<UnpackOptions> for Unpacker {
    type Error = Error;

    fn try_from(options: UnpackOptions) -> Result<Self> {
        Self::new(options)
    }
}
