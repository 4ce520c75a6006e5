//! Additive Vigenère stream cipher.
//!
//! The key is a byte sequence derived from `(seed, key_length)` with
//! [`Random::generate_array`]. Enciphering adds the repeating key to the data
//! modulo 256; this type only provides the inverse. Data is expected to be
//! enciphered out of band before delivery.

use super::Random;
use crate::{Error, Result};

/// Repeating-key additive cipher with a pseudo-random key.
#[derive(Clone, PartialEq, Eq)]
pub struct Vigenere {
    key: Vec<u8>,
}

impl std::fmt::Debug for Vigenere {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Key bytes stay out of logs
        f.debug_struct("Vigenere")
            .field("key_len", &self.key.len())
            .finish()
    }
}

impl Vigenere {
    /// Builds a cipher whose key is `key_length` bytes drawn from a generator
    /// seeded with `seed`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if `key_length` is zero.
    pub fn new(seed: u32, key_length: usize) -> Result<Self> {
        if key_length == 0 {
            return Err(Error::InvalidArgument(
                "cipher key length must be non-zero".into(),
            ));
        }
        let key = Random::new(seed).generate_array(key_length);
        Ok(Self { key })
    }

    /// Returns the key bytes.
    pub fn key(&self) -> &[u8] {
        &self.key
    }

    /// Deciphers `length` bytes of `buffer` starting at `offset`, in place.
    ///
    /// The key restarts at `offset`. The range is clamped to the end of the
    /// buffer; an offset past the end leaves the buffer untouched.
    ///
    /// # Example
    ///
    /// ```rust
    /// use bytepack::crypto::Vigenere;
    ///
    /// let cipher = Vigenere::new(42, 8)?;
    /// let mut data: Vec<u8> = b"secret"
    ///     .iter()
    ///     .zip(cipher.key().iter().cycle())
    ///     .map(|(&b, &k)| b.wrapping_add(k))
    ///     .collect();
    ///
    /// cipher.decipher(&mut data, 0, usize::MAX);
    /// assert_eq!(data, b"secret");
    /// # Ok::<(), bytepack::Error>(())
    /// ```
    pub fn decipher(&self, buffer: &mut [u8], offset: usize, length: usize) {
        let Some(region) = buffer.get_mut(offset..) else {
            return;
        };
        let length = length.min(region.len());
        for (byte, &k) in region[..length].iter_mut().zip(self.key.iter().cycle()) {
            *byte = byte.wrapping_sub(k);
        }
    }
}
