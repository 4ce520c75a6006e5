//! Deterministic 32-bit linear congruential generator.
//!
//! `seed = seed * 0x19660d + 0x3c6ef35f (mod 2^32)`. The same seed always
//! yields the same sequence, which is what key derivation for
//! [`Vigenere`](super::Vigenere) relies on. Not suitable for anything that
//! needs unpredictability.

use crate::{Error, Result};

/// Seed used by [`Random::default`].
pub const DEFAULT_SEED: u32 = 0x444f_4368;

const MULTIPLIER: u32 = 0x0019_660d;
const INCREMENT: u32 = 0x3c6e_f35f;

/// Linear congruential pseudo-random generator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Random {
    seed: u32,
}

impl Default for Random {
    fn default() -> Self {
        Self::new(DEFAULT_SEED)
    }
}

impl Random {
    /// Creates a generator with the given seed.
    pub fn new(seed: u32) -> Self {
        Self { seed }
    }

    /// Returns the current state.
    pub fn seed(&self) -> u32 {
        self.seed
    }

    /// Advances the generator and returns the new state.
    pub fn generate(&mut self) -> u32 {
        self.seed = self.seed.wrapping_mul(MULTIPLIER).wrapping_add(INCREMENT);
        self.seed
    }

    /// Returns a value in `minimum..=maximum`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if `minimum > maximum`.
    pub fn generate_in_range(&mut self, minimum: u32, maximum: u32) -> Result<u32> {
        if minimum > maximum {
            return Err(Error::InvalidArgument(format!(
                "empty range {}..={}",
                minimum, maximum
            )));
        }
        Ok(self.draw_in_range(minimum, maximum))
    }

    fn draw_in_range(&mut self, minimum: u32, maximum: u32) -> u32 {
        let span = (maximum - minimum) as u64 + 1;
        (self.generate() as u64 % span) as u32 + minimum
    }

    /// Returns `0..length` shuffled with a Fisher–Yates shuffle.
    ///
    /// Values are stored as bytes, so for `length > 256` they wrap modulo 256
    /// and the result is no longer a permutation.
    pub fn generate_array(&mut self, length: usize) -> Vec<u8> {
        let mut values: Vec<u8> = (0..length).map(|i| i as u8).collect();
        for i in (1..length).rev() {
            let j = self.draw_in_range(0, i as u32) as usize;
            values.swap(i, j);
        }
        values
    }
}
