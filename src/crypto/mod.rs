//! Key stream generation and deciphering.
//!
//! This module provides an obfuscation scheme, not encryption:
//! - [`Random`], a seeded linear congruential generator
//! - [`Vigenere`], an additive repeating-key cipher whose key comes from [`Random`]
//!
//! Anyone who knows the seed and key length can recover the key.

mod random;
mod vigenere;

pub use random::{DEFAULT_SEED, Random};
pub use vigenere::Vigenere;
