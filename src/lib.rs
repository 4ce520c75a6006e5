//! # bytepack
//!
//! A pure-Rust toolkit for reading and writing compact binary payloads.
//!
//! This crate provides a cursor-based byte buffer with typed accessors, an LZ4
//! block decompressor, a Base64 codec and a lightweight Vigenère obfuscation
//! layer driven by a seeded pseudo-random generator.
//!
//! ## Quick Start
//!
//! ### Writing and Reading a Payload
//!
//! ```rust
//! use bytepack::{ByteStream, Result};
//!
//! fn main() -> Result<()> {
//!     let mut out = ByteStream::new();
//!     out.write_int(0xCAFE_F00D);
//!     out.write_vlsq(-42);
//!     out.write_vluq_string("level-1");
//!
//!     let mut input = ByteStream::from_buffer(out.write_buffer().to_vec());
//!     assert_eq!(input.read_int()?, 0xCAFE_F00D);
//!     assert_eq!(input.read_vlsq()?, -42);
//!     assert_eq!(input.read_vluq_string()?, "level-1");
//!     Ok(())
//! }
//! ```
//!
//! ### Unpacking a Delivered Blob
//!
//! ```rust,no_run
//! use bytepack::{UnpackOptions, Unpacker, Result};
//!
//! fn main() -> Result<()> {
//!     let blob = std::fs::read("level.bin")?;
//!     let unpacker = Unpacker::new(UnpackOptions::new().cipher(0x1234, 16))?;
//!     let mut stream = unpacker.unpack(blob)?;
//!     println!("version {}", stream.read_short()?);
//!     Ok(())
//! }
//! ```
//!
//! ### Base64
//!
//! ```rust
//! use bytepack::codec::base64;
//!
//! let text = base64::encode(b"hello", false, false);
//! assert_eq!(text, "aGVsbG8=");
//! assert_eq!(base64::decode(&text).unwrap(), b"hello");
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `parallel` | Yes | Unpack independent blobs on the rayon thread pool |
//! | `cli` | No | The `bytepack` command-line tool |
//!
//! ## Safety and Resource Limits
//!
//! Every read is bounds-checked. Malformed LZ4 blocks, VLQs and Base64 text
//! are reported as errors, never as panics or out-of-range reads. An LZ4 blob
//! declares its output size up front, so [`Unpacker`] rejects declarations
//! above [`ResourceLimits::max_output_size`] before allocating.
//!
//! The Vigenère layer is obfuscation, not encryption.
//!
//! ## Minimum Supported Rust Version (MSRV)
//!
//! This crate requires **Rust 1.85** or later.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
#![warn(rust_2018_idioms)]
#![forbid(unsafe_code)]

pub mod codec;
pub mod crypto;
pub mod error;
pub mod safety;
pub mod stream;
pub mod unpack;

pub use crypto::{Random, Vigenere};
pub use error::{Error, Result};
pub use safety::ResourceLimits;
pub use stream::{ByteStream, Endianness};
pub use unpack::{CipherParams, UnpackOptions, Unpacker};
