//! Fuzz target for LZ4 block decompression with arbitrary input.
//!
//! Run with: cargo +nightly fuzz run lz4_decompress
//!
//! Properties being tested:
//! - No panics or out-of-range reads on malformed token streams
//! - Successful output always has exactly the declared length

#![no_main]

use bytepack::ResourceLimits;
use bytepack::codec::lz4;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let limits = ResourceLimits::new().max_output_size(1 << 20);
    if let Ok(output) = lz4::decompress_with_limits(data, 0, &limits) {
        let declared = lz4::decompressed_len(data, 0).expect("prefix was read");
        assert_eq!(output.len(), declared);
    }
});
