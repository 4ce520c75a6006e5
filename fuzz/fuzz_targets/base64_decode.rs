//! Fuzz target for Base64 decoding.
//!
//! Run with: cargo +nightly fuzz run base64_decode
//!
//! Decoding must never panic, and text produced by the encoder must decode
//! back to the original bytes.

#![no_main]

use bytepack::codec::base64;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(text) = std::str::from_utf8(data) {
        let _ = base64::decode(text);
    }

    for (url_safe, truncate) in [(false, false), (true, true)] {
        let text = base64::encode(data, url_safe, truncate);
        assert_eq!(base64::decode(&text).expect("encoder output decodes"), data);
    }
});
