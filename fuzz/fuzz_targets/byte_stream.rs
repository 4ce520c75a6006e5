//! Fuzz target for typed reads over arbitrary buffers.
//!
//! Run with: cargo +nightly fuzz run byte_stream
//!
//! The first byte selects the sequence of reads; every failed read must leave
//! the cursor where it was.

#![no_main]

use bytepack::ByteStream;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Some((&ops, rest)) = data.split_first() else {
        return;
    };
    let mut stream = ByteStream::from_buffer(rest.to_vec());
    if ops & 0x80 != 0 {
        stream.set_big_endian();
    }

    for step in 0..16u32 {
        let before = stream.index();
        let failed = match (ops as u32 + step) % 7 {
            0 => stream.read_vluq().is_err(),
            1 => stream.read_vlsq().is_err(),
            2 => stream.read_nt_string().is_err(),
            3 => stream.read_vluq_string().is_err(),
            4 => stream.read_long().is_err(),
            5 => stream.read_double().is_err(),
            _ => stream.read_short().is_err(),
        };
        if failed {
            assert_eq!(stream.index(), before);
        }
    }
});
