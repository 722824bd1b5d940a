#![no_main]

use libfuzzer_sys::fuzz_target;
use std::io::Cursor;
use tinflate::inflate;

fuzz_target!(|data: &[u8]| {
    // Arbitrary bytes interpreted as a raw DEFLATE stream, bypassing the gzip
    // container entirely, to exercise BlockDecoder/CanonicalCode/History
    // directly against malformed block headers and Huffman tables.
    let _ = inflate(Cursor::new(data));
});
