#![no_main]

use libfuzzer_sys::fuzz_target;
use std::io::Cursor;
use tinflate::gunzip;

fuzz_target!(|data: &[u8]| {
    // Arbitrary bytes, not necessarily valid gzip at all. Decoding may fail,
    // but it must never panic, loop forever, or read out of bounds.
    let _ = gunzip(Cursor::new(data));
});
