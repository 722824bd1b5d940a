#![no_main]

use flate2::write::GzEncoder;
use flate2::Compression;
use libfuzzer_sys::fuzz_target;
use std::io::{Cursor, Write};
use tinflate::gunzip;

fuzz_target!(|data: &[u8]| {
    // Compress arbitrary data with the reference encoder, then decode it back
    // and check we recover exactly the original bytes.
    let data = if data.len() > 256 * 1024 { &data[..256 * 1024] } else { data };

    let mut encoder = GzEncoder::new(Vec::new(), Compression::fast());
    if encoder.write_all(data).is_err() {
        return;
    }
    let Ok(gzip_data) = encoder.finish() else {
        return;
    };

    let decompressed = gunzip(Cursor::new(gzip_data)).expect("valid gzip must decode");
    assert_eq!(decompressed, data, "round-trip mismatch");
});
