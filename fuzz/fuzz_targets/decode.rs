#![no_main]
use libfuzzer_sys::fuzz_target;

use pinbt::{dump, load, Endian};

// Anything that decodes must encode back to the same bytes.
fuzz_target!(|data: &[u8]| {
    for endian in [Endian::Little, Endian::Big] {
        if let Ok(doc) = load(data, endian) {
            let bs = dump(&doc, endian).unwrap();
            assert_eq!(bs, data);
        }
    }
});
