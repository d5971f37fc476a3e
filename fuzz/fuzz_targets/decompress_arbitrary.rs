#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Arbitrary bytes through the decoder: errors are fine, panics are not.
    match tinylz::decompress(data) {
        Ok(out) => {
            let expected = tinylz::decompressed_length(data).unwrap() as usize;
            assert_eq!(out.len(), expected);
        }
        Err(tinylz::DecompressError::CorruptStream) => {}
    }

    // The census walks the same validation and must agree.
    assert_eq!(tinylz::stream_stats(data).is_ok(), tinylz::decompress(data).is_ok());
});
