#![no_main]
use libfuzzer_sys::fuzz_target;
use tinylz::{compress, decompress, MatcherKind};

fuzz_target!(|data: &[u8]| {
    // The exhaustive matcher is quadratic in the window; keep its inputs short
    // so the fuzzer keeps a useful exec rate.
    let kinds: &[MatcherKind] = if data.len() <= 16 * 1024 {
        &[MatcherKind::Fast, MatcherKind::Best]
    } else {
        &[MatcherKind::Fast]
    };

    for &kind in kinds {
        let stream = compress(data, kind);
        let recovered = decompress(&stream).unwrap_or_else(|e| {
            panic!("{kind} stream of {} bytes failed to decode: {e}", stream.len())
        });
        assert_eq!(recovered, data, "{kind} round-trip mismatch");
    }
});
