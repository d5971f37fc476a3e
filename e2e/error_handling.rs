//! E2E Test Suite 02: Error Handling & Edge Cases
//!
//! Verifies that the decoder treats its input as untrusted: malformed,
//! truncated or mutated streams return `DecompressError::CorruptStream`
//! and never panic or over-allocate.

use rand::{rngs::StdRng, Rng, SeedableRng};
use tinylz::{compress_best, compress_fast, decompress, decompress_into, stream_stats, DecompressError};

fn corpus() -> Vec<u8> {
    b"error handling should never panic, error handling should never panic. ".repeat(30)
}

// ═════════════════════════════════════════════════════════════════════════════
// Test 1: truncation
// ═════════════════════════════════════════════════════════════════════════════

#[test]
fn test_truncated_streams_are_corrupt() {
    let original = corpus();
    for stream in [compress_fast(&original), compress_best(&original)] {
        for cut in 1..=5 {
            let result = decompress(&stream[..stream.len() - cut]);
            assert_eq!(result, Err(DecompressError::CorruptStream), "cut {cut}");
        }
    }
}

#[test]
fn test_partial_header_is_corrupt() {
    for len in 1..4 {
        assert_eq!(decompress(&[0xAB; 3][..len]), Err(DecompressError::CorruptStream));
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Test 2: random mutation
// ═════════════════════════════════════════════════════════════════════════════

#[test]
fn test_mutated_streams_never_panic() {
    let original = corpus();
    let stream = compress_best(&original);
    let mut rng = StdRng::seed_from_u64(0xDEAD_BEEF);

    let mut dst = Vec::new();
    for _ in 0..2000 {
        let mut bad = stream.clone();
        for _ in 0..rng.gen_range(1..=4) {
            let at = rng.gen_range(0..bad.len());
            bad[at] ^= 1u8 << rng.gen_range(0..8u32);
        }
        // Either outcome is fine; it must just not panic, and success means
        // exactly the advertised number of bytes.
        match decompress_into(&bad, &mut dst) {
            Ok(()) => assert_eq!(dst.len(), u32::from_le_bytes([bad[0], bad[1], bad[2], bad[3]]) as usize),
            Err(e) => {
                assert_eq!(e, DecompressError::CorruptStream);
                assert!(dst.is_empty());
            }
        }
        assert_eq!(stream_stats(&bad).is_ok(), decompress(&bad).is_ok());
    }
}

#[test]
fn test_random_garbage_never_panics() {
    let mut rng = StdRng::seed_from_u64(1);
    for len in 0..600usize {
        let mut garbage = vec![0u8; len];
        rng.fill(garbage.as_mut_slice());
        let _ = decompress(&garbage);
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Test 3: hostile headers
// ═════════════════════════════════════════════════════════════════════════════

#[test]
fn test_forged_length_is_rejected() {
    let mut stream = compress_fast(b"short");
    stream[..4].copy_from_slice(&u32::MAX.to_le_bytes());
    assert_eq!(decompress(&stream), Err(DecompressError::CorruptStream));
}

#[test]
fn test_shrunk_length_stops_early() {
    // A smaller advertised length is honoured; the rest of the stream is ignored.
    let original = corpus();
    let mut stream = compress_best(&original);
    stream[..4].copy_from_slice(&10u32.to_le_bytes());
    assert_eq!(decompress(&stream).unwrap(), &original[..10]);
}

#[test]
fn test_error_message() {
    let err = decompress(&[1]).unwrap_err();
    assert_eq!(err.to_string(), "tinylz: corrupt stream");
    let boxed: Box<dyn std::error::Error> = Box::new(err);
    assert!(boxed.source().is_none());
}
