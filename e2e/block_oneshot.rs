//! E2E Test Suite 01: One-Shot Compression
//!
//! Validates the public compress / decompress entry points end to end:
//! - compress_fast, compress_best, compress
//! - decompress, decompress_into
//! - compress_bound, decompressed_length, stream_stats
//!
//! Every stream produced here must decode to exactly the original bytes.

extern crate tinylz;

use rand::{rngs::StdRng, Rng, SeedableRng};
use tinylz::{
    compress, compress_best, compress_bound, compress_fast, decompress, decompress_into,
    decompressed_length, stream_stats, MatcherKind, WINDOW_SIZE,
};

fn round_trip(input: &[u8]) {
    for kind in [MatcherKind::Fast, MatcherKind::Best] {
        let stream = compress(input, kind);
        assert!(stream.len() <= compress_bound(input.len()));
        assert_eq!(decompress(&stream).unwrap(), input, "{kind} matcher, {} bytes", input.len());
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Test 1: repetitive text
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_roundtrip_repetitive_text() {
    let original = b"The quick brown fox jumps over the lazy dog. ".repeat(20);
    round_trip(&original);

    let stream = compress_best(&original);
    assert!(
        stream.len() < original.len() / 4,
        "compressed size {} should be well under original {}",
        stream.len(),
        original.len()
    );
}

// ─────────────────────────────────────────────────────────────────────────────
// Test 2: incompressible data
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_roundtrip_ascending_bytes() {
    let original: Vec<u8> = (0..=255u8).collect();
    round_trip(&original);
    // No repeats: all literals, stream is exactly the bound.
    assert_eq!(compress_fast(&original).len(), compress_bound(original.len()));
    assert_eq!(compress_best(&original).len(), compress_bound(original.len()));
}

// ─────────────────────────────────────────────────────────────────────────────
// Test 3: tiny inputs
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_roundtrip_tiny_inputs() {
    for n in 0..=20usize {
        let original: Vec<u8> = (0..n).map(|i| b"aab"[i % 3]).collect();
        round_trip(&original);
    }
}

#[test]
fn test_empty_input_has_no_header() {
    assert!(compress_fast(b"").is_empty());
    assert!(compress_best(b"").is_empty());
    assert_eq!(decompress(b"").unwrap(), b"");
    assert_eq!(decompressed_length(b""), Ok(0));
}

// ─────────────────────────────────────────────────────────────────────────────
// Test 4: data spanning several windows
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_roundtrip_beyond_window() {
    // A 1000-byte phrase repeated far enough apart that early copies leave the window.
    let phrase: Vec<u8> = (0..1000u32).map(|i| (i * 31 % 97) as u8 + b' ').collect();
    let mut original = Vec::new();
    for i in 0..6u8 {
        original.extend_from_slice(&phrase);
        original.extend(std::iter::repeat(i).take(WINDOW_SIZE / 4));
    }
    round_trip(&original);

    let s = stream_stats(&compress_best(&original)).unwrap();
    assert!(s.largest_offset < WINDOW_SIZE);
    assert!(s.matches > 0);
}

#[test]
fn test_roundtrip_large_mixed_buffer() {
    let mut rng = StdRng::seed_from_u64(12345);
    let mut original = Vec::with_capacity(300_000);
    while original.len() < 300_000 {
        if rng.gen_ratio(1, 4) {
            original.extend_from_slice(b"<record id=\"42\" kind=\"sample\"/>\n");
        } else {
            original.push(rng.gen());
        }
    }
    let stream = compress_fast(&original);
    assert_eq!(decompress(&stream).unwrap(), original);
    assert_eq!(decompressed_length(&stream), Ok(original.len() as u32));
}

// ─────────────────────────────────────────────────────────────────────────────
// Test 5: reusing an output buffer
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_decompress_into_across_streams() {
    let a = b"first stream first stream".to_vec();
    let b = b"second".to_vec();
    let mut dst = Vec::new();

    decompress_into(&compress_best(&a), &mut dst).unwrap();
    assert_eq!(dst, a);
    decompress_into(&compress_fast(&b), &mut dst).unwrap();
    assert_eq!(dst, b);
}

// ─────────────────────────────────────────────────────────────────────────────
// Test 6: determinism
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_compression_is_deterministic() {
    let original = b"deterministic output, deterministic output".repeat(50);
    assert_eq!(compress_fast(&original), compress_fast(&original));
    assert_eq!(compress_best(&original), compress_best(&original));
}
