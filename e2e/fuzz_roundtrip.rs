//! E2E Test Suite 03: Randomized Round-Trip
//!
//! Random buffers of 0..10000 bytes must round-trip exactly under both
//! matchers. proptest shrinks any failing buffer before reporting it, so a
//! failure arrives as a minimal counterexample.

use proptest::prelude::*;
use rand::{rngs::StdRng, Rng, SeedableRng};
use rayon::prelude::*;
use tinylz::{compress, compress_fast, compress_with, decompress, FastMatcher, MatcherKind};

/// Bytes from a small alphabet, so the matchers find plenty of repeats.
fn repetitive_bytes(max_len: usize) -> impl Strategy<Value = Vec<u8>> {
    (1u8..=8).prop_flat_map(move |alphabet| prop::collection::vec(0..alphabet, 0..max_len))
}

fn round_trip(input: &[u8], kind: MatcherKind) -> Result<(), TestCaseError> {
    let stream = compress(input, kind);
    let decoded = decompress(&stream);
    prop_assert!(decoded.is_ok(), "{} stream failed to decode: {:?}", kind, decoded);
    prop_assert_eq!(decoded.unwrap(), input);
    Ok(())
}

// ─────────────────────────────────────────────────────────────────────────────
// Round-trip properties
// ─────────────────────────────────────────────────────────────────────────────

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_random_bytes_round_trip_fast(data in prop::collection::vec(any::<u8>(), 0..10_000)) {
        round_trip(&data, MatcherKind::Fast)?;
    }

    #[test]
    fn prop_repetitive_bytes_round_trip_fast(data in repetitive_bytes(10_000)) {
        round_trip(&data, MatcherKind::Fast)?;
    }
}

proptest! {
    // The exhaustive matcher scans the whole window per position.
    #![proptest_config(ProptestConfig::with_cases(8))]

    #[test]
    fn prop_random_bytes_round_trip_best(data in prop::collection::vec(any::<u8>(), 0..10_000)) {
        round_trip(&data, MatcherKind::Best)?;
    }

    #[test]
    fn prop_repetitive_bytes_round_trip_best(data in repetitive_bytes(10_000)) {
        round_trip(&data, MatcherKind::Best)?;
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(512))]

    #[test]
    fn prop_short_buffers_round_trip_both(data in repetitive_bytes(64)) {
        round_trip(&data, MatcherKind::Fast)?;
        round_trip(&data, MatcherKind::Best)?;
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Independent matchers on worker threads
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn parallel_encoders_with_independent_matchers() {
    let inputs: Vec<Vec<u8>> = (0..32u64)
        .map(|seed| {
            let mut rng = StdRng::seed_from_u64(seed);
            let len = rng.gen_range(0..10_000);
            let alphabet = rng.gen_range(1..=255u8);
            (0..len).map(|_| rng.gen_range(0..alphabet)).collect()
        })
        .collect();

    let streams: Vec<Vec<u8>> = inputs
        .par_iter()
        .map(|input| compress_with(input, &mut FastMatcher::new()))
        .collect();

    for (input, stream) in inputs.iter().zip(&streams) {
        assert_eq!(stream, &compress_fast(input));
        assert_eq!(&decompress(stream).unwrap(), input);
    }
}
