// Block compression: stream layout and encoder decisions
//
//   - empty input produces no header
//   - header carries the little-endian input length
//   - literal-only encoding for data without repeats
//   - run-length data collapses into capped match tokens
//   - both matchers and every entry point agree on the stream they emit

use tinylz::block::compress::{
    compress, compress_best, compress_bound, compress_fast, compress_into, compress_to_writer,
    compress_with,
};
use tinylz::block::tokens::{Token, TokenReader};
use tinylz::block::{decompress, BestMatcher, FastMatcher, Matcher, MatcherKind};

// ─────────────────────────────────────────────────────────────────────────────
// Helpers
// ─────────────────────────────────────────────────────────────────────────────

/// Every token of `stream`, stopping once the header length is produced.
fn tokens(stream: &[u8]) -> Vec<Token> {
    let target = u32::from_le_bytes(stream[..4].try_into().unwrap()) as usize;
    let mut reader = TokenReader::new(&stream[4..]);
    let mut produced = 0;
    let mut out = Vec::new();
    while produced < target {
        let t = reader.next_token().unwrap().expect("stream ended early");
        produced += match t {
            Token::Literal(_) => 1,
            Token::Match { length, .. } => length,
        };
        out.push(t);
    }
    out
}

fn both(input: &[u8]) -> [Vec<u8>; 2] {
    [compress_fast(input), compress_best(input)]
}

// ─────────────────────────────────────────────────────────────────────────────
// Header
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn empty_input_is_empty_stream() {
    for stream in both(&[]) {
        assert!(stream.is_empty());
    }
}

#[test]
fn header_is_little_endian_length() {
    let input = vec![0x5Au8; 70_000];
    for stream in both(&input) {
        assert_eq!(&stream[..4], &70_000u32.to_le_bytes());
    }
}

#[test]
fn single_byte_stream() {
    for stream in both(&[0x41]) {
        assert_eq!(stream, [0x01, 0x00, 0x00, 0x00, 0b0000_0000, 0x41]);
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Token choices
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn increasing_ramp_is_all_literals() {
    let input: Vec<u8> = (0..200u8).collect();
    for stream in both(&input) {
        let toks = tokens(&stream);
        assert_eq!(toks.len(), input.len());
        assert!(toks.iter().all(|t| matches!(t, Token::Literal(_))));
        assert_eq!(decompress(&stream).unwrap(), input);
    }
}

#[test]
fn long_run_uses_capped_matches() {
    let input = vec![0x41u8; 5000];
    let stream = compress_best(&input);
    let matches: Vec<(usize, usize)> = tokens(&stream)
        .iter()
        .filter_map(|t| match *t {
            Token::Match { length, offset } => Some((length, offset)),
            Token::Literal(_) => None,
        })
        .collect();
    assert!(!matches.is_empty());
    assert!(matches.iter().all(|&(l, o)| (3..=270).contains(&l) && o <= 4095));
    assert!(matches.iter().any(|&(l, _)| l == 270));
    assert!(stream.len() < 200, "run compressed to {} bytes", stream.len());
    assert_eq!(decompress(&stream).unwrap(), input);
}

#[test]
fn fast_matcher_misses_single_byte_runs() {
    // The hash bucket only ever holds the two previous positions, whose
    // matches are cut short by the end of the window.
    let input = vec![0x41u8; 5000];
    let stream = compress_fast(&input);
    assert!(tokens(&stream).iter().all(|t| matches!(t, Token::Literal(0x41))));
    assert_eq!(stream.len(), compress_bound(input.len()));
    assert_eq!(decompress(&stream).unwrap(), input);
}

#[test]
fn both_matchers_shrink_repetitive_text() {
    let input = b"It was the best of times, it was the worst of times, it was the age of \
                  wisdom, it was the age of foolishness, it was the epoch of belief"
        .repeat(8);
    for stream in both(&input) {
        assert!(stream.len() < input.len() / 2, "{} of {}", stream.len(), input.len());
        assert_eq!(decompress(&stream).unwrap(), input);
    }
}

#[test]
fn stream_never_exceeds_bound() {
    let inputs: [Vec<u8>; 3] = [
        (0..=255u8).collect(),
        b"abcabcabc".repeat(100),
        (0..3000u32).map(|i| (i * 7919 % 251) as u8).collect(),
    ];
    for input in &inputs {
        for stream in both(input) {
            assert!(stream.len() <= compress_bound(input.len()));
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Entry points agree
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn entry_points_produce_identical_streams() {
    let input = b"the rain in spain stays mainly in the plain".repeat(30);

    assert_eq!(compress(&input, MatcherKind::Fast), compress_fast(&input));
    assert_eq!(compress(&input, MatcherKind::Best), compress_best(&input));
    assert_eq!(compress_with(&input, &mut FastMatcher::new()), compress_fast(&input));

    let mut out = b"prefix".to_vec();
    compress_into(&input, &mut BestMatcher, &mut out);
    assert_eq!(&out[..6], b"prefix");
    assert_eq!(&out[6..], &compress_best(&input)[..]);

    let mut sink = Vec::new();
    let n = compress_to_writer(&input, &mut FastMatcher::new(), &mut sink).unwrap();
    assert_eq!(n, sink.len());
    assert_eq!(sink, compress_fast(&input));
}

#[test]
fn trait_object_matcher_works() {
    let input = b"dyn dispatch dyn dispatch dyn dispatch".to_vec();
    let mut boxed: Box<dyn Matcher + Send> = MatcherKind::Fast.build();
    assert_eq!(compress_with(&input, &mut boxed), compress_fast(&input));
    let mut boxed = MatcherKind::Best.build();
    assert_eq!(compress_with(&input, &mut *boxed), compress_best(&input));
}
