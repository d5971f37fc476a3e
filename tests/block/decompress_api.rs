// Block decompression public API
//
//   - decompress / decompress_into on hand-built streams
//   - header handling: empty, partial, zero length
//   - back-reference validation against produced output and the 4 KiB window
//   - truncation anywhere inside a valid stream
//   - padding bits and trailing bytes after the target length

use tinylz::block::{compress_best, compress_fast, decompress, decompress_into, decompressed_length, DecompressError};

// ─────────────────────────────────────────────────────────────────────────────
// Hand-crafted streams
// ─────────────────────────────────────────────────────────────────────────────

// len 6: literals a b c, match len 3 offset 0
const STREAM_ABCABC: &[u8] = &[6, 0, 0, 0, 0b0001_0000, b'a', b'b', b'c', 0x30, 0x00];

// len 1: one literal, control byte padding bits all zero
const STREAM_A: &[u8] = &[1, 0, 0, 0, 0x00, 0x41];

const CORRUPT: Result<Vec<u8>, DecompressError> = Err(DecompressError::CorruptStream);

// ─────────────────────────────────────────────────────────────────────────────
// Headers
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn empty_stream_decodes_to_empty() {
    assert_eq!(decompress(&[]), Ok(Vec::new()));
    assert_eq!(decompressed_length(&[]), Ok(0));
}

#[test]
fn header_shorter_than_four_bytes_is_corrupt() {
    assert_eq!(decompress(&[1]), CORRUPT);
    assert_eq!(decompress(&[1, 0]), CORRUPT);
    assert_eq!(decompress(&[1, 0, 0]), CORRUPT);
}

#[test]
fn header_without_groups_is_corrupt() {
    assert_eq!(decompress(&[1, 0, 0, 0]), CORRUPT);
}

#[test]
fn decompressed_length_reads_header() {
    assert_eq!(decompressed_length(STREAM_ABCABC), Ok(6));
    assert_eq!(decompressed_length(&[0x78, 0x56, 0x34, 0x12]), Ok(0x1234_5678));
}

// ─────────────────────────────────────────────────────────────────────────────
// Well-formed streams
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn hand_built_streams_decode() {
    assert_eq!(decompress(STREAM_A), Ok(vec![0x41]));
    assert_eq!(decompress(STREAM_ABCABC), Ok(b"abcabc".to_vec()));
}

#[test]
fn padding_bits_are_not_interpreted() {
    // Same as STREAM_A but the unused control bits claim matches.
    assert_eq!(decompress(&[1, 0, 0, 0, 0b0111_1111, 0x41]), Ok(vec![0x41]));
}

#[test]
fn trailing_bytes_after_target_are_ignored() {
    let mut stream = STREAM_ABCABC.to_vec();
    stream.extend_from_slice(&[0xFF, 0xFF, 0xFF]);
    assert_eq!(decompress(&stream), Ok(b"abcabc".to_vec()));
}

#[test]
fn extension_byte_extends_length() {
    // 20 literals, then one match: nibble 15 plus extension 5 copies all 20.
    let mut stream = vec![40, 0, 0, 0];
    let lits: Vec<u8> = (b'a'..b'a' + 20).collect();
    for chunk in lits.chunks(8) {
        stream.push(0x00);
        stream.extend_from_slice(chunk);
    }
    // The third group holds 4 literals; its fifth token becomes the match.
    let last_ctrl = stream.len() - 5;
    stream[last_ctrl] = 0b0000_1000;
    stream.extend_from_slice(&[0xF0, 0x00, 5]);
    let out = decompress(&stream).unwrap();
    assert_eq!(&out[..20], &lits[..]);
    assert_eq!(&out[20..], &lits[..]);
}

#[test]
fn decompress_into_reuses_buffer() {
    let mut dst = Vec::with_capacity(1024);
    let cap = dst.capacity();
    decompress_into(STREAM_ABCABC, &mut dst).unwrap();
    assert_eq!(dst, b"abcabc");
    assert_eq!(dst.capacity(), cap);
}

// ─────────────────────────────────────────────────────────────────────────────
// Back-reference validation
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn match_before_any_output_is_corrupt() {
    assert_eq!(decompress(&[3, 0, 0, 0, 0x80, 0x30, 0x00]), CORRUPT);
}

#[test]
fn match_reading_past_produced_output_is_corrupt() {
    // "ab" then a 3-byte match from offset 0 would need byte 2.
    assert_eq!(decompress(&[5, 0, 0, 0, 0b0010_0000, b'a', b'b', 0x30, 0x00]), CORRUPT);
    // offset pointing at the current end.
    assert_eq!(decompress(&[5, 0, 0, 0, 0b0010_0000, b'a', b'b', 0x30, 0x02]), CORRUPT);
}

#[test]
fn match_past_header_length_is_corrupt() {
    // STREAM_ABCABC with its header lowered to 5: the match would write byte 6.
    assert_eq!(decompress(&[5, 0, 0, 0, 0b0001_0000, b'a', b'b', b'c', 0x30, 0x00]), CORRUPT);
    // The same match fits a header of 6 exactly.
    assert_eq!(decompress(&[6, 0, 0, 0, 0b0001_0000, b'a', b'b', b'c', 0x30, 0x00]), Ok(b"abcabc".to_vec()));
}

#[test]
fn offsets_are_relative_to_window_base() {
    // 5000 bytes of output, then a match at offset 0 copies from 5000 - 4096.
    let prefix: Vec<u8> = (0..5000u32).map(|i| (i % 253) as u8).collect();
    let len = 5003u32;

    // 625 full literal groups, then a group holding the match.
    let mut manual = len.to_le_bytes().to_vec();
    for chunk in prefix.chunks(8) {
        manual.push(0x00);
        manual.extend_from_slice(chunk);
    }
    manual.extend_from_slice(&[0x80, 0x30, 0x00]);

    let out = decompress(&manual).unwrap();
    let base = 5000 - 4096;
    assert_eq!(&out[..5000], &prefix[..]);
    assert_eq!(&out[5000..], &prefix[base..base + 3]);
}

// ─────────────────────────────────────────────────────────────────────────────
// Truncation
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn truncating_five_bytes_is_corrupt() {
    let input = b"a stream long enough to lose five bytes, a stream long enough".to_vec();
    for stream in [compress_fast(&input), compress_best(&input)] {
        let cut = &stream[..stream.len() - 5];
        assert_eq!(decompress(cut), CORRUPT);
    }
}

#[test]
fn every_truncation_is_corrupt() {
    let input: Vec<u8> = b"abracadabra ".repeat(40);
    let stream = compress_best(&input);
    for n in 1..stream.len() {
        assert_eq!(decompress(&stream[..n]), CORRUPT, "prefix of {n} bytes");
    }
}

#[test]
fn forged_huge_length_fails_without_huge_allocation() {
    assert_eq!(decompress(&[0xFF, 0xFF, 0xFF, 0xFF, 0x00, 0x41]), CORRUPT);
}
