//! Block compression.
//!
//! The encoder walks the input once. At each position it asks the matcher
//! for the longest match inside the trailing 4 KiB window and emits either a
//! match token or a literal. Before committing to a match it peeks one byte
//! ahead: when the match starting at `pos + 1` is strictly longer, the byte
//! at `pos` goes out as a literal and the longer match is taken instead.
//!
//! | Function               | Output                                   |
//! |------------------------|------------------------------------------|
//! | [`compress_into`]      | appends to a caller-owned `Vec<u8>`      |
//! | [`compress_with`]      | new `Vec<u8>`, caller-supplied matcher   |
//! | [`compress`]           | new `Vec<u8>`, matcher chosen by kind    |
//! | [`compress_fast`]      | shorthand for [`MatcherKind::Fast`]      |
//! | [`compress_best`]      | shorthand for [`MatcherKind::Best`]      |
//! | [`compress_to_writer`] | any `std::io::Write` sink                |
//!
//! Empty input compresses to an empty stream: no header is written.

use std::io::{self, Write};

use super::best::BestMatcher;
use super::fast::FastMatcher;
use super::matcher::{Match, Matcher, MatcherKind};
use super::tokens::GroupWriter;
use super::types::{window_start, write_le32, HEADER_SIZE, MAX_INPUT_SIZE, MIN_MATCH};

/// Worst-case compressed size for `input_len` bytes: every byte a literal,
/// plus one control byte per eight tokens and the header.
#[inline]
pub fn compress_bound(input_len: usize) -> usize {
    if input_len == 0 {
        0
    } else {
        HEADER_SIZE + input_len + input_len.div_ceil(8)
    }
}

/// Search for a match at `pos`, using the window that ends at `pos`.
#[inline(always)]
fn search<M: Matcher + ?Sized>(matcher: &mut M, input: &[u8], pos: usize) -> Match {
    matcher.find_match(&input[window_start(pos)..pos], &input[pos..], pos)
}

/// Compress `input` with `matcher`, appending the stream to `out`.
///
/// Pass a fresh matcher to get reproducible output. A reused
/// [`FastMatcher`] still yields a valid stream (candidates are always
/// verified against the current window) but its stale positions change
/// which matches are found.
///
/// # Panics
///
/// Panics when `input` is longer than [`MAX_INPUT_SIZE`], whose length
/// cannot be stored in the header.
pub fn compress_into<M: Matcher + ?Sized>(input: &[u8], matcher: &mut M, out: &mut Vec<u8>) {
    if input.is_empty() {
        return;
    }
    assert!(
        input.len() <= MAX_INPUT_SIZE,
        "input of {} bytes exceeds the {} byte format limit",
        input.len(),
        MAX_INPUT_SIZE
    );

    out.reserve(compress_bound(input.len()));
    write_le32(out, input.len() as u32);

    let mut groups = GroupWriter::new(out);
    let n = input.len();
    let mut pos = 0usize;

    while pos < n {
        let mut m = search(matcher, input, pos);

        if m.length < MIN_MATCH {
            groups.literal(input[pos]);
            pos += 1;
            continue;
        }

        // Lazy step: a strictly longer match one byte later is worth a literal.
        let next = search(matcher, input, pos + 1);
        if next.length > m.length {
            groups.literal(input[pos]);
            pos += 1;
            m = next;
        }

        groups.back_reference(m.length, m.offset);
        pos += m.length;
    }

    groups.finish();
}

/// Compress `input` with the given matcher into a new buffer.
pub fn compress_with<M: Matcher + ?Sized>(input: &[u8], matcher: &mut M) -> Vec<u8> {
    let mut out = Vec::new();
    compress_into(input, matcher, &mut out);
    out
}

/// Compress `input` with a fresh matcher of the given kind.
pub fn compress(input: &[u8], kind: MatcherKind) -> Vec<u8> {
    match kind {
        MatcherKind::Fast => compress_fast(input),
        MatcherKind::Best => compress_best(input),
    }
}

/// Compress with the hashed matcher.
pub fn compress_fast(input: &[u8]) -> Vec<u8> {
    compress_with(input, &mut FastMatcher::new())
}

/// Compress with the exhaustive matcher.
pub fn compress_best(input: &[u8]) -> Vec<u8> {
    compress_with(input, &mut BestMatcher)
}

/// Compress `input` and write the stream to `w`.
///
/// The stream is assembled in memory and handed to the sink with a single
/// `write_all`. Only errors of the sink are reported.
pub fn compress_to_writer<W, M>(input: &[u8], matcher: &mut M, w: &mut W) -> io::Result<usize>
where
    W: Write + ?Sized,
    M: Matcher + ?Sized,
{
    let stream = compress_with(input, matcher);
    w.write_all(&stream)?;
    Ok(stream.len())
}
