//! Block decompression core.
//!
//! # Security boundary
//!
//! The compressed stream is untrusted. Every read from it goes through
//! [`TokenReader`], which checks bounds before touching a byte, and every
//! back-reference is checked against the output produced so far before it is
//! copied. Malformed, truncated or hostile input must come back as
//! `Err(DecompressError::CorruptStream)`; it must never panic.
//!
//! A back-reference never overlaps the bytes it is producing (the source
//! must end at or before the current output length), so the copy is a plain
//! `extend_from_within`. A back-reference that would run past the length
//! recorded in the header is corrupt as well: successful output is always
//! exactly that long.

use core::fmt;

use super::tokens::{Token, TokenReader};
use super::types::{window_start, MAX_EXPANSION_RATIO};

// ─────────────────────────────────────────────────────────────────────────────
// Error type
// ─────────────────────────────────────────────────────────────────────────────

/// Errors returned by block decompression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecompressError {
    /// The stream is truncated, references bytes that have not been produced,
    /// ends before the length recorded in its header was reached, or holds a
    /// back-reference that would grow the output past that length.
    CorruptStream,
}

impl fmt::Display for DecompressError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecompressError::CorruptStream => f.write_str("tinylz: corrupt stream"),
        }
    }
}

impl std::error::Error for DecompressError {}

// ─────────────────────────────────────────────────────────────────────────────
// Back-reference copy
// ─────────────────────────────────────────────────────────────────────────────

/// Append `length` bytes starting `offset` bytes into the current window.
///
/// The source must start inside the produced output and end at or before
/// its current end, and the copy must not grow `out` past `target`.
#[inline(always)]
pub(crate) fn copy_match(
    out: &mut Vec<u8>,
    offset: usize,
    length: usize,
    target: usize,
) -> Result<(), DecompressError> {
    let produced = out.len();
    let start = window_start(produced) + offset;
    if start >= produced || start + length > produced || produced + length > target {
        return Err(DecompressError::CorruptStream);
    }
    out.extend_from_within(start..start + length);
    Ok(())
}

/// Bytes to reserve up front for a stream claiming `target` bytes.
///
/// A forged header cannot make us allocate more than the remaining input
/// could possibly expand to.
#[inline]
pub(crate) fn initial_capacity(target: usize, body_len: usize) -> usize {
    target.min(body_len.saturating_mul(MAX_EXPANSION_RATIO))
}

// ─────────────────────────────────────────────────────────────────────────────
// decompress_generic
// ─────────────────────────────────────────────────────────────────────────────

/// Decode the group section `body` into `out` until `out` holds `target`
/// bytes.
///
/// `out` must be empty on entry: window offsets are relative to the start of
/// the decoded data. Bytes following the token that completes the output
/// are ignored, including the padding bits of the final control byte.
pub fn decompress_generic(body: &[u8], target: usize, out: &mut Vec<u8>) -> Result<(), DecompressError> {
    debug_assert!(out.is_empty());

    out.reserve(initial_capacity(target, body.len()));
    let mut reader = TokenReader::new(body);

    while out.len() < target {
        match reader.next_token()? {
            Some(Token::Literal(byte)) => out.push(byte),
            Some(Token::Match { length, offset }) => copy_match(out, offset, length, target)?,
            // Ran out of input before producing the advertised length.
            None => return Err(DecompressError::CorruptStream),
        }
    }

    Ok(())
}
