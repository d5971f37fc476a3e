//! Format constants and little-endian helpers shared by the encoder, the
//! decoder and both match finders.
//!
//! Stream layout:
//!
//! ```text
//! Stream    := "" | Header Group*
//! Header    := u32 LE original length        (absent iff length == 0)
//! Group     := ControlByte TokenData{1..=8}  (MSB of ControlByte = first token)
//! Literal   := byte
//! Match     := [len:4 | off_hi:4] [off_lo:8] [len - 15]?   (extension iff len >= 15)
//! ```

use super::decompress_core::DecompressError;

// ─────────────────────────────────────────────────────────────────────────────
// Window / match limits
// ─────────────────────────────────────────────────────────────────────────────

/// Size of the sliding window addressable by a back-reference.
pub const WINDOW_SIZE: usize = 4096;

/// Largest offset a match token can carry (12 bits).
pub const MAX_OFFSET: usize = WINDOW_SIZE - 1;

/// Shortest match the encoder emits. Anything shorter is cheaper as literals.
pub const MIN_MATCH: usize = 3;

/// Value of the length nibble that signals an extension byte.
pub const LEN_NIBBLE_MAX: usize = 15;

/// Longest representable match: nibble 15 plus a full extension byte.
pub const MAX_MATCH: usize = LEN_NIBBLE_MAX + 255;

// ─────────────────────────────────────────────────────────────────────────────
// Stream framing
// ─────────────────────────────────────────────────────────────────────────────

/// Size of the little-endian length header.
pub const HEADER_SIZE: usize = 4;

/// Number of tokens governed by one control byte.
pub const TOKENS_PER_GROUP: u32 = 8;

/// Largest input whose length fits in the header.
pub const MAX_INPUT_SIZE: usize = u32::MAX as usize;

/// Upper bound on decoded bytes per compressed byte.
///
/// The densest encoding is a group of eight 3-byte max-length matches:
/// 25 input bytes producing 8 × 270 output bytes.
pub const MAX_EXPANSION_RATIO: usize = (TOKENS_PER_GROUP as usize * MAX_MATCH) / 25 + 1;

// ─────────────────────────────────────────────────────────────────────────────
// Little-endian helpers
// ─────────────────────────────────────────────────────────────────────────────

/// Read a little-endian `u32` from the first four bytes of `p`.
///
/// Callers guarantee `p.len() >= 4`.
#[inline(always)]
pub fn read_le32(p: &[u8]) -> u32 {
    u32::from_le_bytes([p[0], p[1], p[2], p[3]])
}

/// Append `v` to `out` as four little-endian bytes.
#[inline(always)]
pub fn write_le32(out: &mut Vec<u8>, v: u32) {
    out.extend_from_slice(&v.to_le_bytes());
}

/// Start of the window for a stream position: `max(pos - WINDOW_SIZE, 0)`.
#[inline(always)]
pub fn window_start(pos: usize) -> usize {
    pos.saturating_sub(WINDOW_SIZE)
}

/// Decoded length recorded in the stream header.
///
/// An empty stream encodes empty data and reports `0`. A non-empty stream
/// shorter than the header is corrupt.
pub fn decompressed_length(src: &[u8]) -> Result<u32, DecompressError> {
    match src.len() {
        0 => Ok(0),
        n if n < HEADER_SIZE => Err(DecompressError::CorruptStream),
        _ => Ok(read_le32(src)),
    }
}
