//! Token layer: control-byte grouping on the write side and a bounds-checked
//! token parser on the read side.
//!
//! Every token costs one control bit. Eight bits form a control byte that is
//! written immediately ahead of the data of the tokens it governs:
//!
//! ```text
//! [ctrl][d0][d1]...[d7]   ctrl bit 7 describes d0, bit 0 describes d7
//! ```
//!
//! The final group may be short; its unused low bits are zero.

use super::decompress_core::DecompressError;
use super::types::{LEN_NIBBLE_MAX, MAX_MATCH, MAX_OFFSET, MIN_MATCH, TOKENS_PER_GROUP};

/// One decoded token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    /// Copy this byte to the output.
    Literal(u8),
    /// Copy `length` bytes starting `offset` bytes into the current window.
    Match { length: usize, offset: usize },
}

// ─────────────────────────────────────────────────────────────────────────────
// GroupWriter
// ─────────────────────────────────────────────────────────────────────────────

/// Accumulates tokens into control-byte groups and appends completed groups
/// to an output buffer.
///
/// Token data is staged in a small side buffer until the group's control
/// byte is known, then both are flushed together.
pub struct GroupWriter<'a> {
    out: &'a mut Vec<u8>,
    control: u8,
    count: u32,
    data: Vec<u8>,
}

impl<'a> GroupWriter<'a> {
    /// Start writing groups at the end of `out`.
    pub fn new(out: &'a mut Vec<u8>) -> Self {
        Self {
            out,
            control: 0,
            count: 0,
            // 8 tokens × at most 3 bytes
            data: Vec::with_capacity(TOKENS_PER_GROUP as usize * 3),
        }
    }

    /// Append a literal token.
    #[inline]
    pub fn literal(&mut self, byte: u8) {
        self.data.push(byte);
        self.push_bit(false);
    }

    /// Append a match token.
    ///
    /// `length` must lie in `MIN_MATCH..=MAX_MATCH` and `offset` in
    /// `0..=MAX_OFFSET`; the match finders never produce anything else.
    #[inline]
    pub fn back_reference(&mut self, length: usize, offset: usize) {
        debug_assert!((MIN_MATCH..=MAX_MATCH).contains(&length));
        debug_assert!(offset <= MAX_OFFSET);

        let nibble = length.min(LEN_NIBBLE_MAX);
        self.data.push(((nibble << 4) | ((offset >> 8) & 0x0F)) as u8);
        self.data.push((offset & 0xFF) as u8);
        if nibble == LEN_NIBBLE_MAX {
            self.data.push((length - LEN_NIBBLE_MAX) as u8);
        }
        self.push_bit(true);
    }

    /// Flush a partial final group, zero-padding its control byte.
    pub fn finish(mut self) {
        if self.count != 0 {
            self.control <<= TOKENS_PER_GROUP - self.count;
            self.flush();
        }
    }

    #[inline(always)]
    fn push_bit(&mut self, is_match: bool) {
        self.control = (self.control << 1) | is_match as u8;
        self.count += 1;
        if self.count == TOKENS_PER_GROUP {
            self.flush();
        }
    }

    fn flush(&mut self) {
        self.out.push(self.control);
        self.out.extend_from_slice(&self.data);
        self.data.clear();
        self.control = 0;
        self.count = 0;
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// TokenReader
// ─────────────────────────────────────────────────────────────────────────────

/// Pulls tokens out of the group section of a compressed stream.
///
/// The reader knows nothing about the target length; callers stop asking
/// for tokens once they have produced enough output, which leaves any
/// padding bits of the last control byte unread.
pub struct TokenReader<'a> {
    src: &'a [u8],
    pos: usize,
    control: u8,
    bits_left: u32,
    groups: usize,
}

impl<'a> TokenReader<'a> {
    /// `src` is the stream with the header already stripped.
    pub fn new(src: &'a [u8]) -> Self {
        Self {
            src,
            pos: 0,
            control: 0,
            bits_left: 0,
            groups: 0,
        }
    }

    /// Bytes consumed so far, control bytes included.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Number of control bytes read so far.
    pub fn groups_read(&self) -> usize {
        self.groups
    }

    /// Read the next token.
    ///
    /// Returns `Ok(None)` when the input ends exactly on a group boundary,
    /// and `CorruptStream` when it ends inside a token.
    pub fn next_token(&mut self) -> Result<Option<Token>, DecompressError> {
        if self.bits_left == 0 {
            let Some(&control) = self.src.get(self.pos) else {
                return Ok(None);
            };
            self.control = control;
            self.bits_left = TOKENS_PER_GROUP;
            self.pos += 1;
            self.groups += 1;
        }

        let is_match = self.control & 0x80 != 0;
        self.control <<= 1;
        self.bits_left -= 1;

        if !is_match {
            let byte = *self.src.get(self.pos).ok_or(DecompressError::CorruptStream)?;
            self.pos += 1;
            return Ok(Some(Token::Literal(byte)));
        }

        let pair = self
            .src
            .get(self.pos..self.pos + 2)
            .ok_or(DecompressError::CorruptStream)?;
        let mut length = (pair[0] >> 4) as usize;
        let offset = (((pair[0] & 0x0F) as usize) << 8) | pair[1] as usize;
        self.pos += 2;

        if length == LEN_NIBBLE_MAX {
            let ext = *self.src.get(self.pos).ok_or(DecompressError::CorruptStream)?;
            length += ext as usize;
            self.pos += 1;
        }

        Ok(Some(Token::Match { length, offset }))
    }
}
