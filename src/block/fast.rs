//! Hashed match finder.
//!
//! The first four lookahead bytes are hashed into one of 65 536 buckets.
//! Each bucket remembers the two most recent absolute positions that hashed
//! there, oldest first. A lookup always rotates the current position into
//! the bucket, then verifies both remembered candidates byte by byte.
//!
//! Absolute position 0 doubles as the empty-slot marker, so a match against
//! the very first input byte is never found.

use super::matcher::{common_prefix, Match, Matcher};
use super::types::{read_le32, MAX_MATCH, WINDOW_SIZE};

/// log2 of the table size in slots.
pub const HASH_LOG: u32 = 17;

/// Total slots: two per bucket.
pub const HASH_SLOTS: usize = 1 << HASH_LOG;

/// Multiplier applied to the 4-byte prefix (the 32-bit FNV prime).
pub const HASH_PRIME: u32 = 0x0100_0193;

/// Bytes of lookahead needed to form a hash.
const HASH_INPUT: usize = 4;

/// Bucket index for the first four bytes of `p`.
#[inline(always)]
pub fn hash4(p: &[u8]) -> usize {
    (read_le32(p).wrapping_mul(HASH_PRIME) % (HASH_SLOTS as u32 / 2)) as usize
}

/// Stateful hashed matcher. Use one instance per compression call.
pub struct FastMatcher {
    table: Box<[u32]>,
}

impl FastMatcher {
    pub fn new() -> Self {
        Self {
            table: vec![0u32; HASH_SLOTS].into_boxed_slice(),
        }
    }

    /// Verify one remembered position against the lookahead.
    #[inline(always)]
    fn check(candidate: u32, window: &[u8], lookahead: &[u8], position: usize) -> Match {
        let candidate = candidate as usize;
        if candidate == 0 || candidate >= position || position - candidate > WINDOW_SIZE {
            return Match::NONE;
        }

        let window_base = position - window.len();
        let Some(offset) = candidate.checked_sub(window_base) else {
            return Match::NONE;
        };

        let length = common_prefix(&window[offset..], lookahead, MAX_MATCH);
        Match { length, offset }
    }
}

impl Default for FastMatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl Matcher for FastMatcher {
    fn find_match(&mut self, window: &[u8], lookahead: &[u8], position: usize) -> Match {
        if lookahead.len() < HASH_INPUT {
            return Match::NONE;
        }

        let slot = hash4(lookahead) * 2;
        let older = self.table[slot];
        let newer = self.table[slot + 1];

        self.table[slot] = newer;
        self.table[slot + 1] = position as u32;

        let m1 = Self::check(older, window, lookahead, position);
        let m2 = Self::check(newer, window, lookahead, position);

        if m1.length > m2.length {
            m1
        } else {
            m2
        }
    }
}
