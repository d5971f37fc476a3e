//! Match-finder interface.
//!
//! A matcher is asked, once per input position, for the longest earlier
//! occurrence of the upcoming bytes inside the sliding window. Two
//! implementations ship with the crate:
//!
//! | Matcher          | State                       | Cost per position          |
//! |------------------|-----------------------------|----------------------------|
//! | [`FastMatcher`]  | 65 536 × 2-slot hash table  | two candidate comparisons  |
//! | [`BestMatcher`]  | none                        | full window scan           |
//!
//! [`FastMatcher`]: super::fast::FastMatcher
//! [`BestMatcher`]: super::best::BestMatcher

use core::fmt;
use core::str::FromStr;

use super::best::BestMatcher;
use super::fast::FastMatcher;

/// Result of one match search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Match {
    /// Number of matching bytes, `0..=MAX_MATCH`.
    pub length: usize,
    /// Start of the match, relative to the start of the window slice.
    pub offset: usize,
}

impl Match {
    /// No usable match.
    pub const NONE: Match = Match { length: 0, offset: 0 };
}

/// Finds the longest match for `lookahead` inside `window`.
///
/// `window` is the slice of already-processed input ending right before
/// `lookahead` (at most `WINDOW_SIZE` bytes) and `position` is the absolute
/// input position of `lookahead[0]`. Implementations must keep the match
/// inside `window`: `offset + length <= window.len()`.
pub trait Matcher {
    fn find_match(&mut self, window: &[u8], lookahead: &[u8], position: usize) -> Match;
}

impl<M: Matcher + ?Sized> Matcher for &mut M {
    #[inline]
    fn find_match(&mut self, window: &[u8], lookahead: &[u8], position: usize) -> Match {
        (**self).find_match(window, lookahead, position)
    }
}

impl<M: Matcher + ?Sized> Matcher for Box<M> {
    #[inline]
    fn find_match(&mut self, window: &[u8], lookahead: &[u8], position: usize) -> Match {
        (**self).find_match(window, lookahead, position)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// MatcherKind
// ─────────────────────────────────────────────────────────────────────────────

/// Selects a match-finding strategy at encoder-construction time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatcherKind {
    /// Hashed two-candidate search: fast, lower ratio.
    Fast,
    /// Exhaustive window scan: slow, best ratio.
    #[default]
    Best,
}

impl MatcherKind {
    /// Build a fresh matcher instance of this kind.
    pub fn build(self) -> Box<dyn Matcher + Send> {
        match self {
            MatcherKind::Fast => Box::new(FastMatcher::new()),
            MatcherKind::Best => Box::new(BestMatcher),
        }
    }

    /// Lower-case name used on the command line and in diagnostics.
    pub fn name(self) -> &'static str {
        match self {
            MatcherKind::Fast => "fast",
            MatcherKind::Best => "best",
        }
    }
}

impl fmt::Display for MatcherKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unknown matcher name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownMatcher(pub String);

impl fmt::Display for UnknownMatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown matcher '{}' (expected 'fast' or 'best')", self.0)
    }
}

impl std::error::Error for UnknownMatcher {}

impl FromStr for MatcherKind {
    type Err = UnknownMatcher;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "fast" => Ok(MatcherKind::Fast),
            "best" => Ok(MatcherKind::Best),
            other => Err(UnknownMatcher(other.to_owned())),
        }
    }
}

/// Length of the common prefix of `a` and `b`, capped at `limit`.
#[inline(always)]
pub(crate) fn common_prefix(a: &[u8], b: &[u8], limit: usize) -> usize {
    a.iter()
        .zip(b)
        .take(limit)
        .take_while(|(x, y)| x == y)
        .count()
}
