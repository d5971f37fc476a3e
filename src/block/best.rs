//! Exhaustive match finder: tries every window position whose first byte
//! agrees with the lookahead and keeps the longest (earliest on ties).

use super::matcher::{common_prefix, Match, Matcher};
use super::types::MAX_MATCH;

/// Stateless exhaustive matcher. `O(window × match length)` per position.
#[derive(Debug, Clone, Copy, Default)]
pub struct BestMatcher;

impl Matcher for BestMatcher {
    fn find_match(&mut self, window: &[u8], lookahead: &[u8], _position: usize) -> Match {
        let Some(&first) = lookahead.first() else {
            return Match::NONE;
        };

        let mut best = Match::NONE;
        for (i, _) in window.iter().enumerate().filter(|&(_, &b)| b == first) {
            let length = common_prefix(&window[i..], lookahead, MAX_MATCH);
            if length > best.length {
                best = Match { length, offset: i };
                if length == MAX_MATCH {
                    break;
                }
            }
        }
        best
    }
}
