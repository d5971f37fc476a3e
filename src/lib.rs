// tinylz: tiny LZ77-style byte compressor

pub mod block;
pub mod cli;
pub mod config;

// ── Version constants ─────────────────────────────────────────────────────────
pub const TINYLZ_VERSION_STRING: &str = env!("CARGO_PKG_VERSION");

/// Returns the library version string.
pub fn version_string() -> &'static str {
    TINYLZ_VERSION_STRING
}

// ── Top-level re-exports ──────────────────────────────────────────────────────
pub use block::{
    compress, compress_best, compress_bound, compress_fast, compress_into, compress_to_writer,
    compress_with, decompress, decompress_into, decompressed_length, stream_stats, BestMatcher,
    DecompressError, FastMatcher, Match, Matcher, MatcherKind, StreamStats, MAX_INPUT_SIZE,
    MAX_MATCH, MIN_MATCH, WINDOW_SIZE,
};
