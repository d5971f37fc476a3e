//! Block compression and decompression.
//!
//! A block is the whole compressed stream: a 4-byte length header followed
//! by control-byte groups of literal and match tokens. See [`types`] for the
//! exact layout.

pub mod best;
pub mod compress;
pub mod decompress_api;
pub mod decompress_core;
pub mod fast;
pub mod matcher;
pub mod stats;
pub mod tokens;
pub mod types;

// Re-export the most important public API items at the module level.
pub use best::BestMatcher;
pub use compress::{
    compress, compress_best, compress_bound, compress_fast, compress_into, compress_to_writer,
    compress_with,
};
pub use decompress_api::{decompress, decompress_into};
pub use decompress_core::DecompressError;
pub use fast::FastMatcher;
pub use matcher::{Match, Matcher, MatcherKind};
pub use stats::{stream_stats, StreamStats};
pub use types::{decompressed_length, MAX_INPUT_SIZE, MAX_MATCH, MIN_MATCH, WINDOW_SIZE};
