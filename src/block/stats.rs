//! Token census of a compressed stream.
//!
//! Walks the stream with the same validation as the decoder (a stream that
//! fails to decompress fails here too) and counts what it sees.

use super::decompress_core::{copy_match, DecompressError};
use super::tokens::{Token, TokenReader};
use super::types::{decompressed_length, HEADER_SIZE};

/// Summary of one compressed stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StreamStats {
    /// Length recorded in the header.
    pub decompressed_len: usize,
    /// Total stream length, header included.
    pub compressed_len: usize,
    /// Bytes of the stream consumed by the decoder, header included.
    pub consumed_len: usize,
    pub groups: usize,
    pub literals: usize,
    pub matches: usize,
    /// Sum of all match lengths.
    pub matched_bytes: usize,
    pub longest_match: usize,
    pub shortest_match: usize,
    pub largest_offset: usize,
}

impl StreamStats {
    /// Compressed size as a fraction of the original (`0.0` for empty data).
    pub fn ratio(&self) -> f64 {
        if self.decompressed_len == 0 {
            0.0
        } else {
            self.compressed_len as f64 / self.decompressed_len as f64
        }
    }
}

/// Validate `src` and count its tokens.
pub fn stream_stats(src: &[u8]) -> Result<StreamStats, DecompressError> {
    let target = decompressed_length(src)? as usize;
    let mut stats = StreamStats {
        decompressed_len: target,
        compressed_len: src.len(),
        ..StreamStats::default()
    };
    if target == 0 {
        return Ok(stats);
    }

    let mut out = Vec::new();
    let mut reader = TokenReader::new(&src[HEADER_SIZE..]);

    while out.len() < target {
        match reader.next_token()? {
            Some(Token::Literal(byte)) => {
                out.push(byte);
                stats.literals += 1;
            }
            Some(Token::Match { length, offset }) => {
                copy_match(&mut out, offset, length, target)?;
                stats.shortest_match = if stats.matches == 0 {
                    length
                } else {
                    stats.shortest_match.min(length)
                };
                stats.matches += 1;
                stats.matched_bytes += length;
                stats.longest_match = stats.longest_match.max(length);
                stats.largest_offset = stats.largest_offset.max(offset);
            }
            None => return Err(DecompressError::CorruptStream),
        }
    }

    stats.groups = reader.groups_read();
    stats.consumed_len = HEADER_SIZE + reader.position();
    Ok(stats)
}
