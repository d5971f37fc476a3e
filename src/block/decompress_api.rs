//! Public block decompression API.
//!
//!   - [`decompress`]     : decode into a new `Vec<u8>`
//!   - [`decompress_into`]: decode into a caller-owned buffer, reusing its allocation
//!
//! Both parse the 4-byte header, then hand the group section to
//! [`decompress_generic`].

use super::decompress_core::{decompress_generic, DecompressError};
use super::types::{decompressed_length, HEADER_SIZE};

/// Decompress a complete stream.
///
/// An empty stream decodes to empty output. Any structural problem yields
/// [`DecompressError::CorruptStream`]; nothing partial is returned.
pub fn decompress(src: &[u8]) -> Result<Vec<u8>, DecompressError> {
    let mut out = Vec::new();
    decompress_into(src, &mut out)?;
    Ok(out)
}

/// Decompress a complete stream into `dst`.
///
/// `dst` is cleared first; its capacity is reused. On error `dst` is left
/// empty.
pub fn decompress_into(src: &[u8], dst: &mut Vec<u8>) -> Result<(), DecompressError> {
    dst.clear();
    let target = decompressed_length(src)? as usize;
    if target == 0 {
        return Ok(());
    }

    let result = decompress_generic(&src[HEADER_SIZE..], target, dst);
    if result.is_err() {
        dst.clear();
    }
    result
}
