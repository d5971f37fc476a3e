// config.rs: Compile-time configuration constants.
//
// The codec has no tunables beyond the matcher choice; the window size and
// match limits are part of the stream format and live in block::types.

use crate::block::MatcherKind;

// Matcher used when neither -fast nor -best is given.
pub const DEFAULT_MATCHER: MatcherKind = MatcherKind::Best;

// Initial display level: 0 = silent, 1 = errors, 2 = normal,
// 3 = per-run summary, 4 = verbose.
pub const DISPLAY_LEVEL_DEFAULT: u32 = 2;

// Highest display level that produces additional output.
pub const DISPLAY_LEVEL_MAX: u32 = 4;

// Size of the stdout buffer used by the CLI.
pub const OUTPUT_BUFFER_SIZE: usize = 64 * 1024;

pub use crate::block::types::{MAX_INPUT_SIZE, MAX_MATCH, MIN_MATCH, WINDOW_SIZE};
