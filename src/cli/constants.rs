// cli/constants.rs: Program identity and display infrastructure for `tlz`.

use std::sync::atomic::{AtomicU32, Ordering};

use crate::config::{DISPLAY_LEVEL_DEFAULT, DISPLAY_LEVEL_MAX};

// ── Identity ──────────────────────────────────────────────────────────────────
pub const COMPRESSOR_NAME: &str = "tlz";

// ── Display level global ──────────────────────────────────────────────────────
//
// 0 = no output; 1 = errors only; 2 = normal; 3 = per-run summary; 4 = verbose
pub static DISPLAY_LEVEL: AtomicU32 = AtomicU32::new(DISPLAY_LEVEL_DEFAULT);

/// Returns the current display level.
#[inline]
pub fn display_level() -> u32 {
    DISPLAY_LEVEL.load(Ordering::Relaxed)
}

/// Sets the display level, clamped to `DISPLAY_LEVEL_MAX`.
#[inline]
pub fn set_display_level(level: u32) {
    DISPLAY_LEVEL.store(level.min(DISPLAY_LEVEL_MAX), Ordering::Relaxed);
}

// ── Display helpers ───────────────────────────────────────────────────────────
//
// Diagnostics go to stderr; stdout carries the compressed or decompressed
// bytes and must stay clean.

/// Print to stderr unconditionally.
#[macro_export]
macro_rules! display {
    ($($arg:tt)*) => { eprint!($($arg)*) };
}

/// Print to stderr when the display level is at least `level`.
#[macro_export]
macro_rules! displaylevel {
    ($level:expr, $($arg:tt)*) => {
        if $crate::cli::constants::display_level() >= $level {
            eprint!($($arg)*);
        }
    };
}
