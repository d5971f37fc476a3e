//! Command-line interface for the `tlz` binary.
//!
//! | Submodule     | Responsibility |
//! |---------------|---------------|
//! | [`constants`] | Program name and the shared `DISPLAY_LEVEL` atomic behind `displaylevel!`. |
//! | [`op_mode`]   | `OpMode`: compress or decompress. |
//! | [`args`]      | `ParsedArgs`: `clap` parser that also accepts single-dash long flags. |
//! | [`profile`]   | `Profile`: phase timings written by `-cpuprofile`. |
//! | [`dispatch`]  | `run` / `run_with`: read input, apply the codec, write output. |
//!
//! Typical call sequence: `parse_args` → `set_display_level` → `run`.

pub mod args;
pub mod constants;
pub mod dispatch;
pub mod op_mode;
pub mod profile;
