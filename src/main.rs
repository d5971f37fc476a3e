//! Binary entry point for the `tlz` command-line tool.
//!
//! Reads all of standard input, compresses it (or decompresses it with
//! `-d`) and writes the result to standard output.
//!
//! # Control flow
//!
//! 1. [`parse_args`] processes the flags; usage errors, `--help` and
//!    `--version` are reported by `clap`, which exits the process.
//! 2. The display level is applied.
//! 3. [`run`] performs the operation. Any error is printed as
//!    `tlz: <cause chain>` and the process exits with status 1.

use tinylz::cli::args::parse_args;
use tinylz::cli::constants::{set_display_level, COMPRESSOR_NAME};
use tinylz::cli::dispatch::run;

fn main() {
    let args = parse_args().unwrap_or_else(|e| e.exit());
    set_display_level(args.display_level);

    tinylz::displaylevel!(
        4,
        "*** {} v{}, {} matcher ***\n",
        COMPRESSOR_NAME,
        tinylz::version_string(),
        args.matcher
    );

    if let Err(e) = run(&args) {
        tinylz::displaylevel!(1, "{}: {:#}\n", COMPRESSOR_NAME, e);
        std::process::exit(1);
    }
}
