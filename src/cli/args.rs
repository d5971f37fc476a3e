//! Command-line argument parsing for `tlz`.
//!
//! The entry points are [`parse_args`] (reads `std::env::args()`) and
//! [`parse_args_from`] (takes an explicit slice, suitable for unit-testing).
//! Both return a [`ParsedArgs`] value.
//!
//! Long options are accepted with one or two dashes (`-fast` and `--fast`
//! are the same flag). Single-dash spellings of known long options are
//! rewritten to the double-dash form before `clap` sees them, so short-flag
//! clusters such as `-dv` keep working.

use std::path::PathBuf;

use clap::{ArgAction, Parser};

use crate::block::MatcherKind;
use crate::cli::constants::COMPRESSOR_NAME;
use crate::cli::op_mode::OpMode;
use crate::config::{DEFAULT_MATCHER, DISPLAY_LEVEL_DEFAULT, DISPLAY_LEVEL_MAX};

/// Long option names that may be written with a single dash.
const LONG_OPTIONS: &[&str] = &[
    "decompress",
    "fast",
    "best",
    "cpuprofile",
    "verbose",
    "quiet",
    "help",
    "version",
];

/// Compress or decompress standard input to standard output.
#[derive(Parser, Debug)]
#[command(name = COMPRESSOR_NAME, version, about, long_about = None)]
struct Cli {
    /// Decompress instead of compress
    #[arg(short = 'd', long = "decompress")]
    decompress: bool,

    /// Use the hashed matcher (faster, larger output)
    #[arg(long, conflicts_with = "best")]
    fast: bool,

    /// Use the exhaustive matcher (slower, smaller output; default)
    #[arg(long)]
    best: bool,

    /// Write a timing profile of the run to PATH
    #[arg(long, value_name = "PATH")]
    cpuprofile: Option<PathBuf>,

    /// Print more diagnostics to stderr (repeatable)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Print fewer diagnostics to stderr (repeatable)
    #[arg(short, long, action = ArgAction::Count)]
    quiet: u8,
}

/// Options produced by the argument parser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedArgs {
    /// Compress or decompress.
    pub op_mode: OpMode,
    /// Match finder used when compressing.
    pub matcher: MatcherKind,
    /// Destination of the timing profile, if requested.
    pub cpu_profile: Option<PathBuf>,
    /// Display level after applying `-v` / `-q`.
    pub display_level: u32,
}

impl From<Cli> for ParsedArgs {
    fn from(cli: Cli) -> Self {
        let matcher = if cli.fast {
            MatcherKind::Fast
        } else if cli.best {
            MatcherKind::Best
        } else {
            DEFAULT_MATCHER
        };
        let display_level = (DISPLAY_LEVEL_DEFAULT + cli.verbose as u32)
            .saturating_sub(cli.quiet as u32)
            .min(DISPLAY_LEVEL_MAX);

        ParsedArgs {
            op_mode: OpMode::from_decompress_flag(cli.decompress),
            matcher,
            cpu_profile: cli.cpuprofile,
            display_level,
        }
    }
}

/// Rewrite `-name` / `-name=value` to `--name` / `--name=value` for every
/// known long option. Arguments after a bare `--` are left alone.
pub fn normalize_long_options(argv: &[String]) -> Vec<String> {
    let mut out = Vec::with_capacity(argv.len());
    let mut options_done = false;

    for arg in argv {
        if options_done {
            out.push(arg.clone());
            continue;
        }
        if arg == "--" {
            options_done = true;
            out.push(arg.clone());
            continue;
        }

        let rewritten = arg
            .strip_prefix('-')
            .filter(|rest| !rest.starts_with('-'))
            .filter(|rest| {
                let name = rest.split_once('=').map_or(*rest, |(name, _)| name);
                LONG_OPTIONS.contains(&name)
            })
            .map(|rest| format!("--{rest}"));
        out.push(rewritten.unwrap_or_else(|| arg.clone()));
    }

    out
}

/// Parse `std::env::args()`.
pub fn parse_args() -> Result<ParsedArgs, clap::Error> {
    let mut argv = std::env::args();
    let exe_name = argv.next().unwrap_or_else(|| COMPRESSOR_NAME.to_owned());
    let rest: Vec<String> = argv.collect();
    parse_args_from(&exe_name, &rest)
}

/// Parse an explicit argument list. `argv` excludes the program name.
///
/// Help and version requests come back as errors of kind
/// `DisplayHelp` / `DisplayVersion`; `clap::Error::exit` prints them and
/// exits with status 0.
pub fn parse_args_from(exe_name: &str, argv: &[String]) -> Result<ParsedArgs, clap::Error> {
    let normalized = normalize_long_options(argv);
    let cli = Cli::try_parse_from(std::iter::once(exe_name.to_owned()).chain(normalized))?;
    Ok(cli.into())
}
