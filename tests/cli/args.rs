// Argument parsing for the tlz binary
//
//   - single-dash long flags (-fast, -best, -cpuprofile)
//   - GNU-style double-dash spellings of the same flags
//   - -fast and -best are mutually exclusive
//   - -v / -q move the display level
//   - help, version and unknown flags come back as clap errors

use std::path::PathBuf;

use clap::error::ErrorKind;
use tinylz::cli::args::{parse_args_from, ParsedArgs};
use tinylz::cli::op_mode::OpMode;
use tinylz::MatcherKind;

// ─────────────────────────────────────────────────────────────────────────────
// Helpers
// ─────────────────────────────────────────────────────────────────────────────

fn parse(argv: &[&str]) -> ParsedArgs {
    let argv: Vec<String> = argv.iter().map(|s| s.to_string()).collect();
    parse_args_from("tlz", &argv).expect("parse should succeed")
}

fn parse_err(argv: &[&str]) -> ErrorKind {
    let argv: Vec<String> = argv.iter().map(|s| s.to_string()).collect();
    parse_args_from("tlz", &argv).expect_err("expected parse error").kind()
}

// ─────────────────────────────────────────────────────────────────────────────
// Defaults
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn no_args_compresses_with_best_matcher() {
    let p = parse(&[]);
    assert_eq!(p.op_mode, OpMode::Compress);
    assert_eq!(p.matcher, MatcherKind::Best);
    assert_eq!(p.cpu_profile, None);
    assert_eq!(p.display_level, 2);
}

// ─────────────────────────────────────────────────────────────────────────────
// Mode and matcher
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn d_selects_decompress() {
    assert_eq!(parse(&["-d"]).op_mode, OpMode::Decompress);
    assert_eq!(parse(&["--decompress"]).op_mode, OpMode::Decompress);
    assert_eq!(parse(&["-decompress"]).op_mode, OpMode::Decompress);
}

#[test]
fn single_dash_fast_and_best() {
    assert_eq!(parse(&["-fast"]).matcher, MatcherKind::Fast);
    assert_eq!(parse(&["-best"]).matcher, MatcherKind::Best);
}

#[test]
fn double_dash_fast_and_best() {
    assert_eq!(parse(&["--fast"]).matcher, MatcherKind::Fast);
    assert_eq!(parse(&["--best"]).matcher, MatcherKind::Best);
}

#[test]
fn fast_with_decompress_is_accepted() {
    let p = parse(&["-d", "-fast"]);
    assert_eq!(p.op_mode, OpMode::Decompress);
    assert_eq!(p.matcher, MatcherKind::Fast);
}

#[test]
fn fast_and_best_conflict() {
    assert_eq!(parse_err(&["-fast", "-best"]), ErrorKind::ArgumentConflict);
    assert_eq!(parse_err(&["--best", "--fast"]), ErrorKind::ArgumentConflict);
}

// ─────────────────────────────────────────────────────────────────────────────
// Profile destination
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn cpuprofile_takes_a_path() {
    assert_eq!(parse(&["-cpuprofile", "run.prof"]).cpu_profile, Some(PathBuf::from("run.prof")));
    assert_eq!(parse(&["-cpuprofile=a/b.prof"]).cpu_profile, Some(PathBuf::from("a/b.prof")));
    assert_eq!(parse(&["--cpuprofile", "x"]).cpu_profile, Some(PathBuf::from("x")));
}

#[test]
fn cpuprofile_without_value_is_an_error() {
    assert_eq!(parse_err(&["-cpuprofile"]), ErrorKind::InvalidValue);
}

// ─────────────────────────────────────────────────────────────────────────────
// Display level
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn verbose_and_quiet_adjust_level() {
    assert_eq!(parse(&["-v"]).display_level, 3);
    assert_eq!(parse(&["-vv"]).display_level, 4);
    assert_eq!(parse(&["-vvvvvv"]).display_level, 4);
    assert_eq!(parse(&["-q"]).display_level, 1);
    assert_eq!(parse(&["-qqqq"]).display_level, 0);
    assert_eq!(parse(&["-v", "-q"]).display_level, 2);
}

#[test]
fn short_flags_cluster() {
    let p = parse(&["-dv"]);
    assert_eq!(p.op_mode, OpMode::Decompress);
    assert_eq!(p.display_level, 3);
}

// ─────────────────────────────────────────────────────────────────────────────
// Errors and informational flags
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn unknown_flag_is_rejected() {
    assert_eq!(parse_err(&["-medium"]), ErrorKind::UnknownArgument);
    assert_eq!(parse_err(&["--level=9"]), ErrorKind::UnknownArgument);
}

#[test]
fn positional_arguments_are_rejected() {
    assert_eq!(parse_err(&["input.txt"]), ErrorKind::UnknownArgument);
}

#[test]
fn help_and_version_are_reported_as_display_errors() {
    assert_eq!(parse_err(&["-h"]), ErrorKind::DisplayHelp);
    assert_eq!(parse_err(&["-help"]), ErrorKind::DisplayHelp);
    assert_eq!(parse_err(&["-V"]), ErrorKind::DisplayVersion);
    assert_eq!(parse_err(&["-version"]), ErrorKind::DisplayVersion);
}
