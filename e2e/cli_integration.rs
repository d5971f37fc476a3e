// e2e/cli_integration.rs: CLI integration tests
//
// Tests the `tlz` binary as a black-box filter using std::process::Command:
// stdin → stdout compression and decompression, flag handling, exit codes,
// and the -cpuprofile output.

use std::fs;
use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Output, Stdio};

use tempfile::TempDir;

/// Locate the `tlz` binary produced by Cargo.
fn tlz_bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_tlz"))
}

/// Run `tlz` with `args`, feeding `stdin` and collecting all output.
fn run(args: &[&str], stdin: &[u8]) -> Output {
    let mut child = Command::new(tlz_bin())
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to spawn tlz");
    {
        let mut pipe = child.stdin.take().unwrap();
        // The child may exit before reading (usage errors); ignore EPIPE.
        let _ = pipe.write_all(stdin);
    }
    child.wait_with_output().expect("failed to wait for tlz")
}

fn sample() -> Vec<u8> {
    "Hello, tinylz!\n".repeat(300).into_bytes()
}

// ── 1. Round trip through pipes ──────────────────────────────────────────────

#[test]
fn test_cli_compress_decompress_roundtrip() {
    let original = sample();

    let packed = run(&[], &original);
    assert!(packed.status.success(), "compress should exit 0");
    assert!(packed.stdout.len() < original.len());
    assert_eq!(packed.stdout, tinylz::compress_best(&original));

    let unpacked = run(&["-d"], &packed.stdout);
    assert!(unpacked.status.success(), "decompress should exit 0");
    assert_eq!(unpacked.stdout, original);
}

#[test]
fn test_cli_fast_flag_selects_fast_matcher() {
    let original = sample();
    let out = run(&["-fast"], &original);
    assert!(out.status.success());
    assert_eq!(out.stdout, tinylz::compress_fast(&original));

    let out = run(&["--fast"], &original);
    assert_eq!(out.stdout, tinylz::compress_fast(&original));
}

#[test]
fn test_cli_binary_roundtrip() {
    let original: Vec<u8> = (0..50_000u32).map(|i| (i ^ (i >> 7)) as u8).collect();
    let packed = run(&["-fast"], &original);
    let unpacked = run(&["-d"], &packed.stdout);
    assert_eq!(unpacked.stdout, original);
}

#[test]
fn test_cli_empty_input() {
    let packed = run(&[], b"");
    assert!(packed.status.success());
    assert!(packed.stdout.is_empty());

    let unpacked = run(&["-d"], b"");
    assert!(unpacked.status.success());
    assert!(unpacked.stdout.is_empty());
}

// ── 2. Flag errors ───────────────────────────────────────────────────────────

#[test]
fn test_cli_fast_and_best_conflict() {
    let out = run(&["-fast", "-best"], b"data");
    assert!(!out.status.success());
    assert!(out.stdout.is_empty());
    assert!(!out.stderr.is_empty());
}

#[test]
fn test_cli_unknown_flag() {
    let out = run(&["-turbo"], b"data");
    assert!(!out.status.success());
}

// ── 3. Corrupt input ─────────────────────────────────────────────────────────

#[test]
fn test_cli_corrupt_input_exits_nonzero() {
    let mut packed = run(&[], &sample()).stdout;
    packed.truncate(packed.len() - 5);

    let out = run(&["-d"], &packed);
    assert_eq!(out.status.code(), Some(1));
    assert!(out.stdout.is_empty(), "no partial output on corruption");
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("corrupt stream"), "stderr: {stderr}");
}

#[test]
fn test_cli_quiet_suppresses_error_text() {
    let out = run(&["-d", "-qq"], &[7, 0, 0]);
    assert_eq!(out.status.code(), Some(1));
    assert!(out.stderr.is_empty());
}

// ── 4. --help / --version ────────────────────────────────────────────────────

#[test]
fn test_cli_version() {
    let out = run(&["-version"], b"");
    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains(env!("CARGO_PKG_VERSION")), "version output: {stdout}");
}

#[test]
fn test_cli_help() {
    let out = run(&["-h"], b"");
    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    for flag in ["--decompress", "--fast", "--best", "--cpuprofile"] {
        assert!(stdout.contains(flag), "help should mention {flag}");
    }
}

// ── 5. -cpuprofile ───────────────────────────────────────────────────────────

#[test]
fn test_cli_cpuprofile_writes_report() {
    let dir = TempDir::new().unwrap();
    let prof = dir.path().join("cpu.prof");

    let out = run(&["-cpuprofile", prof.to_str().unwrap()], &sample());
    assert!(out.status.success());
    assert_eq!(out.stdout, tinylz::compress_best(&sample()));

    let written = fs::read(&prof).unwrap();
    assert!(!written.is_empty());
    if cfg!(not(unix)) {
        let report = String::from_utf8_lossy(&written);
        assert!(report.starts_with("# tlz profile: compress, matcher best"));
    }
}

#[cfg(unix)]
#[test]
fn test_cli_cpuprofile_is_a_pprof_profile() {
    use pprof::protos::Message;

    let dir = TempDir::new().unwrap();
    let prof = dir.path().join("cpu.prof");
    let input = sample().repeat(8);

    let out = run(&["-cpuprofile", prof.to_str().unwrap(), "-fast"], &input);
    assert!(out.status.success());
    assert_eq!(out.stdout, tinylz::compress_fast(&input));

    let profile = pprof::protos::Profile::decode(fs::read(&prof).unwrap().as_slice()).unwrap();
    assert!(!profile.sample_type.is_empty());
}

#[test]
fn test_cli_cpuprofile_bad_path_fails_before_output() {
    let dir = TempDir::new().unwrap();
    let prof = dir.path().join("no-such-dir").join("cpu.prof");

    let out = run(&["-cpuprofile", prof.to_str().unwrap()], &sample());
    assert_eq!(out.status.code(), Some(1));
    assert!(out.stdout.is_empty());
    assert!(String::from_utf8_lossy(&out.stderr).contains("cannot create profile file"));
}

// ── 6. Verbose diagnostics stay on stderr ────────────────────────────────────

#[test]
fn test_cli_verbose_keeps_stdout_clean() {
    let original = sample();
    let out = run(&["-vv", "-fast"], &original);
    assert!(out.status.success());
    assert_eq!(out.stdout, tinylz::compress_fast(&original));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("compressed"), "stderr: {stderr}");
    assert!(stderr.contains("matches"), "stderr: {stderr}");
}
