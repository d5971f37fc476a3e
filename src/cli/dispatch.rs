//! Execute one `tlz` run: read all of the input, compress or decompress it,
//! write the result.
//!
//! [`run`] binds the process's stdin/stdout; [`run_with`] takes arbitrary
//! streams so the whole pipeline can be exercised in tests.

use std::io::{self, BufWriter, Read, Write};

use anyhow::{bail, Context};

use crate::block::{compress_with, decompress, stream_stats, MAX_INPUT_SIZE};
use crate::cli::args::ParsedArgs;
use crate::cli::constants::display_level;
use crate::cli::op_mode::OpMode;
use crate::cli::profile::Profile;
use crate::config::OUTPUT_BUFFER_SIZE;
use crate::displaylevel;

/// Run against the process's standard streams.
pub fn run(args: &ParsedArgs) -> anyhow::Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_with(args, &mut stdin.lock(), &mut stdout.lock())
}

/// Run against the given streams.
///
/// Nothing is written to `output` when decompression fails.
pub fn run_with<R, W>(args: &ParsedArgs, input: &mut R, output: &mut W) -> anyhow::Result<()>
where
    R: Read + ?Sized,
    W: Write + ?Sized,
{
    let mut profile = match &args.cpu_profile {
        Some(path) => Profile::create(path)?,
        None => Profile::disabled(),
    };
    profile.set_title(format!(
        "tlz profile: {}, matcher {}",
        args.op_mode.label(),
        args.matcher
    ));

    let mut buf = Vec::new();
    profile
        .time("read", || input.read_to_end(&mut buf), |r| *r.as_ref().unwrap_or(&0))
        .context("error during read")?;

    let result = match args.op_mode {
        OpMode::Compress => {
            if buf.len() > MAX_INPUT_SIZE {
                bail!(
                    "input of {} bytes exceeds the {} byte limit of the format",
                    buf.len(),
                    MAX_INPUT_SIZE
                );
            }
            let mut matcher = args.matcher.build();
            let stream = profile.time("compress", || compress_with(&buf, &mut matcher), |_| buf.len());
            report_compression(args, buf.len(), &stream);
            stream
        }
        OpMode::Decompress => {
            let decoded = profile
                .time("decompress", || decompress(&buf), |r| r.as_ref().map_or(0, Vec::len))
                .context("error during decompression")?;
            displaylevel!(3, "decoded {} bytes into {} bytes\n", buf.len(), decoded.len());
            decoded
        }
    };

    profile
        .time("write", || write_all_buffered(output, &result), |_| result.len())
        .context("error during write")?;

    displaylevel!(4, "{}", profile.report());
    profile.finish()
}

fn write_all_buffered<W: Write + ?Sized>(output: &mut W, data: &[u8]) -> io::Result<()> {
    let mut w = BufWriter::with_capacity(OUTPUT_BUFFER_SIZE, output);
    w.write_all(data)?;
    w.flush()
}

/// Summary at level 3, token census at level 4.
fn report_compression(args: &ParsedArgs, input_len: usize, stream: &[u8]) {
    displaylevel!(
        3,
        "compressed {} bytes into {} bytes ({:.2}%) with the {} matcher\n",
        input_len,
        stream.len(),
        if input_len == 0 {
            0.0
        } else {
            stream.len() as f64 * 100.0 / input_len as f64
        },
        args.matcher
    );

    if display_level() >= 4 {
        match stream_stats(stream) {
            Ok(s) => displaylevel!(
                4,
                "{} groups, {} literals, {} matches ({} bytes, longest {}, shortest {})\n",
                s.groups,
                s.literals,
                s.matches,
                s.matched_bytes,
                s.longest_match,
                s.shortest_match
            ),
            Err(e) => displaylevel!(1, "warning: produced stream does not validate: {}\n", e),
        }
    }
}
