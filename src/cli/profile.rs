//! Run-time profile for `-cpuprofile`.
//!
//! On unix the run is sampled with [`pprof`] at [`SAMPLE_FREQUENCY`] Hz and
//! the file receives a protobuf profile readable by `go tool pprof` and
//! other pprof viewers. Elsewhere the file receives the phase report below.
//!
//! Each phase (read, compress/decompress, write) is also timed on the
//! monotonic clock; [`Profile::report`] renders those timings as text:
//!
//! ```text
//! # tlz profile: compress, matcher best
//! phase        nanoseconds        bytes     MB/s
//! read              18230         4096   224.69
//! compress        5211400         4096     0.79
//! write              9120          734    80.48
//! total           5238750
//! ```
//!
//! The output file is created before sampling starts, so an unwritable path
//! fails before any work is done. The sampler is process-wide: only one
//! enabled profile may exist at a time.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use anyhow::Context;

/// Samples per second taken by the CPU profiler.
pub const SAMPLE_FREQUENCY: i32 = 1000;

/// One timed phase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Phase {
    pub name: &'static str,
    pub elapsed: Duration,
    pub bytes: usize,
}

impl Phase {
    /// Throughput in MB/s (10^6 bytes per second); `0.0` for an instant phase.
    pub fn mb_per_sec(&self) -> f64 {
        let secs = self.elapsed.as_secs_f64();
        if secs == 0.0 {
            0.0
        } else {
            self.bytes as f64 / secs / 1_000_000.0
        }
    }
}

/// Phase timer with an optional CPU profile destination.
pub struct Profile {
    sink: Option<(PathBuf, File)>,
    #[cfg(unix)]
    sampler: Option<pprof::ProfilerGuard<'static>>,
    title: String,
    started: Instant,
    phases: Vec<Phase>,
}

impl Profile {
    /// Time phases without writing a report.
    pub fn disabled() -> Self {
        Self {
            sink: None,
            #[cfg(unix)]
            sampler: None,
            title: String::new(),
            started: Instant::now(),
            phases: Vec::new(),
        }
    }

    /// Start profiling; the profile is written to `path` on [`finish`](Self::finish).
    pub fn create(path: &Path) -> anyhow::Result<Self> {
        let file = File::create(path)
            .with_context(|| format!("cannot create profile file {}", path.display()))?;
        Ok(Self {
            sink: Some((path.to_owned(), file)),
            #[cfg(unix)]
            sampler: Some(
                pprof::ProfilerGuard::new(SAMPLE_FREQUENCY)
                    .map_err(|e| anyhow::anyhow!("cannot start the CPU profiler: {e}"))?,
            ),
            ..Self::disabled()
        })
    }

    /// Whether a report will be written.
    pub fn is_enabled(&self) -> bool {
        self.sink.is_some()
    }

    /// First line of the report.
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    /// Run `f` and record it as phase `name`; `bytes` is derived from its result.
    pub fn time<T>(&mut self, name: &'static str, f: impl FnOnce() -> T, bytes: impl FnOnce(&T) -> usize) -> T {
        let start = Instant::now();
        let value = f();
        let elapsed = start.elapsed();
        self.phases.push(Phase {
            name,
            elapsed,
            bytes: bytes(&value),
        });
        value
    }

    pub fn phases(&self) -> &[Phase] {
        &self.phases
    }

    /// Render the report.
    pub fn report(&self) -> String {
        let mut s = String::new();
        if !self.title.is_empty() {
            s.push_str(&format!("# {}\n", self.title));
        }
        s.push_str(&format!("{:<10} {:>14} {:>12} {:>10}\n", "phase", "nanoseconds", "bytes", "MB/s"));
        for p in &self.phases {
            s.push_str(&format!(
                "{:<10} {:>14} {:>12} {:>10.2}\n",
                p.name,
                p.elapsed.as_nanos(),
                p.bytes,
                p.mb_per_sec()
            ));
        }
        s.push_str(&format!("{:<10} {:>14}\n", "total", self.started.elapsed().as_nanos()));
        s
    }

    /// Stop sampling and write the profile if a destination was given.
    pub fn finish(self) -> anyhow::Result<()> {
        let bytes = self.encode()?;
        if let Some((path, file)) = self.sink {
            let mut w = BufWriter::new(file);
            w.write_all(&bytes)
                .and_then(|()| w.flush())
                .with_context(|| format!("cannot write profile file {}", path.display()))?;
        }
        Ok(())
    }

    #[cfg(unix)]
    fn encode(&self) -> anyhow::Result<Vec<u8>> {
        use pprof::protos::Message;

        let Some(sampler) = &self.sampler else {
            return Ok(self.report().into_bytes());
        };
        let profile = sampler
            .report()
            .build()
            .and_then(|report| report.pprof())
            .context("cannot build the CPU profile")?;
        let mut buf = Vec::new();
        profile.encode(&mut buf).context("cannot encode the CPU profile")?;
        Ok(buf)
    }

    #[cfg(not(unix))]
    fn encode(&self) -> anyhow::Result<Vec<u8>> {
        Ok(self.report().into_bytes())
    }
}
