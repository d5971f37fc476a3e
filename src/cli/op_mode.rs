//! Operation mode selected on the command line.

/// What the CLI should do with standard input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OpMode {
    /// Compress stdin to stdout (default).
    #[default]
    Compress,
    /// Decompress stdin to stdout (`-d`).
    Decompress,
}

impl OpMode {
    /// Pick the mode from the `-d` flag.
    pub fn from_decompress_flag(decompress: bool) -> Self {
        if decompress {
            OpMode::Decompress
        } else {
            OpMode::Compress
        }
    }

    /// Name used in diagnostics and in the timing profile.
    pub fn label(self) -> &'static str {
        match self {
            OpMode::Compress => "compress",
            OpMode::Decompress => "decompress",
        }
    }
}
