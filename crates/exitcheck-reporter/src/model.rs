use camino::Utf8PathBuf;
use chrono::Utc;
use std::io;

use exitcheck_utils::timestamp::Clock;
use exitcheck_utils::types::ResultFormat;

/// Severity tag of a log line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// `[ERROR]`, written to the error stream
    Error,
    /// `[DEBUG]`, written to the output stream
    Debug,
}

impl Severity {
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Error => "[ERROR]",
            Self::Debug => "[DEBUG]",
        }
    }
}

/// Writes fixed-format log lines for log scrapers.
///
/// `out` receives `[DEBUG]` and `[RESULT]` lines, `err` receives `[ERROR]`
/// lines. [`Reporter::stdio`] binds the process streams; tests bind buffers.
pub struct Reporter<O = io::Stdout, E = io::Stderr> {
    pub(super) out: O,
    pub(super) err: E,
    pub(super) clock: Clock,
}

impl Reporter<io::Stdout, io::Stderr> {
    /// Reporter bound to the process stdout and stderr.
    #[must_use]
    pub fn stdio() -> Self {
        Self::new(io::stdout(), io::stderr())
    }
}

impl<O: io::Write, E: io::Write> Reporter<O, E> {
    #[must_use]
    pub fn new(out: O, err: E) -> Self {
        Self {
            out,
            err,
            clock: Utc::now,
        }
    }

    /// Test seam; not part of public API stability guarantees.
    ///
    /// Replace the clock used to stamp log lines.
    #[must_use]
    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    /// Give back the underlying streams.
    pub fn into_inner(self) -> (O, E) {
        (self.out, self.err)
    }
}

/// Persists validation result documents to one fixed path.
///
/// Every write replaces the whole file; there is no history.
#[derive(Debug, Clone)]
pub struct ResultWriter {
    pub(super) path: Utf8PathBuf,
    pub(super) format: ResultFormat,
    pub(super) clock: Clock,
}

impl ResultWriter {
    #[must_use]
    pub fn new(path: impl Into<Utf8PathBuf>) -> Self {
        Self {
            path: path.into(),
            format: ResultFormat::default(),
            clock: Utc::now,
        }
    }

    #[must_use]
    pub fn with_format(mut self, format: ResultFormat) -> Self {
        self.format = format;
        self
    }

    /// Test seam; not part of public API stability guarantees.
    #[must_use]
    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    #[must_use]
    pub fn path(&self) -> &Utf8PathBuf {
        &self.path
    }

    #[must_use]
    pub const fn format(&self) -> ResultFormat {
        self.format
    }
}
