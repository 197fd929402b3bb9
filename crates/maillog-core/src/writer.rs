//! Append-only log writer.
//!
//! [`LogWriter`] renders entries through a [`FormatSpec`] and appends them to
//! a single UTF-8 text file, optionally mirroring each line to a
//! [`ConsoleSink`]. Appends are serialised by an internal mutex so concurrent
//! callers never interleave partial lines.
//!
//! Failure policy: construction is the loud path — an unwritable location or
//! a bad format template surfaces as [`Error::Configuration`]. Once a writer
//! exists, appends are best-effort: a failed append is dropped and counted,
//! and the first failure is reported through the console mirror when one is
//! attached. Logging must never take the host process down with it.

use crate::error::Error;
use crate::types::{FormatSpec, LogLevel};
use chrono::Utc;
use std::fs::{self, File, OpenOptions};
use std::io::Write as _;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex, RwLock};

// ---------------------------------------------------------------------------
// Console sink
// ---------------------------------------------------------------------------

/// Best-effort console mirror for formatted log lines.
pub trait ConsoleSink: Send + Sync {
    fn emit(&self, line: &str);
}

/// Mirrors lines to the process stderr. Write errors are ignored.
pub struct StderrSink;

impl ConsoleSink for StderrSink {
    fn emit(&self, line: &str) {
        let mut err = std::io::stderr().lock();
        let _ = writeln!(err, "{line}");
    }
}

// ---------------------------------------------------------------------------
// LogWriter
// ---------------------------------------------------------------------------

/// Appends formatted entries to a single log file.
///
/// The writer owns the file handle for its lifetime; the exporter only ever
/// opens the same path for read.
pub struct LogWriter {
    path: PathBuf,
    spec: FormatSpec,
    console: Option<Box<dyn ConsoleSink>>,
    file: Mutex<File>,
    dropped: AtomicU64,
    failure_reported: AtomicBool,
}

impl LogWriter {
    /// Open (creating if needed) the log file at `path` in append mode.
    ///
    /// The parent directory is created when missing. An unwritable path or an
    /// invalid format template fails here; after this point appends never
    /// fail loudly.
    pub fn open(
        path: impl Into<PathBuf>,
        spec: FormatSpec,
        console: Option<Box<dyn ConsoleSink>>,
    ) -> Result<Self, Error> {
        spec.validate()?;
        let path = path.into();

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                Error::Configuration(format!("cannot create log directory {parent:?}: {e}"))
            })?;
        }
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|e| Error::Configuration(format!("cannot open log file {path:?}: {e}")))?;

        Ok(Self {
            path,
            spec,
            console,
            file: Mutex::new(file),
            dropped: AtomicU64::new(0),
            failure_reported: AtomicBool::new(false),
        })
    }

    /// Path of the log file this writer appends to.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Render and append one entry; mirror it to the console sink if one is
    /// attached. Never fails — see the module docs for the drop policy.
    pub fn write(&self, level: LogLevel, category: &str, message: &str) {
        let line = self.spec.render(Utc::now(), level, category, message);
        if let Some(console) = &self.console {
            console.emit(&line);
        }
        if let Err(err) = self.append(&line) {
            self.note_dropped(&err);
        }
    }

    /// Number of entries dropped because the underlying append failed.
    pub fn dropped(&self) -> u64 {
        self.dropped.load(Ordering::Relaxed)
    }

    /// The low-level append primitive. Line plus terminator go out in a
    /// single write under the mutex.
    fn append(&self, line: &str) -> std::io::Result<()> {
        let mut buf = String::with_capacity(line.len() + 1);
        buf.push_str(line);
        buf.push('\n');

        let mut file = self.file.lock().unwrap_or_else(|e| e.into_inner());
        file.write_all(buf.as_bytes())?;
        file.flush()
    }

    fn note_dropped(&self, err: &std::io::Error) {
        self.dropped.fetch_add(1, Ordering::Relaxed);
        if !self.failure_reported.swap(true, Ordering::Relaxed) {
            if let Some(console) = &self.console {
                console.emit(&format!("log append to {:?} failed: {err}", self.path));
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Process-wide default writer
// ---------------------------------------------------------------------------

static DEFAULT: RwLock<Option<Arc<LogWriter>>> = RwLock::new(None);

/// Install `writer` as the process-wide default, returning a handle to it.
///
/// Re-installation is a full reset: the previously installed writer and all
/// of its sinks are discarded before the new one is attached, never kept
/// alongside it.
pub fn install(writer: LogWriter) -> Arc<LogWriter> {
    let writer = Arc::new(writer);
    *DEFAULT.write().unwrap_or_else(|e| e.into_inner()) = Some(Arc::clone(&writer));
    writer
}

/// Remove the process-wide default writer. Subsequent [`write`] calls are
/// no-ops until [`install`] runs again.
pub fn teardown() {
    *DEFAULT.write().unwrap_or_else(|e| e.into_inner()) = None;
}

/// The currently installed process-wide writer, if any.
pub fn default_writer() -> Option<Arc<LogWriter>> {
    DEFAULT.read().unwrap_or_else(|e| e.into_inner()).clone()
}

/// Append to the process-wide writer. A no-op when none is installed.
pub fn write(level: LogLevel, category: &str, message: &str) {
    if let Some(writer) = default_writer() {
        writer.write(level, category, message);
    }
}
