//! Export pipeline — package the accumulated log for transmission.
//!
//! [`Exporter::export`] reads the whole log file, applies the grouping
//! transform from [`group`](crate::group), prepends caller-supplied metadata,
//! and gzips the result into `<export_dir>/<name>.gz`. The artifact is
//! written under a temporary name and renamed into place, so a failed export
//! leaves nothing behind for the sharing layer to pick up.
//!
//! Export blocks for the duration of the read and compression. Hosts with a
//! latency-critical thread register it via [`Exporter::deny_thread`]; calling
//! [`Exporter::export`] from that thread fails fast before any side effects.
//! Async hosts use [`Exporter::export_in_background`] instead.

use crate::error::Error;
use crate::group;
use flate2::write::GzEncoder;
use flate2::Compression;
use std::fs::{self, File};
use std::io::{BufWriter, Write as _};
use std::path::{Path, PathBuf};
use std::thread::{self, ThreadId};

/// Produces compressed, grouped export artifacts from a log file.
#[derive(Debug, Clone)]
pub struct Exporter {
    export_dir: PathBuf,
    denied_thread: Option<ThreadId>,
}

impl Exporter {
    /// Build an exporter that writes artifacts into `export_dir`. The
    /// directory is created on first export.
    pub fn new(export_dir: impl Into<PathBuf>) -> Self {
        Self {
            export_dir: export_dir.into(),
            denied_thread: None,
        }
    }

    /// Register a latency-critical thread, typically the host UI thread.
    ///
    /// [`Exporter::export`] called from it returns
    /// [`Error::ThreadingViolation`] before touching the filesystem. Hosts
    /// without such a context simply never register one.
    pub fn deny_thread(mut self, thread: ThreadId) -> Self {
        self.denied_thread = Some(thread);
        self
    }

    /// Export the log at `source` as `<export_dir>/<name>.gz`, returning the
    /// absolute path of the artifact.
    ///
    /// `metadata`, when given, is prepended verbatim ahead of the grouped log
    /// content — it is not itself grouped. An existing artifact with the same
    /// name is replaced.
    pub fn export(
        &self,
        source: &Path,
        metadata: Option<&str>,
        name: &str,
    ) -> Result<PathBuf, Error> {
        if self.denied_thread == Some(thread::current().id()) {
            return Err(Error::ThreadingViolation(thread::current().id()));
        }

        let raw = fs::read_to_string(source).map_err(|e| Error::io("read log", source, e))?;
        let grouped = group::group(raw.lines());

        fs::create_dir_all(&self.export_dir)
            .map_err(|e| Error::io("create export directory", &self.export_dir, e))?;

        let dest = self.export_dir.join(format!("{name}.gz"));
        let tmp = self.export_dir.join(format!(".{name}.gz.tmp"));

        if let Err(e) = write_artifact(&tmp, metadata, &grouped) {
            let _ = fs::remove_file(&tmp);
            return Err(Error::io("write artifact", &tmp, e));
        }
        if let Err(e) = fs::rename(&tmp, &dest) {
            let _ = fs::remove_file(&tmp);
            return Err(Error::io("finalize artifact", &dest, e));
        }

        fs::canonicalize(&dest).map_err(|e| Error::io("resolve artifact path", &dest, e))
    }

    /// Run [`Exporter::export`] on the async runtime's blocking pool.
    ///
    /// This is an addition to the blocking contract for hosts with an async
    /// UI: the registered thread guard never trips on a pool thread, making
    /// this the sanctioned route off the latency-critical context.
    pub async fn export_in_background(
        &self,
        source: impl Into<PathBuf>,
        metadata: Option<String>,
        name: impl Into<String>,
    ) -> Result<PathBuf, Error> {
        let exporter = self.clone();
        let source = source.into();
        let name = name.into();

        tokio::task::spawn_blocking(move || exporter.export(&source, metadata.as_deref(), &name))
            .await
            .map_err(|e| {
                Error::io(
                    "join export task",
                    &self.export_dir,
                    std::io::Error::new(std::io::ErrorKind::Other, e),
                )
            })?
    }
}

fn write_artifact(tmp: &Path, metadata: Option<&str>, grouped: &str) -> std::io::Result<()> {
    let file = File::create(tmp)?;
    let mut encoder = GzEncoder::new(BufWriter::new(file), Compression::default());

    if let Some(metadata) = metadata {
        encoder.write_all(metadata.as_bytes())?;
    }
    encoder.write_all(grouped.as_bytes())?;

    let mut out = encoder.finish()?;
    out.flush()
}
