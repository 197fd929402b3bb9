//! Temp-dir sandboxes and gzip helpers used across harnesses.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// A temporary directory holding a log file location and an export
/// directory, torn down on drop.
pub struct Sandbox {
    pub dir: tempfile::TempDir,
}

impl Sandbox {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("create tempdir"),
        }
    }

    pub fn log_path(&self) -> PathBuf {
        self.dir.path().join("maillog.log")
    }

    pub fn export_dir(&self) -> PathBuf {
        self.dir.path().join("exports")
    }

    /// Write raw lines directly to the log file, each newline-terminated,
    /// bypassing the writer.
    pub fn seed_log(&self, lines: &[&str]) -> PathBuf {
        let path = self.log_path();
        let mut content = lines.join("\n");
        if !lines.is_empty() {
            content.push('\n');
        }
        std::fs::write(&path, content).expect("seed log file");
        path
    }
}

/// Decompress a `.gz` artifact to a UTF-8 string.
pub fn read_gz(path: &Path) -> String {
    use std::io::Read as _;

    let file = std::fs::File::open(path).expect("open artifact");
    let mut decoder = flate2::read::GzDecoder::new(file);
    let mut out = String::new();
    decoder.read_to_string(&mut out).expect("decompress artifact");
    out
}

/// Read the log file back as a vector of lines.
pub fn read_lines(path: &Path) -> Vec<String> {
    std::fs::read_to_string(path)
        .expect("read log")
        .lines()
        .map(str::to_string)
        .collect()
}

/// A console sink that records every emitted line for assertions.
#[derive(Default, Clone)]
pub struct RecordingSink(Arc<Mutex<Vec<String>>>);

impl maillog_core::writer::ConsoleSink for RecordingSink {
    fn emit(&self, line: &str) {
        self.0.lock().expect("sink lock").push(line.to_string());
    }
}

impl RecordingSink {
    pub fn lines(&self) -> Vec<String> {
        self.0.lock().expect("sink lock").clone()
    }
}
