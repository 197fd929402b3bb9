//! Error taxonomy for maillog-core.
//!
//! Post-construction writer failures are deliberately absent from this enum:
//! appends are best-effort and never propagate to the host (see
//! [`writer`](crate::writer)). Export failures always propagate, since export
//! is a deliberate, user-requested action.

use std::path::PathBuf;
use std::thread::ThreadId;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Invalid format template or unwritable log path at construction time.
    /// Fatal to logging setup only; the host process keeps running.
    #[error("invalid logging configuration: {0}")]
    Configuration(String),

    /// Export was invoked from the thread registered as latency-critical.
    /// No side effects have been performed.
    #[error("export invoked from disallowed thread {0:?}")]
    ThreadingViolation(ThreadId),

    /// A read, write, or compression failure during export. No partial
    /// artifact is left behind.
    #[error("failed to {op} {path:?}: {source}")]
    Io {
        op: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    pub(crate) fn io(op: &'static str, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            op,
            path: path.into(),
            source,
        }
    }
}
