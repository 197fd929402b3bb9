//! maillog-core — log capture and mailable export.
//!
//! This crate exposes the capture and export pipeline as public modules,
//! plus the shared types used across them.
//!
//! # Architecture
//!
//! ```text
//! LogWriter ──► log file ──► Exporter ──► <name>.gz ──► ShareTarget
//!                               │
//!                           group::group
//! ```
//!
//! The writer appends for the lifetime of the host process; export is a
//! deliberate, user-requested action that reads the accumulated file, groups
//! consecutive lines by their bracketed category tag, and compresses the
//! result into an artifact the host can hand to its sharing layer.

pub mod config;
pub mod error;
pub mod export;
pub mod group;
pub mod share;
pub mod types;
pub mod writer;

pub use error::Error;
pub use export::Exporter;
pub use types::{FormatSpec, LogLevel};
pub use writer::LogWriter;
