//! Configuration types for maillog.
//!
//! [`Config::load`] reads `~/.config/maillog/config.toml`, creating it with
//! hardcoded defaults if it does not yet exist. [`Config::defaults`] returns
//! the same defaults without touching the filesystem (useful in tests).

use crate::types::{FormatSpec, DEFAULT_TIMESTAMP_FORMAT};
use serde::Deserialize;
use std::path::PathBuf;

// ---------------------------------------------------------------------------
// Embedded defaults
// ---------------------------------------------------------------------------

const DEFAULT_CONFIG: &str = r#"
[log]
console          = false
timestamp_format = "%b %d | %H:%M:%S%.3f"
level_width      = 5
category_width   = 25

[export]
file_name = "app-log"
recipient = "support@example.com"
subject   = "Application log"
"#;

// ---------------------------------------------------------------------------
// Public config types
// ---------------------------------------------------------------------------

/// Top-level configuration, loaded from `~/.config/maillog/config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub log: LogConfig,
    #[serde(default)]
    pub export: ExportConfig,
}

/// `[log]` section of `config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// Path of the append-only log file. Defaults to
    /// `$XDG_DATA_HOME/maillog/maillog.log`.
    #[serde(default)]
    pub file: Option<PathBuf>,
    /// Mirror every formatted line to stderr as well as to disk. Meant for
    /// development; release builds should leave this off.
    #[serde(default)]
    pub console: bool,
    #[serde(default = "default_timestamp_format")]
    pub timestamp_format: String,
    #[serde(default = "default_level_width")]
    pub level_width: usize,
    #[serde(default = "default_category_width")]
    pub category_width: usize,
}

fn default_timestamp_format() -> String { DEFAULT_TIMESTAMP_FORMAT.to_string() }
fn default_level_width() -> usize { 5 }
fn default_category_width() -> usize { 25 }

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            file: None,
            console: false,
            timestamp_format: default_timestamp_format(),
            level_width: default_level_width(),
            category_width: default_category_width(),
        }
    }
}

impl LogConfig {
    /// Resolved path of the log file.
    pub fn file_path(&self) -> PathBuf {
        self.file
            .clone()
            .unwrap_or_else(|| data_dir().join("maillog.log"))
    }

    /// Build the render template from the configured fields.
    pub fn format_spec(&self) -> FormatSpec {
        FormatSpec {
            timestamp_format: self.timestamp_format.clone(),
            level_width: self.level_width,
            category_width: self.category_width,
        }
    }
}

/// `[export]` section of `config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct ExportConfig {
    /// Directory export artifacts are written into. Defaults to
    /// `$XDG_DATA_HOME/maillog/exports`.
    #[serde(default)]
    pub dir: Option<PathBuf>,
    /// Artifact base name used when the caller does not supply one; the
    /// `.gz` suffix is appended by the exporter.
    #[serde(default = "default_file_name")]
    pub file_name: String,
    #[serde(default = "default_recipient")]
    pub recipient: String,
    #[serde(default = "default_subject")]
    pub subject: String,
}

fn default_file_name() -> String { "app-log".to_string() }
fn default_recipient() -> String { "support@example.com".to_string() }
fn default_subject() -> String { "Application log".to_string() }

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            dir: None,
            file_name: default_file_name(),
            recipient: default_recipient(),
            subject: default_subject(),
        }
    }
}

impl ExportConfig {
    /// Resolved export directory.
    pub fn dir(&self) -> PathBuf {
        self.dir.clone().unwrap_or_else(|| data_dir().join("exports"))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::defaults()
    }
}

impl Config {
    /// Load from `~/.config/maillog/config.toml`, layered on top of the
    /// built-in defaults. Creates the file with defaults if it does not exist.
    pub fn load() -> anyhow::Result<Self> {
        let path = config_path();

        if !path.exists() {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(&path, DEFAULT_CONFIG.trim_start())?;
        }

        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .add_source(config::File::from(path.as_path()).required(false))
            .build()?
            .try_deserialize()
            .map_err(Into::into)
    }

    /// Return the built-in defaults without touching the filesystem.
    pub fn defaults() -> Self {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .build()
            .expect("built-in default config must be valid TOML")
            .try_deserialize()
            .expect("built-in default config must deserialize correctly")
    }
}

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

fn config_path() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".to_string()))
                .join(".config")
        })
        .join("maillog")
        .join("config.toml")
}

/// Private data directory holding the log file and export artifacts.
pub fn data_dir() -> PathBuf {
    std::env::var("XDG_DATA_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".to_string()))
                .join(".local")
                .join("share")
        })
        .join("maillog")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
