//! Hand-off seam to the platform sharing layer.
//!
//! The core's responsibility ends at producing an artifact path. Presenting
//! an email chooser or share sheet, and granting read permission to whichever
//! application the user picks, is host-platform glue that lives behind
//! [`ShareTarget`].

use std::path::{Path, PathBuf};

/// MIME type advertised for exported log artifacts.
pub const ARTIFACT_MIME_TYPE: &str = "text/plain";

/// Everything the platform layer needs to offer an artifact to an external
/// application.
#[derive(Debug, Clone)]
pub struct ShareRequest {
    /// Absolute path of the export artifact.
    pub artifact: PathBuf,
    /// Address the log should be sent to.
    pub recipient: String,
    /// Subject line for the outgoing message.
    pub subject: String,
    /// Advertised MIME type, [`ARTIFACT_MIME_TYPE`] unless overridden.
    pub mime_type: String,
}

impl ShareRequest {
    pub fn new(
        artifact: impl Into<PathBuf>,
        recipient: impl Into<String>,
        subject: impl Into<String>,
    ) -> Self {
        Self {
            artifact: artifact.into(),
            recipient: recipient.into(),
            subject: subject.into(),
            mime_type: ARTIFACT_MIME_TYPE.to_string(),
        }
    }

    pub fn artifact(&self) -> &Path {
        &self.artifact
    }
}

/// Implemented by the host's sharing/chooser integration.
pub trait ShareTarget {
    fn share(&self, request: &ShareRequest) -> anyhow::Result<()>;
}
