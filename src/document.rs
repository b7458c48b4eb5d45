/*!
 * Data model for in-flight document translations.
 *
 * A `TranslationJob` identifies one document submitted to the remote service.
 * Jobs are never persisted: if the process exits mid-job, the document has to
 * be resubmitted on the next run.
 */

use std::path::{Path, PathBuf};
use serde::Deserialize;

/// Remote-side status of a submitted document
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentStatus {
    /// Accepted by the service, waiting to be picked up
    Queued,
    /// Translation in progress
    Translating,
    /// Translation finished, result can be downloaded
    Done,
    /// The service failed to translate the document
    Error,
    /// A status value this client does not know; treated as still in progress
    Unknown(String),
}

impl DocumentStatus {
    /// Whether this status ends the poll loop
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Done | Self::Error)
    }

    /// Whether the job is still being worked on by the service
    pub fn is_in_progress(&self) -> bool {
        !self.is_terminal()
    }
}

impl From<&str> for DocumentStatus {
    fn from(value: &str) -> Self {
        match value {
            "queued" => Self::Queued,
            "translating" => Self::Translating,
            "done" => Self::Done,
            "error" => Self::Error,
            other => Self::Unknown(other.to_string()),
        }
    }
}

impl std::fmt::Display for DocumentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Queued => write!(f, "queued"),
            Self::Translating => write!(f, "translating"),
            Self::Done => write!(f, "done"),
            Self::Error => write!(f, "error"),
            Self::Unknown(other) => write!(f, "{}", other),
        }
    }
}

/// One poll response from the service status endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct StatusSnapshot {
    /// Raw status string as reported by the service
    pub status: String,

    /// Service estimate of the remaining translation time, when provided
    #[serde(default)]
    pub seconds_remaining: Option<u64>,

    /// Characters billed for this document, when provided
    #[serde(default)]
    pub billed_characters: Option<u64>,
}

impl StatusSnapshot {
    /// Parse the raw status string into a `DocumentStatus`
    pub fn document_status(&self) -> DocumentStatus {
        DocumentStatus::from(self.status.as_str())
    }
}

/// One in-flight remote translation
///
/// The `document_key` is a per-job capability token: the service requires it
/// alongside the `document_id` for every status and result call.
#[derive(Debug, Clone)]
pub struct TranslationJob {
    /// Opaque identifier assigned by the service on submission
    pub document_id: String,
    /// Opaque per-job secret assigned by the service on submission
    pub document_key: String,
    /// Local path of the submitted document
    pub source_path: PathBuf,
    /// Last observed status
    pub status: DocumentStatus,
}

impl TranslationJob {
    /// Create a job for a freshly submitted document
    pub fn new(document_id: impl Into<String>, document_key: impl Into<String>, source_path: &Path) -> Self {
        Self {
            document_id: document_id.into(),
            document_key: document_key.into(),
            source_path: source_path.to_path_buf(),
            status: DocumentStatus::Queued,
        }
    }

    /// File name of the source document, for log output
    pub fn file_name(&self) -> String {
        self.source_path
            .file_name()
            .map(|f| f.to_string_lossy().to_string())
            .unwrap_or_else(|| "unknown".to_string())
    }
}
