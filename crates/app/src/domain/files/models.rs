//! Stored File Models

use jiff::Timestamp;

use crate::uuids::TypedUuid;

/// Stored File UUID
pub type StoredFileUuid = TypedUuid<StoredFile>;

/// Metadata for an uploaded file. The blob itself lives with an external
/// storage collaborator; `url` points at it.
#[derive(Debug, Clone)]
pub struct StoredFile {
    pub uuid: StoredFileUuid,
    pub file_name: String,
    pub content_type: String,
    pub size_bytes: u64,
    pub url: String,
    pub created_at: Timestamp,
}
