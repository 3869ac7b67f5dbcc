//! Stored File Data

use crate::domain::files::models::StoredFileUuid;

/// New Stored File Data
#[derive(Debug, Clone, PartialEq)]
pub struct NewStoredFile {
    pub uuid: StoredFileUuid,
    pub file_name: String,
    pub content_type: String,
    pub size_bytes: u64,
    pub url: String,
}
