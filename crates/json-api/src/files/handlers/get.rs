//! Get Stored File Handler

use std::{string::ToString, sync::Arc};

use salvo::{
    oapi::{ToSchema, extract::PathParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use fleuron_app::domain::files::models::StoredFile;

use crate::{extensions::DepotExt as _, files::errors::into_status_error, state::State};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct StoredFileResponse {
    /// The unique identifier of the file record
    pub uuid: Uuid,

    /// Original file name
    pub file_name: String,

    /// MIME type
    pub content_type: String,

    /// Size in bytes
    pub size_bytes: u64,

    /// Where the external store serves the blob from
    pub url: String,

    /// The date and time the record was created
    pub created_at: String,
}

impl From<StoredFile> for StoredFileResponse {
    fn from(file: StoredFile) -> Self {
        Self {
            uuid: file.uuid.into(),
            file_name: file.file_name,
            content_type: file.content_type,
            size_bytes: file.size_bytes,
            url: file.url,
            created_at: file.created_at.to_string(),
        }
    }
}

/// Get Stored File Handler
///
/// Returns a file metadata record.
#[endpoint(tags("files"), summary = "Get File")]
pub(crate) async fn handler(
    file: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<Json<StoredFileResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let file = state
        .app
        .files
        .get_file(file.into_inner().into())
        .await
        .map_err(into_status_error)?;

    Ok(Json(file.into()))
}
