//! Stored File Index Handler

use std::sync::Arc;

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};

use crate::{
    extensions::DepotExt as _,
    files::{errors::into_status_error, get::StoredFileResponse},
    state::State,
};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct StoredFilesResponse {
    /// The list of file metadata records
    pub files: Vec<StoredFileResponse>,
}

/// Stored File Index Handler
///
/// Returns all file metadata records.
#[endpoint(tags("files"), summary = "List Files")]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<StoredFilesResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let files = state
        .app
        .files
        .list_files()
        .await
        .map_err(into_status_error)?;

    Ok(Json(StoredFilesResponse {
        files: files.into_iter().map(Into::into).collect(),
    }))
}
