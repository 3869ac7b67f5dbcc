//! Create Stored File Handler

use std::sync::Arc;

use salvo::{
    http::header::LOCATION,
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use fleuron_app::domain::files::data::NewStoredFile;

use crate::{
    extensions::{DepotExt as _, ResultExt as _},
    files::{errors::into_status_error, get::StoredFileResponse},
    state::State,
};

/// Create Stored File Request
///
/// Records metadata for a blob already held by the external store.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CreateStoredFileRequest {
    pub uuid: Uuid,
    pub file_name: String,
    pub content_type: String,
    pub size_bytes: u64,
    pub url: String,
}

impl From<CreateStoredFileRequest> for NewStoredFile {
    fn from(request: CreateStoredFileRequest) -> Self {
        Self {
            uuid: request.uuid.into(),
            file_name: request.file_name,
            content_type: request.content_type,
            size_bytes: request.size_bytes,
            url: request.url,
        }
    }
}

/// Create Stored File Handler
#[endpoint(
    tags("files"),
    summary = "Create File Record",
    security(("session_cookie" = [])),
    responses(
        (status_code = StatusCode::CREATED, description = "File record created"),
        (status_code = StatusCode::CONFLICT, description = "File record already exists"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<CreateStoredFileRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<StoredFileResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let created = state
        .app
        .files
        .create_file(json.into_inner().into())
        .await
        .map_err(into_status_error)?;

    res.add_header(LOCATION, format!("/files/{}", created.uuid), true)
        .or_500("failed to set location header")?
        .status_code(StatusCode::CREATED);

    Ok(Json(created.into()))
}
