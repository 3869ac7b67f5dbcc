//! Delete Stored File Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};
use uuid::Uuid;

use crate::{extensions::DepotExt as _, files::errors::into_status_error, state::State};

/// Delete Stored File Handler
#[endpoint(
    tags("files"),
    summary = "Delete File Record",
    security(("session_cookie" = []))
)]
pub(crate) async fn handler(
    file: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<StatusCode, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    state
        .app
        .files
        .delete_file(file.into_inner().into())
        .await
        .map_err(into_status_error)?;

    Ok(StatusCode::OK)
}
