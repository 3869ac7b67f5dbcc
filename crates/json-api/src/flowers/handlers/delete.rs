//! Delete Flower Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};
use uuid::Uuid;

use crate::{extensions::DepotExt as _, flowers::errors::into_status_error, state::State};

/// Delete Flower Handler
#[endpoint(
    tags("flowers"),
    summary = "Delete Flower",
    security(("session_cookie" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Flower deleted"),
        (status_code = StatusCode::NOT_FOUND, description = "Flower not found"),
        (status_code = StatusCode::CONFLICT, description = "Flower still used by a bouquet"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    flower: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<StatusCode, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    state
        .app
        .flowers
        .delete_flower(flower.into_inner().into())
        .await
        .map_err(into_status_error)?;

    Ok(StatusCode::OK)
}
