//! Delete Bouquet Line Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};
use uuid::Uuid;

use crate::{bouquets::errors::into_status_error, extensions::DepotExt as _, state::State};

/// Delete Bouquet Line Handler
///
/// Removes a composition line (never the last one) and re-derives the
/// bouquet price.
#[endpoint(
    tags("bouquet-flowers"),
    summary = "Remove Bouquet Line",
    security(("session_cookie" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Line removed"),
        (status_code = StatusCode::NOT_FOUND, description = "Line not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Removing the last line"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    line: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<StatusCode, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    state
        .app
        .bouquets
        .remove_line(line.into_inner().into())
        .await
        .map_err(into_status_error)?;

    Ok(StatusCode::OK)
}
