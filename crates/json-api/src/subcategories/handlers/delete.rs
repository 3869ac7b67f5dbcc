//! Delete Subcategory Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};
use uuid::Uuid;

use crate::{categories::errors::into_status_error, extensions::DepotExt as _, state::State};

/// Delete Subcategory Handler
#[endpoint(
    tags("subcategories"),
    summary = "Delete Subcategory",
    security(("session_cookie" = []))
)]
pub(crate) async fn handler(
    subcategory: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<StatusCode, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    state
        .app
        .categories
        .delete_subcategory(subcategory.into_inner().into())
        .await
        .map_err(into_status_error)?;

    Ok(StatusCode::OK)
}
