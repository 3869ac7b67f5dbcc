//! Update Bouquet Line Handler

use std::sync::Arc;

use salvo::{
    oapi::{
        ToSchema,
        extract::{JsonBody, PathParam},
    },
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    bouquets::{errors::into_status_error, index::BouquetLineResponse},
    extensions::DepotExt as _,
    state::State,
};

/// Update Bouquet Line Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct UpdateBouquetLineRequest {
    /// Replacement stem count, at least 1
    pub quantity: u32,
}

/// Update Bouquet Line Handler
///
/// Replaces a line's quantity and re-derives the bouquet price.
#[endpoint(
    tags("bouquet-flowers"),
    summary = "Update Bouquet Line",
    security(("session_cookie" = []))
)]
pub(crate) async fn handler(
    line: PathParam<Uuid>,
    json: JsonBody<UpdateBouquetLineRequest>,
    depot: &mut Depot,
) -> Result<Json<BouquetLineResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let updated = state
        .app
        .bouquets
        .set_line_quantity(line.into_inner().into(), json.into_inner().quantity)
        .await
        .map_err(into_status_error)?;

    Ok(Json(updated.into()))
}
