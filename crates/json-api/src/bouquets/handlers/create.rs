//! Create Bouquet Line Handler

use std::sync::Arc;

use salvo::{
    http::header::LOCATION,
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use fleuron_app::domain::bouquets::data::NewBouquetLine;

use crate::{
    bouquets::{errors::into_status_error, index::BouquetLineResponse},
    extensions::{DepotExt as _, ResultExt as _},
    state::State,
};

/// Create Bouquet Line Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CreateBouquetLineRequest {
    pub uuid: Uuid,
    pub bouquet_uuid: Uuid,
    pub flower_uuid: Uuid,
    pub quantity: u32,
}

impl From<CreateBouquetLineRequest> for NewBouquetLine {
    fn from(request: CreateBouquetLineRequest) -> Self {
        Self {
            uuid: request.uuid.into(),
            bouquet_uuid: request.bouquet_uuid.into(),
            flower_uuid: request.flower_uuid.into(),
            quantity: request.quantity,
        }
    }
}

/// Create Bouquet Line Handler
///
/// Adds a flower line to a bouquet. A line for the same flower is merged by
/// summing quantities rather than duplicated, and the bouquet price is
/// re-derived.
#[endpoint(
    tags("bouquet-flowers"),
    summary = "Add Bouquet Line",
    security(("session_cookie" = [])),
    responses(
        (status_code = StatusCode::CREATED, description = "Line added or merged"),
        (status_code = StatusCode::NOT_FOUND, description = "Bouquet not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<CreateBouquetLineRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<BouquetLineResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let line = state
        .app
        .bouquets
        .add_line(json.into_inner().into())
        .await
        .map_err(into_status_error)?;

    res.add_header(LOCATION, format!("/bouquet-flowers/{}", line.uuid), true)
        .or_500("failed to set location header")?
        .status_code(StatusCode::CREATED);

    Ok(Json(line.into()))
}
