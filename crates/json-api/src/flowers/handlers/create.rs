//! Create Flower Handler

use std::sync::Arc;

use salvo::{
    http::header::LOCATION,
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use fleuron_app::domain::flowers::data::NewFlower;

use crate::{
    extensions::{DepotExt as _, ResultExt as _},
    flowers::errors::into_status_error,
    state::State,
};

/// Create Flower Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CreateFlowerRequest {
    pub uuid: Uuid,
    pub name: String,

    /// Price in pence/cents
    pub price: u64,
}

impl From<CreateFlowerRequest> for NewFlower {
    fn from(request: CreateFlowerRequest) -> Self {
        Self {
            uuid: request.uuid.into(),
            name: request.name,
            price: request.price,
        }
    }
}

/// Flower Created Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct FlowerCreatedResponse {
    /// Created flower UUID
    pub uuid: Uuid,
}

/// Create Flower Handler
#[endpoint(
    tags("flowers"),
    summary = "Create Flower",
    security(("session_cookie" = [])),
    responses(
        (status_code = StatusCode::CREATED, description = "Flower created"),
        (status_code = StatusCode::CONFLICT, description = "Flower already exists"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<CreateFlowerRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<FlowerCreatedResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let uuid = state
        .app
        .flowers
        .create_flower(json.into_inner().into())
        .await
        .map_err(into_status_error)?
        .uuid;

    res.add_header(LOCATION, format!("/flowers/{uuid}"), true)
        .or_500("failed to set location header")?
        .status_code(StatusCode::CREATED);

    Ok(Json(FlowerCreatedResponse { uuid: uuid.into() }))
}
