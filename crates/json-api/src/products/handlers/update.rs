//! Update Product Handler

use std::sync::Arc;

use jiff::Timestamp;
use salvo::{
    oapi::{
        ToSchema,
        extract::{JsonBody, PathParam},
    },
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use fleuron_app::domain::products::data::ProductUpdate;

use crate::{
    extensions::{DepotExt as _, ResultExt as _},
    products::{
        errors::{into_status_error, parse_kind},
        get::ProductResponse,
        handlers::create::LineRequest,
    },
    state::State,
};

/// Update Product Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct UpdateProductRequest {
    pub name: String,

    #[serde(default)]
    pub description: String,

    /// Required when switching a bouquet to normal; ignored for bouquets
    pub price: Option<u64>,

    /// `normal` or `bouquet`; changing it drives the kind transition
    pub kind: String,

    pub subcategory_uuid: Option<Uuid>,

    /// When present, replaces the bouquet composition wholesale
    pub lines: Option<Vec<LineRequest>>,

    /// `updated_at` from a previous read; the update is refused with 409
    /// when the stored row has changed since
    pub expected_updated_at: Option<String>,
}

/// Update Product Handler
#[endpoint(
    tags("products"),
    summary = "Update Product",
    security(("session_cookie" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Product updated"),
        (status_code = StatusCode::NOT_FOUND, description = "Product not found"),
        (status_code = StatusCode::CONFLICT, description = "Product was modified concurrently"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    product: PathParam<Uuid>,
    json: JsonBody<UpdateProductRequest>,
    depot: &mut Depot,
) -> Result<Json<ProductResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let request = json.into_inner();

    let expected_updated_at = request
        .expected_updated_at
        .map(|value| value.parse::<Timestamp>())
        .transpose()
        .or_400("could not parse \"expected_updated_at\"")?;

    let update = ProductUpdate {
        name: request.name,
        description: request.description,
        price: request.price,
        kind: parse_kind(&request.kind)?,
        subcategory_uuid: request.subcategory_uuid.map(Into::into),
        lines: request
            .lines
            .map(|lines| lines.into_iter().map(Into::into).collect()),
        expected_updated_at,
    };

    let updated = state
        .app
        .products
        .update_product(product.into_inner().into(), update)
        .await
        .map_err(into_status_error)?;

    Ok(Json(updated.into()))
}
