//! Set Order Status Handler

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

use fleuron::OrderStatus;
use fleuron_app::domain::orders::data::StatusChange;

use crate::{
    extensions::{DepotExt as _, ResultExt as _},
    orders::{errors::into_status_error, get::OrderResponse},
    state::State,
};

/// Set Order Status Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct SetStatusRequest {
    /// Target status
    pub status: String,

    /// Admin override: apply the status even when the workflow allow-list
    /// refuses the transition
    #[serde(default)]
    pub force: bool,

    /// `updated_at` from a previous read; the change is refused with 409
    /// when the stored row has changed since
    pub expected_updated_at: Option<String>,
}

/// Set Order Status Handler
///
/// The sole order mutation. Transitions follow the workflow allow-list
/// (forward progress, cancel from non-terminal, idempotent re-set) unless
/// `force` is set.
#[endpoint(
    tags("orders"),
    summary = "Set Order Status (admin)",
    security(("session_cookie" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Status applied"),
        (status_code = StatusCode::NOT_FOUND, description = "Order not found"),
        (status_code = StatusCode::CONFLICT, description = "Order was modified concurrently"),
        (status_code = StatusCode::UNPROCESSABLE_ENTITY, description = "Transition refused without force"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    order: PathParam<Uuid>,
    json: JsonBody<SetStatusRequest>,
    depot: &mut Depot,
) -> Result<Json<OrderResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let request = json.into_inner();

    let status = request
        .status
        .parse::<OrderStatus>()
        .map_err(|_source| StatusError::bad_request().brief("Unknown order status"))?;

    let expected_updated_at = request
        .expected_updated_at
        .map(|value| value.parse::<Timestamp>())
        .transpose()
        .or_400("could not parse \"expected_updated_at\"")?;

    let updated = state
        .app
        .orders
        .set_status(
            order.into_inner().into(),
            StatusChange {
                status,
                force: request.force,
                expected_updated_at,
            },
        )
        .await
        .map_err(into_status_error)?;

    Ok(Json(updated.into()))
}
