//! Update Review Handler

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

use fleuron_app::domain::reviews::data::ReviewUpdate;

use crate::{
    extensions::DepotExt as _,
    reviews::{errors::into_status_error, get::ReviewResponse},
    state::State,
};

/// Update Review Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct UpdateReviewRequest {
    /// 1 to 5 stars
    pub rating: u8,

    #[serde(default)]
    pub body: String,
}

/// Update Review Handler
#[endpoint(
    tags("reviews"),
    summary = "Update Review",
    security(("session_cookie" = []))
)]
pub(crate) async fn handler(
    review: PathParam<Uuid>,
    json: JsonBody<UpdateReviewRequest>,
    depot: &mut Depot,
) -> Result<Json<ReviewResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let request = json.into_inner();

    let updated = state
        .app
        .reviews
        .update_review(
            review.into_inner().into(),
            ReviewUpdate {
                rating: request.rating,
                body: request.body,
            },
        )
        .await
        .map_err(into_status_error)?;

    Ok(Json(updated.into()))
}
