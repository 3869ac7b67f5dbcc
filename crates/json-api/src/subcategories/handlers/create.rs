//! Create Subcategory Handler

use std::sync::Arc;

use salvo::{
    http::header::LOCATION,
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use fleuron_app::domain::categories::data::NewSubcategory;

use crate::{
    categories::errors::into_status_error,
    extensions::{DepotExt as _, ResultExt as _},
    state::State,
};

/// Create Subcategory Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CreateSubcategoryRequest {
    pub uuid: Uuid,
    pub category_uuid: Uuid,
    pub name: String,
}

impl From<CreateSubcategoryRequest> for NewSubcategory {
    fn from(request: CreateSubcategoryRequest) -> Self {
        Self {
            uuid: request.uuid.into(),
            category_uuid: request.category_uuid.into(),
            name: request.name,
        }
    }
}

/// Subcategory Created Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct SubcategoryCreatedResponse {
    /// Created subcategory UUID
    pub uuid: Uuid,
}

/// Create Subcategory Handler
#[endpoint(
    tags("subcategories"),
    summary = "Create Subcategory",
    security(("session_cookie" = [])),
    responses(
        (status_code = StatusCode::CREATED, description = "Subcategory created"),
        (status_code = StatusCode::CONFLICT, description = "Subcategory already exists"),
        (status_code = StatusCode::BAD_REQUEST, description = "Unknown parent category"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<CreateSubcategoryRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<SubcategoryCreatedResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let uuid = state
        .app
        .categories
        .create_subcategory(json.into_inner().into())
        .await
        .map_err(into_status_error)?
        .uuid;

    res.add_header(LOCATION, format!("/subcategories/{uuid}"), true)
        .or_500("failed to set location header")?
        .status_code(StatusCode::CREATED);

    Ok(Json(SubcategoryCreatedResponse { uuid: uuid.into() }))
}
