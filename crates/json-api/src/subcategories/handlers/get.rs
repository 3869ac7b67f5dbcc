//! Get Subcategory Handler

use std::{string::ToString, sync::Arc};

use salvo::{
    oapi::{ToSchema, extract::PathParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use fleuron_app::domain::categories::models::Subcategory;

use crate::{categories::errors::into_status_error, extensions::DepotExt as _, state::State};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct SubcategoryResponse {
    /// The unique identifier of the subcategory
    pub uuid: Uuid,

    /// The parent category
    pub category_uuid: Uuid,

    /// Subcategory name
    pub name: String,

    /// The date and time the subcategory was created
    pub created_at: String,

    /// The date and time the subcategory was last updated
    pub updated_at: String,
}

impl From<Subcategory> for SubcategoryResponse {
    fn from(subcategory: Subcategory) -> Self {
        Self {
            uuid: subcategory.uuid.into(),
            category_uuid: subcategory.category_uuid.into(),
            name: subcategory.name,
            created_at: subcategory.created_at.to_string(),
            updated_at: subcategory.updated_at.to_string(),
        }
    }
}

/// Get Subcategory Handler
///
/// Returns a subcategory.
#[endpoint(tags("subcategories"), summary = "Get Subcategory")]
pub(crate) async fn handler(
    subcategory: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<Json<SubcategoryResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let subcategory = state
        .app
        .categories
        .get_subcategory(subcategory.into_inner().into())
        .await
        .map_err(into_status_error)?;

    Ok(Json(subcategory.into()))
}
