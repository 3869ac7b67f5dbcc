//! Subcategory Index Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::PathParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    categories::errors::into_status_error,
    extensions::DepotExt as _,
    state::State,
    subcategories::get::SubcategoryResponse,
};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct SubcategoriesResponse {
    /// The subcategories of the category
    pub subcategories: Vec<SubcategoryResponse>,
}

/// Subcategory Index Handler
///
/// Returns the subcategories of a category.
#[endpoint(tags("categories"), summary = "List Subcategories")]
pub(crate) async fn handler(
    category: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<Json<SubcategoriesResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let subcategories = state
        .app
        .categories
        .list_subcategories(category.into_inner().into())
        .await
        .map_err(into_status_error)?;

    Ok(Json(SubcategoriesResponse {
        subcategories: subcategories.into_iter().map(Into::into).collect(),
    }))
}
