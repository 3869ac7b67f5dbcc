//! Update Subcategory Handler

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

use fleuron_app::domain::categories::data::SubcategoryUpdate;

use crate::{
    categories::errors::into_status_error,
    extensions::DepotExt as _,
    state::State,
    subcategories::get::SubcategoryResponse,
};

/// Update Subcategory Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct UpdateSubcategoryRequest {
    pub name: String,
}

/// Update Subcategory Handler
#[endpoint(
    tags("subcategories"),
    summary = "Update Subcategory",
    security(("session_cookie" = []))
)]
pub(crate) async fn handler(
    subcategory: PathParam<Uuid>,
    json: JsonBody<UpdateSubcategoryRequest>,
    depot: &mut Depot,
) -> Result<Json<SubcategoryResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let updated = state
        .app
        .categories
        .update_subcategory(
            subcategory.into_inner().into(),
            SubcategoryUpdate {
                name: json.into_inner().name,
            },
        )
        .await
        .map_err(into_status_error)?;

    Ok(Json(updated.into()))
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use fleuron_app::domain::categories::{
        MockCategoriesService,
        models::{CategoryUuid, Subcategory, SubcategoryUuid},
    };

    use crate::test_helpers::{app_context_with_categories, authed_service};

    use super::*;

    #[tokio::test]
    async fn test_update_subcategory_returns_updated_name() -> TestResult {
        let uuid = SubcategoryUuid::new();

        let mut categories = MockCategoriesService::new();

        categories
            .expect_update_subcategory()
            .once()
            .withf(move |s, update| *s == uuid && update.name == "Peonies")
            .return_once(move |s, update| {
                Ok(Subcategory {
                    uuid: s,
                    category_uuid: CategoryUuid::new(),
                    name: update.name,
                    created_at: Timestamp::UNIX_EPOCH,
                    updated_at: Timestamp::UNIX_EPOCH,
                })
            });

        let service = authed_service(
            app_context_with_categories(categories),
            Router::with_path("subcategories/{subcategory}").put(handler),
        );

        let response: SubcategoryResponse =
            TestClient::put(format!("http://example.com/subcategories/{uuid}"))
                .json(&json!({ "name": "Peonies" }))
                .send(&service)
                .await
                .take_json()
                .await?;

        assert_eq!(response.name, "Peonies");

        Ok(())
    }
}
