//! Review Index Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::QueryParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    extensions::DepotExt as _,
    reviews::{errors::into_status_error, get::ReviewResponse},
    state::State,
};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ReviewsResponse {
    /// The list of reviews
    pub reviews: Vec<ReviewResponse>,
}

/// Review Index Handler
///
/// Returns reviews, optionally narrowed to one product via `?product=`.
#[endpoint(tags("reviews"), summary = "List Reviews")]
pub(crate) async fn handler(
    product: QueryParam<Uuid, false>,
    depot: &mut Depot,
) -> Result<Json<ReviewsResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let reviews = state
        .app
        .reviews
        .list_reviews(product.into_inner().map(Into::into))
        .await
        .map_err(into_status_error)?;

    Ok(Json(ReviewsResponse {
        reviews: reviews.into_iter().map(Into::into).collect(),
    }))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use fleuron_app::domain::{
        products::models::ProductUuid, reviews::MockReviewsService,
    };

    use crate::test_helpers::{app_context_with_reviews, public_service};

    use super::*;

    fn make_service(reviews: MockReviewsService) -> Service {
        public_service(
            app_context_with_reviews(reviews),
            Router::with_path("reviews").get(handler),
        )
    }

    #[tokio::test]
    async fn test_index_forwards_the_product_filter() -> TestResult {
        let product = ProductUuid::new();

        let mut reviews = MockReviewsService::new();

        reviews
            .expect_list_reviews()
            .once()
            .withf(move |filter| *filter == Some(product))
            .return_once(|_| Ok(vec![]));

        let response: ReviewsResponse = TestClient::get(format!(
            "http://example.com/reviews?product={}",
            product.into_uuid()
        ))
        .send(&make_service(reviews))
        .await
        .take_json()
        .await?;

        assert!(response.reviews.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn test_index_without_filter_lists_everything() -> TestResult {
        let mut reviews = MockReviewsService::new();

        reviews
            .expect_list_reviews()
            .once()
            .withf(|filter| filter.is_none())
            .return_once(|_| Ok(vec![]));

        let res = TestClient::get("http://example.com/reviews")
            .send(&make_service(reviews))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        Ok(())
    }
}
