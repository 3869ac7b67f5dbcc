//! Get Review Handler

use std::{string::ToString, sync::Arc};

use salvo::{
    oapi::{ToSchema, extract::PathParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use fleuron_app::domain::reviews::models::Review;

use crate::{extensions::DepotExt as _, reviews::errors::into_status_error, state::State};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ReviewResponse {
    /// The unique identifier of the review
    pub uuid: Uuid,

    /// The reviewed product
    pub product_uuid: Uuid,

    /// The reviewing user
    pub user_uuid: Uuid,

    /// 1 to 5 stars
    pub rating: u8,

    /// Review text
    pub body: String,

    /// The date and time the review was created
    pub created_at: String,

    /// The date and time the review was last updated
    pub updated_at: String,
}

impl From<Review> for ReviewResponse {
    fn from(review: Review) -> Self {
        Self {
            uuid: review.uuid.into(),
            product_uuid: review.product_uuid.into(),
            user_uuid: review.user_uuid.into(),
            rating: review.rating,
            body: review.body,
            created_at: review.created_at.to_string(),
            updated_at: review.updated_at.to_string(),
        }
    }
}

/// Get Review Handler
///
/// Returns a review.
#[endpoint(tags("reviews"), summary = "Get Review")]
pub(crate) async fn handler(
    review: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<Json<ReviewResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let review = state
        .app
        .reviews
        .get_review(review.into_inner().into())
        .await
        .map_err(into_status_error)?;

    Ok(Json(review.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::TestClient;
    use testresult::TestResult;

    use fleuron_app::domain::reviews::{
        MockReviewsService, ReviewsServiceError, models::ReviewUuid,
    };

    use crate::test_helpers::{app_context_with_reviews, public_service};

    use super::*;

    #[tokio::test]
    async fn test_get_missing_review_returns_404() -> TestResult {
        let uuid = ReviewUuid::new();

        let mut reviews = MockReviewsService::new();

        reviews
            .expect_get_review()
            .once()
            .return_once(|_| Err(ReviewsServiceError::NotFound));

        let service = public_service(
            app_context_with_reviews(reviews),
            Router::with_path("reviews/{review}").get(handler),
        );

        let res = TestClient::get(format!("http://example.com/reviews/{uuid}"))
            .send(&service)
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }
}
