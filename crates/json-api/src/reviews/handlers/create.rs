//! Create Review Handler

use std::sync::Arc;

use salvo::{
    http::header::LOCATION,
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use fleuron_app::domain::reviews::data::NewReview;

use crate::{
    extensions::{CurrentUserExt as _, DepotExt as _, ResultExt as _},
    reviews::{errors::into_status_error, get::ReviewResponse},
    state::State,
};

/// Create Review Request
///
/// The reviewing user comes from the session, never from the body.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CreateReviewRequest {
    pub uuid: Uuid,
    pub product_uuid: Uuid,

    /// 1 to 5 stars
    pub rating: u8,

    #[serde(default)]
    pub body: String,
}

/// Create Review Handler
#[endpoint(
    tags("reviews"),
    summary = "Create Review",
    security(("session_cookie" = [])),
    responses(
        (status_code = StatusCode::CREATED, description = "Review created"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::UNAUTHORIZED, description = "Not signed in"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<CreateReviewRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<ReviewResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let user = depot.current_user_or_401()?.clone();
    let request = json.into_inner();

    let created = state
        .app
        .reviews
        .create_review(NewReview {
            uuid: request.uuid.into(),
            product_uuid: request.product_uuid.into(),
            user_uuid: user.uuid,
            rating: request.rating,
            body: request.body,
        })
        .await
        .map_err(into_status_error)?;

    res.add_header(LOCATION, format!("/reviews/{}", created.uuid), true)
        .or_500("failed to set location header")?
        .status_code(StatusCode::CREATED);

    Ok(Json(created.into()))
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;
    use salvo::test::TestClient;
    use serde_json::json;
    use testresult::TestResult;

    use fleuron_app::domain::{
        products::models::ProductUuid,
        reviews::{
            MockReviewsService, ReviewsServiceError,
            models::{Review, ReviewUuid},
        },
        users::models::UserUuid,
    };

    use crate::test_helpers::{TEST_USER_UUID, app_context_with_reviews, user_service};

    use super::*;

    fn make_service(reviews: MockReviewsService) -> Service {
        user_service(
            app_context_with_reviews(reviews),
            Router::with_path("reviews").post(handler),
        )
    }

    #[tokio::test]
    async fn test_create_review_uses_the_session_user() -> TestResult {
        let uuid = ReviewUuid::new();
        let product = ProductUuid::new();

        let mut reviews = MockReviewsService::new();

        reviews
            .expect_create_review()
            .once()
            .withf(move |new| {
                new.uuid == uuid
                    && new.product_uuid == product
                    && new.user_uuid == UserUuid::from_uuid(TEST_USER_UUID)
                    && new.rating == 4
            })
            .return_once(move |new| {
                Ok(Review {
                    uuid: new.uuid,
                    product_uuid: new.product_uuid,
                    user_uuid: new.user_uuid,
                    rating: new.rating,
                    body: new.body,
                    created_at: Timestamp::UNIX_EPOCH,
                    updated_at: Timestamp::UNIX_EPOCH,
                })
            });

        let res = TestClient::post("http://example.com/reviews")
            .json(&json!({
                "uuid": uuid.into_uuid(),
                "product_uuid": product.into_uuid(),
                "rating": 4,
                "body": "Lovely",
            }))
            .send(&make_service(reviews))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::CREATED));

        Ok(())
    }

    #[tokio::test]
    async fn test_out_of_range_rating_returns_400() -> TestResult {
        let mut reviews = MockReviewsService::new();

        reviews
            .expect_create_review()
            .once()
            .return_once(|_| Err(ReviewsServiceError::InvalidRating));

        let res = TestClient::post("http://example.com/reviews")
            .json(&json!({
                "uuid": ReviewUuid::new().into_uuid(),
                "product_uuid": ProductUuid::new().into_uuid(),
                "rating": 6,
            }))
            .send(&make_service(reviews))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }
}
