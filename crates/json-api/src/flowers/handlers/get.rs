//! Get Flower Handler

use std::{string::ToString, sync::Arc};

use salvo::{
    oapi::{ToSchema, extract::PathParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use fleuron_app::domain::flowers::models::Flower;

use crate::{extensions::DepotExt as _, flowers::errors::into_status_error, state::State};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct FlowerResponse {
    /// The unique identifier of the flower
    pub uuid: Uuid,

    /// Flower name
    pub name: String,

    /// Current price in pence/cents; bouquet lines snapshot this value
    pub price: u64,

    /// The date and time the flower was created
    pub created_at: String,

    /// The date and time the flower was last updated
    pub updated_at: String,
}

impl From<Flower> for FlowerResponse {
    fn from(flower: Flower) -> Self {
        Self {
            uuid: flower.uuid.into(),
            name: flower.name,
            price: flower.price,
            created_at: flower.created_at.to_string(),
            updated_at: flower.updated_at.to_string(),
        }
    }
}

/// Get Flower Handler
///
/// Returns a flower.
#[endpoint(tags("flowers"), summary = "Get Flower")]
pub(crate) async fn handler(
    flower: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<Json<FlowerResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let flower = state
        .app
        .flowers
        .get_flower(flower.into_inner().into())
        .await
        .map_err(into_status_error)?;

    Ok(Json(flower.into()))
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use fleuron_app::domain::flowers::{
        FlowersServiceError, MockFlowersService, models::FlowerUuid,
    };

    use crate::test_helpers::{app_context_with_flowers, public_service};

    use super::*;

    fn make_service(flowers: MockFlowersService) -> Service {
        public_service(
            app_context_with_flowers(flowers),
            Router::with_path("flowers/{flower}").get(handler),
        )
    }

    #[tokio::test]
    async fn test_get_returns_the_flower() -> TestResult {
        let uuid = FlowerUuid::new();

        let mut flowers = MockFlowersService::new();

        flowers
            .expect_get_flower()
            .once()
            .withf(move |f| *f == uuid)
            .return_once(move |f| {
                Ok(Flower {
                    uuid: f,
                    name: "Red Rose".to_string(),
                    price: 250,
                    created_at: Timestamp::UNIX_EPOCH,
                    updated_at: Timestamp::UNIX_EPOCH,
                })
            });

        let response: FlowerResponse =
            TestClient::get(format!("http://example.com/flowers/{uuid}"))
                .send(&make_service(flowers))
                .await
                .take_json()
                .await?;

        assert_eq!(response.uuid, uuid.into_uuid());
        assert_eq!(response.price, 250);

        Ok(())
    }

    #[tokio::test]
    async fn test_get_missing_flower_returns_404() -> TestResult {
        let uuid = FlowerUuid::new();

        let mut flowers = MockFlowersService::new();

        flowers
            .expect_get_flower()
            .once()
            .return_once(|_| Err(FlowersServiceError::NotFound));

        let res = TestClient::get(format!("http://example.com/flowers/{uuid}"))
            .send(&make_service(flowers))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }
}
