//! Update Flower Handler

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

use fleuron_app::domain::flowers::data::FlowerUpdate;

use crate::{
    extensions::DepotExt as _,
    flowers::{errors::into_status_error, get::FlowerResponse},
    state::State,
};

/// Update Flower Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct UpdateFlowerRequest {
    pub name: String,

    /// New current price; existing bouquet lines keep their snapshots
    pub price: u64,
}

/// Update Flower Handler
#[endpoint(
    tags("flowers"),
    summary = "Update Flower",
    security(("session_cookie" = []))
)]
pub(crate) async fn handler(
    flower: PathParam<Uuid>,
    json: JsonBody<UpdateFlowerRequest>,
    depot: &mut Depot,
) -> Result<Json<FlowerResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let request = json.into_inner();

    let updated = state
        .app
        .flowers
        .update_flower(
            flower.into_inner().into(),
            FlowerUpdate {
                name: request.name,
                price: request.price,
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

    use fleuron_app::domain::flowers::{
        MockFlowersService,
        models::{Flower, FlowerUuid},
    };

    use crate::test_helpers::{app_context_with_flowers, authed_service};

    use super::*;

    #[tokio::test]
    async fn test_update_flower_returns_new_price() -> TestResult {
        let uuid = FlowerUuid::new();

        let mut flowers = MockFlowersService::new();

        flowers
            .expect_update_flower()
            .once()
            .withf(move |f, update| *f == uuid && update.price == 300)
            .return_once(move |f, update| {
                Ok(Flower {
                    uuid: f,
                    name: update.name,
                    price: update.price,
                    created_at: Timestamp::UNIX_EPOCH,
                    updated_at: Timestamp::UNIX_EPOCH,
                })
            });

        let service = authed_service(
            app_context_with_flowers(flowers),
            Router::with_path("flowers/{flower}").put(handler),
        );

        let response: FlowerResponse =
            TestClient::put(format!("http://example.com/flowers/{uuid}"))
                .json(&json!({ "name": "Red Rose", "price": 300 }))
                .send(&service)
                .await
                .take_json()
                .await?;

        assert_eq!(response.price, 300);

        Ok(())
    }
}
