//! Flower Index Handler

use std::sync::Arc;

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};

use crate::{
    extensions::DepotExt as _,
    flowers::{errors::into_status_error, get::FlowerResponse},
    state::State,
};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct FlowersResponse {
    /// The list of flowers
    pub flowers: Vec<FlowerResponse>,
}

/// Flower Index Handler
///
/// Returns a list of flowers.
#[endpoint(tags("flowers"), summary = "List Flowers")]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<FlowersResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let flowers = state
        .app
        .flowers
        .list_flowers()
        .await
        .map_err(into_status_error)?;

    Ok(Json(FlowersResponse {
        flowers: flowers.into_iter().map(Into::into).collect(),
    }))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use fleuron_app::domain::flowers::MockFlowersService;

    use crate::test_helpers::{app_context_with_flowers, public_service};

    use super::*;

    #[tokio::test]
    async fn test_index_returns_empty_list() -> TestResult {
        let mut flowers = MockFlowersService::new();

        flowers.expect_list_flowers().once().return_once(|| Ok(vec![]));

        let service = public_service(
            app_context_with_flowers(flowers),
            Router::with_path("flowers").get(handler),
        );

        let response: FlowersResponse = TestClient::get("http://example.com/flowers")
            .send(&service)
            .await
            .take_json()
            .await?;

        assert!(response.flowers.is_empty());

        Ok(())
    }
}
