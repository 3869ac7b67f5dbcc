//! Create Order Handler

use std::sync::Arc;

use salvo::{
    http::header::LOCATION,
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use fleuron_app::domain::orders::{
    data::{NewOrder, NewOrderItem},
    models::OrderItemUuid,
};

use crate::{
    extensions::{CurrentUserExt as _, DepotExt as _, ResultExt as _},
    orders::{errors::into_status_error, get::OrderResponse},
    state::State,
};

/// One requested order line.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, ToSchema)]
pub(crate) struct OrderItemRequest {
    pub product_uuid: Uuid,
    pub quantity: u32,
}

/// Create Order Request
///
/// The customer comes from the session, never from the body.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CreateOrderRequest {
    pub uuid: Uuid,
    pub delivery_address: String,

    /// Civil date in `YYYY-MM-DD` form
    pub delivery_date: String,

    #[serde(default)]
    pub delivery_time: String,

    #[serde(default)]
    pub comment: String,

    pub items: Vec<OrderItemRequest>,
}

/// Create Order Handler
///
/// Checkout: creates an order with product name/price snapshots taken now.
#[endpoint(
    tags("orders"),
    summary = "Create Order",
    security(("session_cookie" = [])),
    responses(
        (status_code = StatusCode::CREATED, description = "Order created"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::UNAUTHORIZED, description = "Not signed in"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<CreateOrderRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<OrderResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let user = depot.current_user_or_401()?.clone();
    let request = json.into_inner();

    let order = NewOrder {
        uuid: request.uuid.into(),
        user_uuid: user.uuid,
        delivery_address: request.delivery_address,
        delivery_date: request.delivery_date,
        delivery_time: request.delivery_time,
        comment: request.comment,
        items: request
            .items
            .into_iter()
            .map(|item| NewOrderItem {
                uuid: OrderItemUuid::new(),
                product_uuid: item.product_uuid.into(),
                quantity: item.quantity,
            })
            .collect(),
    };

    let created = state
        .app
        .orders
        .create_order(order)
        .await
        .map_err(into_status_error)?;

    res.add_header(LOCATION, format!("/orders/{}", created.uuid), true)
        .or_500("failed to set location header")?
        .status_code(StatusCode::CREATED);

    Ok(Json(created.into()))
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use fleuron::OrderStatus;
    use fleuron_app::domain::{
        orders::{
            MockOrdersService, OrdersServiceError,
            models::{Order, OrderUuid},
        },
        products::models::ProductUuid,
        users::models::UserUuid,
    };

    use crate::test_helpers::{TEST_USER_UUID, app_context_with_orders, user_service};

    use super::*;

    fn make_service(orders: MockOrdersService) -> Service {
        user_service(
            app_context_with_orders(orders),
            Router::with_path("orders").post(handler),
        )
    }

    #[tokio::test]
    async fn test_create_order_uses_the_session_user() -> TestResult {
        let uuid = OrderUuid::new();
        let product = ProductUuid::new();

        let mut orders = MockOrdersService::new();

        orders
            .expect_create_order()
            .once()
            .withf(move |new| {
                new.uuid == uuid
                    && new.user_uuid == UserUuid::from_uuid(TEST_USER_UUID)
                    && new.items.len() == 1
            })
            .return_once(move |new| {
                Ok(Order {
                    uuid: new.uuid,
                    user_uuid: new.user_uuid,
                    status: OrderStatus::New,
                    total_price: 600,
                    delivery_address: new.delivery_address,
                    delivery_date: new.delivery_date,
                    delivery_time: new.delivery_time,
                    comment: new.comment,
                    items: Vec::new(),
                    created_at: Timestamp::UNIX_EPOCH,
                    updated_at: Timestamp::UNIX_EPOCH,
                })
            });

        let mut res = TestClient::post("http://example.com/orders")
            .json(&json!({
                "uuid": uuid.into_uuid(),
                "delivery_address": "1 Petal Lane",
                "delivery_date": "2026-08-14",
                "items": [{ "product_uuid": product.into_uuid(), "quantity": 2 }],
            }))
            .send(&make_service(orders))
            .await;

        let body: OrderResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::CREATED));
        assert_eq!(body.user_uuid, TEST_USER_UUID);
        assert_eq!(body.status, "new");
        assert_eq!(body.total_price, 600);

        Ok(())
    }

    #[tokio::test]
    async fn test_empty_order_returns_400() -> TestResult {
        let mut orders = MockOrdersService::new();

        orders
            .expect_create_order()
            .once()
            .return_once(|_| Err(OrdersServiceError::EmptyOrder));

        let res = TestClient::post("http://example.com/orders")
            .json(&json!({
                "uuid": OrderUuid::new().into_uuid(),
                "delivery_address": "1 Petal Lane",
                "delivery_date": "2026-08-14",
                "items": [],
            }))
            .send(&make_service(orders))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }

    #[tokio::test]
    async fn test_bad_delivery_date_returns_400() -> TestResult {
        let mut orders = MockOrdersService::new();

        orders
            .expect_create_order()
            .once()
            .return_once(|_| Err(OrdersServiceError::InvalidDeliveryDate));

        let res = TestClient::post("http://example.com/orders")
            .json(&json!({
                "uuid": OrderUuid::new().into_uuid(),
                "delivery_address": "1 Petal Lane",
                "delivery_date": "2026-02-30",
                "items": [{ "product_uuid": ProductUuid::new().into_uuid(), "quantity": 1 }],
            }))
            .send(&make_service(orders))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }
}
