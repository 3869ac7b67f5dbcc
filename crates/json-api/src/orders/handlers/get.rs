//! Get Order Handler

use std::{string::ToString, sync::Arc};

use salvo::{
    oapi::{ToSchema, extract::PathParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use fleuron_app::domain::{
    orders::models::{Order, OrderItem},
    users::models::UserRole,
};

use crate::{
    extensions::{CurrentUserExt as _, DepotExt as _},
    orders::errors::into_status_error,
    state::State,
};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct OrderItemResponse {
    /// The unique identifier of the item
    pub uuid: Uuid,

    /// The product this item refers to
    pub product_uuid: Uuid,

    /// Product name snapshotted at order creation
    pub product_name: String,

    /// Unit price snapshotted at order creation, in pence/cents
    pub unit_price: u64,

    /// Number of units
    pub quantity: u32,

    /// Product kind snapshotted at order creation
    pub product_kind: String,
}

impl From<OrderItem> for OrderItemResponse {
    fn from(item: OrderItem) -> Self {
        Self {
            uuid: item.uuid.into(),
            product_uuid: item.product_uuid.into(),
            product_name: item.product_name,
            unit_price: item.unit_price,
            quantity: item.quantity,
            product_kind: item.product_kind.to_string(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct OrderResponse {
    /// The unique identifier of the order
    pub uuid: Uuid,

    /// The customer who placed the order
    pub user_uuid: Uuid,

    /// Current workflow status
    pub status: String,

    /// Total price in pence/cents, fixed at creation
    pub total_price: u64,

    /// Delivery address
    pub delivery_address: String,

    /// Delivery date, `YYYY-MM-DD`
    pub delivery_date: String,

    /// Delivery time window
    pub delivery_time: String,

    /// Customer comment
    pub comment: String,

    /// Order items with their snapshots
    pub items: Vec<OrderItemResponse>,

    /// The date and time the order was created
    pub created_at: String,

    /// The date and time the order was last updated; echo this back as
    /// `expected_updated_at` for conflict-checked status changes
    pub updated_at: String,
}

impl From<Order> for OrderResponse {
    fn from(order: Order) -> Self {
        Self {
            uuid: order.uuid.into(),
            user_uuid: order.user_uuid.into(),
            status: order.status.to_string(),
            total_price: order.total_price,
            delivery_address: order.delivery_address,
            delivery_date: order.delivery_date,
            delivery_time: order.delivery_time,
            comment: order.comment,
            items: order.items.into_iter().map(Into::into).collect(),
            created_at: order.created_at.to_string(),
            updated_at: order.updated_at.to_string(),
        }
    }
}

/// Get Order Handler
///
/// Returns an order with its items. Customers can only read their own
/// orders; admins can read any.
#[endpoint(
    tags("orders"),
    summary = "Get Order",
    security(("session_cookie" = []))
)]
pub(crate) async fn handler(
    order: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<Json<OrderResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let user = depot.current_user_or_401()?.clone();

    let order = state
        .app
        .orders
        .get_order(order.into_inner().into())
        .await
        .map_err(into_status_error)?;

    // Another customer's order is indistinguishable from a missing one.
    if user.role != UserRole::Admin && order.user_uuid != user.uuid {
        return Err(StatusError::not_found());
    }

    Ok(Json(order.into()))
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use fleuron::OrderStatus;
    use fleuron_app::domain::{
        orders::{MockOrdersService, models::OrderUuid},
        users::models::UserUuid,
    };

    use crate::test_helpers::{
        TEST_USER_UUID, app_context_with_orders, authed_service, user_service,
    };

    use super::*;

    fn make_order(uuid: OrderUuid, user: UserUuid) -> Order {
        Order {
            uuid,
            user_uuid: user,
            status: OrderStatus::New,
            total_price: 300,
            delivery_address: "1 Petal Lane".to_string(),
            delivery_date: "2026-08-14".to_string(),
            delivery_time: "10:00-12:00".to_string(),
            comment: String::new(),
            items: Vec::new(),
            created_at: Timestamp::UNIX_EPOCH,
            updated_at: Timestamp::UNIX_EPOCH,
        }
    }

    #[tokio::test]
    async fn test_owner_reads_their_order() -> TestResult {
        let uuid = OrderUuid::new();
        let owner = UserUuid::from_uuid(TEST_USER_UUID);

        let mut orders = MockOrdersService::new();

        orders
            .expect_get_order()
            .once()
            .withf(move |o| *o == uuid)
            .return_once(move |o| Ok(make_order(o, owner)));

        let service = user_service(
            app_context_with_orders(orders),
            Router::with_path("orders/{order}").get(handler),
        );

        let response: OrderResponse =
            TestClient::get(format!("http://example.com/orders/{uuid}"))
                .send(&service)
                .await
                .take_json()
                .await?;

        assert_eq!(response.status, "new");

        Ok(())
    }

    #[tokio::test]
    async fn test_foreign_order_reads_as_404_for_customers() -> TestResult {
        let uuid = OrderUuid::new();

        let mut orders = MockOrdersService::new();

        orders
            .expect_get_order()
            .once()
            .return_once(move |o| Ok(make_order(o, UserUuid::new())));

        let service = user_service(
            app_context_with_orders(orders),
            Router::with_path("orders/{order}").get(handler),
        );

        let res = TestClient::get(format!("http://example.com/orders/{uuid}"))
            .send(&service)
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }

    #[tokio::test]
    async fn test_admin_reads_any_order() -> TestResult {
        let uuid = OrderUuid::new();

        let mut orders = MockOrdersService::new();

        orders
            .expect_get_order()
            .once()
            .return_once(move |o| Ok(make_order(o, UserUuid::new())));

        let service = authed_service(
            app_context_with_orders(orders),
            Router::with_path("orders/{order}").get(handler),
        );

        let res = TestClient::get(format!("http://example.com/orders/{uuid}"))
            .send(&service)
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        Ok(())
    }
}
