//! Admin Order Index Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::QueryParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use fleuron::OrderStatus;
use fleuron_app::domain::orders::data::OrderListFilter;

use crate::{
    extensions::{DepotExt as _, PageParams, TimestampParamExt as _},
    orders::{errors::into_status_error, get::OrderResponse},
    state::State,
};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct OrdersPageResponse {
    /// One page of orders, newest first, without item lines
    pub orders: Vec<OrderResponse>,

    /// Number of orders matching the filter across all pages
    pub total: u64,

    /// 1-based page number served
    pub page: u32,

    /// Page size served
    pub limit: u32,
}

/// Admin Order Index Handler
///
/// Paginated, filterable listing of all orders.
#[endpoint(
    tags("orders"),
    summary = "List Orders (admin)",
    security(("session_cookie" = []))
)]
pub(crate) async fn handler(
    page: QueryParam<u32, false>,
    limit: QueryParam<u32, false>,
    status: QueryParam<String, false>,
    start_date: QueryParam<String, false>,
    end_date: QueryParam<String, false>,
    depot: &mut Depot,
) -> Result<Json<OrdersPageResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let page_params = PageParams::resolve(page, limit);

    let status = status
        .into_inner()
        .map(|value| value.parse::<OrderStatus>())
        .transpose()
        .map_err(|_source| StatusError::bad_request().brief("Unknown order status"))?;

    let filter = OrderListFilter {
        page: page_params.page,
        limit: page_params.limit,
        status,
        start_date: start_date.into_optional_timestamp("could not parse \"start_date\"")?,
        end_date: end_date.into_optional_timestamp("could not parse \"end_date\"")?,
    };

    let page = state
        .app
        .orders
        .list_orders(filter)
        .await
        .map_err(into_status_error)?;

    Ok(Json(OrdersPageResponse {
        orders: page.items.into_iter().map(Into::into).collect(),
        total: page.total,
        page: page.page,
        limit: page.limit,
    }))
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use fleuron_app::domain::{
        orders::{
            MockOrdersService,
            models::{Order, OrderUuid, Page},
        },
        users::models::UserUuid,
    };

    use crate::test_helpers::{app_context_with_orders, authed_service};

    use super::*;

    fn make_order(uuid: OrderUuid) -> Order {
        Order {
            uuid,
            user_uuid: UserUuid::new(),
            status: OrderStatus::New,
            total_price: 300,
            delivery_address: "1 Petal Lane".to_string(),
            delivery_date: "2026-08-14".to_string(),
            delivery_time: String::new(),
            comment: String::new(),
            items: Vec::new(),
            created_at: Timestamp::UNIX_EPOCH,
            updated_at: Timestamp::UNIX_EPOCH,
        }
    }

    fn make_service(orders: MockOrdersService) -> Service {
        authed_service(
            app_context_with_orders(orders),
            Router::with_path("orders/admin/all").get(handler),
        )
    }

    #[tokio::test]
    async fn test_index_forwards_pagination_and_filters() -> TestResult {
        let status: OrderStatus = "processing".parse()?;
        let start: Timestamp = "2026-08-01T00:00:00Z".parse()?;

        let mut orders = MockOrdersService::new();

        orders
            .expect_list_orders()
            .once()
            .withf(move |filter| {
                filter.page == 2
                    && filter.limit == 10
                    && filter.status == Some(status)
                    && filter.start_date == Some(start)
                    && filter.end_date.is_none()
            })
            .return_once(|filter| {
                Ok(Page {
                    items: (0..5).map(|_n| make_order(OrderUuid::new())).collect(),
                    total: 15,
                    page: filter.page,
                    limit: filter.limit,
                })
            });

        let response: OrdersPageResponse = TestClient::get(
            "http://example.com/orders/admin/all?page=2&limit=10&status=processing&start_date=2026-08-01T00:00:00Z",
        )
        .send(&make_service(orders))
        .await
        .take_json()
        .await?;

        assert_eq!(response.orders.len(), 5, "page two holds the remainder");
        assert_eq!(response.total, 15, "total covers every matching row");
        assert_eq!(response.page, 2);
        assert_eq!(response.limit, 10);

        Ok(())
    }

    #[tokio::test]
    async fn test_defaults_apply_without_query_params() -> TestResult {
        let mut orders = MockOrdersService::new();

        orders
            .expect_list_orders()
            .once()
            .withf(|filter| filter.page == 1 && filter.limit == 20 && filter.status.is_none())
            .return_once(|filter| {
                Ok(Page {
                    items: Vec::new(),
                    total: 0,
                    page: filter.page,
                    limit: filter.limit,
                })
            });

        let res = TestClient::get("http://example.com/orders/admin/all")
            .send(&make_service(orders))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        Ok(())
    }

    #[tokio::test]
    async fn test_unknown_status_filter_returns_400() -> TestResult {
        let res = TestClient::get("http://example.com/orders/admin/all?status=shipped")
            .send(&make_service(MockOrdersService::new()))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }
}
