//! Order Data

use jiff::Timestamp;

use fleuron::OrderStatus;

use crate::domain::{
    orders::models::{OrderItemUuid, OrderUuid},
    products::models::ProductUuid,
    users::models::UserUuid,
};

/// New Order Item Data
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NewOrderItem {
    pub uuid: OrderItemUuid,
    pub product_uuid: ProductUuid,
    pub quantity: u32,
}

/// New Order Data
#[derive(Debug, Clone, PartialEq)]
pub struct NewOrder {
    pub uuid: OrderUuid,
    pub user_uuid: UserUuid,
    pub delivery_address: String,

    /// Civil date in `YYYY-MM-DD` form.
    pub delivery_date: String,

    pub delivery_time: String,
    pub comment: String,
    pub items: Vec<NewOrderItem>,
}

/// Requested status change for an order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StatusChange {
    pub status: OrderStatus,

    /// Admin override: bypass the transition allow-list.
    pub force: bool,

    /// Optimistic-concurrency precondition: refuse the change when the
    /// stored row's `updated_at` no longer matches.
    pub expected_updated_at: Option<Timestamp>,
}

/// Admin listing filter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrderListFilter {
    /// 1-based page number.
    pub page: u32,

    /// Page size; clamped to 1..=100.
    pub limit: u32,

    pub status: Option<OrderStatus>,

    /// Inclusive lower bound on `created_at`.
    pub start_date: Option<Timestamp>,

    /// Inclusive upper bound on `created_at`.
    pub end_date: Option<Timestamp>,
}

impl Default for OrderListFilter {
    fn default() -> Self {
        Self {
            page: 1,
            limit: 20,
            status: None,
            start_date: None,
            end_date: None,
        }
    }
}
