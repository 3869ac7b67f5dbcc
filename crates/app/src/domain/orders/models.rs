//! Order Models

use jiff::Timestamp;

use fleuron::OrderStatus;

use crate::{
    domain::{
        products::models::{ProductKind, ProductUuid},
        users::models::UserUuid,
    },
    uuids::TypedUuid,
};

/// Order UUID
pub type OrderUuid = TypedUuid<Order>;

/// Order Item UUID
pub type OrderItemUuid = TypedUuid<OrderItem>;

/// Order Model
///
/// Listings return orders without their items; [`Order::items`] is filled
/// by the single-order read paths.
#[derive(Debug, Clone)]
pub struct Order {
    pub uuid: OrderUuid,
    pub user_uuid: UserUuid,
    pub status: OrderStatus,

    /// Sum of item snapshots in minor units, fixed at creation.
    pub total_price: u64,

    pub delivery_address: String,
    pub delivery_date: String,
    pub delivery_time: String,
    pub comment: String,
    pub items: Vec<OrderItem>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Order line with name/price/kind snapshotted at order creation. The
/// snapshots never change, even when the referenced product does.
#[derive(Debug, Clone)]
pub struct OrderItem {
    pub uuid: OrderItemUuid,
    pub product_uuid: ProductUuid,
    pub product_name: String,
    pub unit_price: u64,
    pub quantity: u32,
    pub product_kind: ProductKind,
}

/// One page of a filtered listing; `total` counts every row matching the
/// filter, not just this page.
#[derive(Debug, Clone)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: u64,
    pub page: u32,
    pub limit: u32,
}
