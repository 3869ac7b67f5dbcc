//! Orders service.
//!
//! Order items snapshot the product's name, price, and kind at creation
//! time; later product edits never rewrite order history. Status changes go
//! through the [`fleuron::status`] allow-list, with `force` as the admin
//! override and an optional `updated_at` precondition to surface lost
//! updates.

use async_trait::async_trait;
use jiff::civil::Date;
use mockall::automock;
use tracing::info;

use fleuron::{Price, prices::line_total, status};

use crate::{
    database::Db,
    domain::{
        orders::{
            data::{NewOrder, OrderListFilter, StatusChange},
            errors::OrdersServiceError,
            models::{Order, OrderUuid, Page},
            repositories::{PgOrderItemsRepository, PgOrdersRepository},
        },
        products::PgProductsRepository,
    },
};

/// Upper bound on the admin listing page size.
const MAX_PAGE_LIMIT: u32 = 100;

#[derive(Debug, Clone)]
pub struct PgOrdersService {
    db: Db,
    orders_repository: PgOrdersRepository,
    items_repository: PgOrderItemsRepository,
    products_repository: PgProductsRepository,
}

impl PgOrdersService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            orders_repository: PgOrdersRepository::new(),
            items_repository: PgOrderItemsRepository::new(),
            products_repository: PgProductsRepository::new(),
        }
    }
}

#[async_trait]
impl OrdersService for PgOrdersService {
    async fn create_order(&self, order: NewOrder) -> Result<Order, OrdersServiceError> {
        if order.items.is_empty() {
            return Err(OrdersServiceError::EmptyOrder);
        }

        if order.delivery_date.parse::<Date>().is_err() {
            return Err(OrdersServiceError::InvalidDeliveryDate);
        }

        let mut tx = self.db.begin().await?;

        let mut total = Price::ZERO;
        let mut snapshots = Vec::with_capacity(order.items.len());

        for item in &order.items {
            if item.quantity == 0 {
                return Err(OrdersServiceError::InvalidData);
            }

            let product = match self
                .products_repository
                .get_product(&mut tx, item.product_uuid)
                .await
            {
                Ok(product) => product,
                Err(sqlx::Error::RowNotFound) => {
                    return Err(OrdersServiceError::ProductNotFound);
                }
                Err(error) => return Err(error.into()),
            };

            total = total.checked_add(line_total(Price::new(product.price), item.quantity)?)?;

            snapshots.push((item, product));
        }

        let created = self
            .orders_repository
            .create_order(&mut tx, &order, total.get())
            .await?;

        for (item, product) in snapshots {
            self.items_repository
                .create_item(
                    &mut tx,
                    item.uuid,
                    order.uuid,
                    item.product_uuid,
                    &product.name,
                    product.price,
                    item.quantity,
                    product.kind,
                )
                .await?;

            self.products_repository
                .increment_purchases(&mut tx, item.product_uuid, item.quantity)
                .await?;
        }

        let items = self.items_repository.list_items(&mut tx, order.uuid).await?;

        tx.commit().await?;

        Ok(Order { items, ..created })
    }

    async fn get_order(&self, order: OrderUuid) -> Result<Order, OrdersServiceError> {
        let mut tx = self.db.begin().await?;

        let mut stored = self.orders_repository.get_order(&mut tx, order).await?;

        let items = self.items_repository.list_items(&mut tx, order).await?;

        tx.commit().await?;

        stored.items = items;

        Ok(stored)
    }

    async fn list_orders(
        &self,
        filter: OrderListFilter,
    ) -> Result<Page<Order>, OrdersServiceError> {
        let page = filter.page.max(1);
        let limit = filter.limit.clamp(1, MAX_PAGE_LIMIT);
        let offset = i64::from(page - 1) * i64::from(limit);

        let mut tx = self.db.begin().await?;

        let orders = self
            .orders_repository
            .list_orders(
                &mut tx,
                filter.status,
                filter.start_date,
                filter.end_date,
                i64::from(limit),
                offset,
            )
            .await?;

        let total = self
            .orders_repository
            .count_orders(&mut tx, filter.status, filter.start_date, filter.end_date)
            .await?;

        tx.commit().await?;

        Ok(Page {
            items: orders,
            total: u64::try_from(total).unwrap_or_default(),
            page,
            limit,
        })
    }

    async fn set_status(
        &self,
        order: OrderUuid,
        change: StatusChange,
    ) -> Result<Order, OrdersServiceError> {
        let mut tx = self.db.begin().await?;

        let current = self
            .orders_repository
            .get_order_for_update(&mut tx, order)
            .await?;

        if let Some(expected) = change.expected_updated_at
            && expected != current.updated_at
        {
            return Err(OrdersServiceError::Conflict);
        }

        let next = status::transition(current.status, change.status, change.force)?;

        if change.force && !current.status.allows(change.status) {
            info!(%order, from = %current.status, to = %next, "forced order status override");
        }

        let mut updated = self.orders_repository.set_status(&mut tx, order, next).await?;

        let items = self.items_repository.list_items(&mut tx, order).await?;

        tx.commit().await?;

        updated.items = items;

        Ok(updated)
    }
}

#[automock]
#[async_trait]
pub trait OrdersService: Send + Sync {
    /// Creates an order, snapshotting product name/price/kind into its
    /// items and bumping each product's purchase counter.
    async fn create_order(&self, order: NewOrder) -> Result<Order, OrdersServiceError>;

    /// Retrieve a single order with its items.
    async fn get_order(&self, order: OrderUuid) -> Result<Order, OrdersServiceError>;

    /// Admin listing with pagination and status/date filters.
    async fn list_orders(
        &self,
        filter: OrderListFilter,
    ) -> Result<Page<Order>, OrdersServiceError>;

    /// The sole order mutation: a status change governed by the transition
    /// allow-list.
    async fn set_status(
        &self,
        order: OrderUuid,
        change: StatusChange,
    ) -> Result<Order, OrdersServiceError>;
}
