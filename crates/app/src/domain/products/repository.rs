//! Products Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query, query_as};

use crate::domain::{
    categories::models::SubcategoryUuid,
    flowers::repository::{price_from_i64, price_to_i64},
    products::models::{Product, ProductKind, ProductUuid},
};

const LIST_PRODUCTS_SQL: &str = include_str!("sql/list_products.sql");
const GET_PRODUCT_SQL: &str = include_str!("sql/get_product.sql");
const GET_PRODUCT_FOR_UPDATE_SQL: &str = include_str!("sql/get_product_for_update.sql");
const CREATE_PRODUCT_SQL: &str = include_str!("sql/create_product.sql");
const UPDATE_PRODUCT_SQL: &str = include_str!("sql/update_product.sql");
const SET_PRODUCT_PRICE_SQL: &str = include_str!("sql/set_product_price.sql");
const INCREMENT_PURCHASES_SQL: &str = include_str!("sql/increment_purchases.sql");
const DELETE_PRODUCT_SQL: &str = include_str!("sql/delete_product.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgProductsRepository;

impl PgProductsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn list_products(
        &self,
        tx: &mut Transaction<'_, Postgres>,
    ) -> Result<Vec<Product>, sqlx::Error> {
        query_as::<Postgres, Product>(LIST_PRODUCTS_SQL)
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn get_product(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        product: ProductUuid,
    ) -> Result<Product, sqlx::Error> {
        query_as::<Postgres, Product>(GET_PRODUCT_SQL)
            .bind(product.into_uuid())
            .fetch_one(&mut **tx)
            .await
    }

    /// Fetch a product with a row lock, serialising concurrent composition
    /// and status edits against the same product.
    pub(crate) async fn get_product_for_update(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        product: ProductUuid,
    ) -> Result<Product, sqlx::Error> {
        query_as::<Postgres, Product>(GET_PRODUCT_FOR_UPDATE_SQL)
            .bind(product.into_uuid())
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn create_product(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        product: ProductUuid,
        name: &str,
        description: &str,
        price: u64,
        kind: ProductKind,
        subcategory: SubcategoryUuid,
    ) -> Result<Product, sqlx::Error> {
        query_as::<Postgres, Product>(CREATE_PRODUCT_SQL)
            .bind(product.into_uuid())
            .bind(name)
            .bind(description)
            .bind(price_to_i64(price)?)
            .bind(kind.as_str())
            .bind(subcategory.into_uuid())
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn update_product(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        product: ProductUuid,
        name: &str,
        description: &str,
        price: u64,
        kind: ProductKind,
        subcategory: SubcategoryUuid,
    ) -> Result<Product, sqlx::Error> {
        query_as::<Postgres, Product>(UPDATE_PRODUCT_SQL)
            .bind(product.into_uuid())
            .bind(name)
            .bind(description)
            .bind(price_to_i64(price)?)
            .bind(kind.as_str())
            .bind(subcategory.into_uuid())
            .fetch_one(&mut **tx)
            .await
    }

    /// Write a derived bouquet price.
    pub(crate) async fn set_product_price(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        product: ProductUuid,
        price: u64,
    ) -> Result<(), sqlx::Error> {
        query(SET_PRODUCT_PRICE_SQL)
            .bind(product.into_uuid())
            .bind(price_to_i64(price)?)
            .execute(&mut **tx)
            .await?;

        Ok(())
    }

    pub(crate) async fn increment_purchases(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        product: ProductUuid,
        by: u32,
    ) -> Result<(), sqlx::Error> {
        query(INCREMENT_PURCHASES_SQL)
            .bind(product.into_uuid())
            .bind(i64::from(by))
            .execute(&mut **tx)
            .await?;

        Ok(())
    }

    pub(crate) async fn delete_product(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        product: ProductUuid,
    ) -> Result<u64, sqlx::Error> {
        let rows_affected = query(DELETE_PRODUCT_SQL)
            .bind(product.into_uuid())
            .execute(&mut **tx)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }
}

impl<'r> FromRow<'r, PgRow> for Product {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        let kind: String = row.try_get("kind")?;

        let kind = kind
            .parse::<ProductKind>()
            .map_err(|e| sqlx::Error::ColumnDecode {
                index: "kind".to_string(),
                source: Box::new(e),
            })?;

        let purchases_count: i64 = row.try_get("purchases_count")?;

        let purchases_count =
            u64::try_from(purchases_count).map_err(|e| sqlx::Error::ColumnDecode {
                index: "purchases_count".to_string(),
                source: Box::new(e),
            })?;

        Ok(Self {
            uuid: ProductUuid::from_uuid(row.try_get("uuid")?),
            name: row.try_get("name")?,
            description: row.try_get("description")?,
            price: price_from_i64(row.try_get("price")?)?,
            kind,
            subcategory_uuid: SubcategoryUuid::from_uuid(row.try_get("subcategory_uuid")?),
            rating: row.try_get("rating")?,
            purchases_count,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            updated_at: row.try_get::<SqlxTimestamp, _>("updated_at")?.to_jiff(),
        })
    }
}
