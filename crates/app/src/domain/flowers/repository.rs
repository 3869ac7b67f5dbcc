//! Flowers Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query, query_as};

use crate::domain::flowers::models::{Flower, FlowerUuid};

const LIST_FLOWERS_SQL: &str = include_str!("sql/list_flowers.sql");
const GET_FLOWER_SQL: &str = include_str!("sql/get_flower.sql");
const CREATE_FLOWER_SQL: &str = include_str!("sql/create_flower.sql");
const UPDATE_FLOWER_SQL: &str = include_str!("sql/update_flower.sql");
const DELETE_FLOWER_SQL: &str = include_str!("sql/delete_flower.sql");

pub(crate) fn price_to_i64(price: u64) -> Result<i64, sqlx::Error> {
    i64::try_from(price).map_err(|e| sqlx::Error::ColumnDecode {
        index: "price".to_string(),
        source: Box::new(e),
    })
}

pub(crate) fn price_from_i64(price: i64) -> Result<u64, sqlx::Error> {
    u64::try_from(price).map_err(|e| sqlx::Error::ColumnDecode {
        index: "price".to_string(),
        source: Box::new(e),
    })
}

#[derive(Debug, Clone, Default)]
pub(crate) struct PgFlowersRepository;

impl PgFlowersRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn list_flowers(
        &self,
        tx: &mut Transaction<'_, Postgres>,
    ) -> Result<Vec<Flower>, sqlx::Error> {
        query_as::<Postgres, Flower>(LIST_FLOWERS_SQL)
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn get_flower(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        flower: FlowerUuid,
    ) -> Result<Flower, sqlx::Error> {
        query_as::<Postgres, Flower>(GET_FLOWER_SQL)
            .bind(flower.into_uuid())
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn create_flower(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        flower: FlowerUuid,
        name: &str,
        price: u64,
    ) -> Result<Flower, sqlx::Error> {
        query_as::<Postgres, Flower>(CREATE_FLOWER_SQL)
            .bind(flower.into_uuid())
            .bind(name)
            .bind(price_to_i64(price)?)
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn update_flower(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        flower: FlowerUuid,
        name: &str,
        price: u64,
    ) -> Result<Flower, sqlx::Error> {
        query_as::<Postgres, Flower>(UPDATE_FLOWER_SQL)
            .bind(flower.into_uuid())
            .bind(name)
            .bind(price_to_i64(price)?)
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn delete_flower(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        flower: FlowerUuid,
    ) -> Result<u64, sqlx::Error> {
        let rows_affected = query(DELETE_FLOWER_SQL)
            .bind(flower.into_uuid())
            .execute(&mut **tx)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }
}

impl<'r> FromRow<'r, PgRow> for Flower {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            uuid: FlowerUuid::from_uuid(row.try_get("uuid")?),
            name: row.try_get("name")?,
            price: price_from_i64(row.try_get("price")?)?,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            updated_at: row.try_get::<SqlxTimestamp, _>("updated_at")?.to_jiff(),
        })
    }
}
