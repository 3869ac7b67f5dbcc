//! Bouquet Lines Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query, query_as};

use crate::domain::{
    bouquets::models::{BouquetLine, BouquetLineUuid},
    flowers::models::FlowerUuid,
    flowers::repository::{price_from_i64, price_to_i64},
    products::models::ProductUuid,
};

const LIST_LINES_SQL: &str = include_str!("sql/list_lines.sql");
const GET_LINE_SQL: &str = include_str!("sql/get_line.sql");
const UPSERT_LINE_SQL: &str = include_str!("sql/upsert_line.sql");
const INSERT_LINE_SQL: &str = include_str!("sql/insert_line.sql");
const SET_LINE_QUANTITY_SQL: &str = include_str!("sql/set_line_quantity.sql");
const DELETE_LINE_SQL: &str = include_str!("sql/delete_line.sql");
const DELETE_LINES_FOR_BOUQUET_SQL: &str = include_str!("sql/delete_lines_for_bouquet.sql");

fn quantity_to_i32(quantity: u32) -> Result<i32, sqlx::Error> {
    i32::try_from(quantity).map_err(|e| sqlx::Error::ColumnDecode {
        index: "quantity".to_string(),
        source: Box::new(e),
    })
}

#[derive(Debug, Clone, Default)]
pub(crate) struct PgBouquetLinesRepository;

impl PgBouquetLinesRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn list_lines(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        bouquet: ProductUuid,
    ) -> Result<Vec<BouquetLine>, sqlx::Error> {
        query_as::<Postgres, BouquetLine>(LIST_LINES_SQL)
            .bind(bouquet.into_uuid())
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn get_line(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        line: BouquetLineUuid,
    ) -> Result<BouquetLine, sqlx::Error> {
        query_as::<Postgres, BouquetLine>(GET_LINE_SQL)
            .bind(line.into_uuid())
            .fetch_one(&mut **tx)
            .await
    }

    /// Insert a line, or replace the quantity of the existing line for the
    /// same (bouquet, flower) pair. The existing line keeps its original
    /// unit-price snapshot.
    pub(crate) async fn upsert_line(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        line: BouquetLineUuid,
        bouquet: ProductUuid,
        flower: FlowerUuid,
        quantity: u32,
        unit_price: u64,
    ) -> Result<BouquetLine, sqlx::Error> {
        query_as::<Postgres, BouquetLine>(UPSERT_LINE_SQL)
            .bind(line.into_uuid())
            .bind(bouquet.into_uuid())
            .bind(flower.into_uuid())
            .bind(quantity_to_i32(quantity)?)
            .bind(price_to_i64(unit_price)?)
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn insert_line(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        line: BouquetLineUuid,
        bouquet: ProductUuid,
        flower: FlowerUuid,
        quantity: u32,
        unit_price: u64,
    ) -> Result<BouquetLine, sqlx::Error> {
        query_as::<Postgres, BouquetLine>(INSERT_LINE_SQL)
            .bind(line.into_uuid())
            .bind(bouquet.into_uuid())
            .bind(flower.into_uuid())
            .bind(quantity_to_i32(quantity)?)
            .bind(price_to_i64(unit_price)?)
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn set_line_quantity(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        line: BouquetLineUuid,
        quantity: u32,
    ) -> Result<BouquetLine, sqlx::Error> {
        query_as::<Postgres, BouquetLine>(SET_LINE_QUANTITY_SQL)
            .bind(line.into_uuid())
            .bind(quantity_to_i32(quantity)?)
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn delete_line(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        line: BouquetLineUuid,
    ) -> Result<u64, sqlx::Error> {
        let rows_affected = query(DELETE_LINE_SQL)
            .bind(line.into_uuid())
            .execute(&mut **tx)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }

    pub(crate) async fn delete_lines_for_bouquet(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        bouquet: ProductUuid,
    ) -> Result<u64, sqlx::Error> {
        let rows_affected = query(DELETE_LINES_FOR_BOUQUET_SQL)
            .bind(bouquet.into_uuid())
            .execute(&mut **tx)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }
}

impl<'r> FromRow<'r, PgRow> for BouquetLine {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        let quantity: i32 = row.try_get("quantity")?;

        let quantity = u32::try_from(quantity).map_err(|e| sqlx::Error::ColumnDecode {
            index: "quantity".to_string(),
            source: Box::new(e),
        })?;

        Ok(Self {
            uuid: BouquetLineUuid::from_uuid(row.try_get("uuid")?),
            bouquet_uuid: ProductUuid::from_uuid(row.try_get("bouquet_uuid")?),
            flower_uuid: FlowerUuid::from_uuid(row.try_get("flower_uuid")?),
            quantity,
            unit_price: price_from_i64(row.try_get("unit_price")?)?,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            updated_at: row.try_get::<SqlxTimestamp, _>("updated_at")?.to_jiff(),
        })
    }
}
