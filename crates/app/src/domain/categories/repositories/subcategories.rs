//! Subcategories Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query, query_as};

use crate::domain::categories::models::{CategoryUuid, Subcategory, SubcategoryUuid};

const LIST_SUBCATEGORIES_SQL: &str = include_str!("sql/list_subcategories.sql");
const GET_SUBCATEGORY_SQL: &str = include_str!("sql/get_subcategory.sql");
const CREATE_SUBCATEGORY_SQL: &str = include_str!("sql/create_subcategory.sql");
const UPDATE_SUBCATEGORY_SQL: &str = include_str!("sql/update_subcategory.sql");
const DELETE_SUBCATEGORY_SQL: &str = include_str!("sql/delete_subcategory.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgSubcategoriesRepository;

impl PgSubcategoriesRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn list_subcategories(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        category: CategoryUuid,
    ) -> Result<Vec<Subcategory>, sqlx::Error> {
        query_as::<Postgres, Subcategory>(LIST_SUBCATEGORIES_SQL)
            .bind(category.into_uuid())
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn get_subcategory(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        subcategory: SubcategoryUuid,
    ) -> Result<Subcategory, sqlx::Error> {
        query_as::<Postgres, Subcategory>(GET_SUBCATEGORY_SQL)
            .bind(subcategory.into_uuid())
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn create_subcategory(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        subcategory: SubcategoryUuid,
        category: CategoryUuid,
        name: &str,
    ) -> Result<Subcategory, sqlx::Error> {
        query_as::<Postgres, Subcategory>(CREATE_SUBCATEGORY_SQL)
            .bind(subcategory.into_uuid())
            .bind(category.into_uuid())
            .bind(name)
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn update_subcategory(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        subcategory: SubcategoryUuid,
        name: &str,
    ) -> Result<Subcategory, sqlx::Error> {
        query_as::<Postgres, Subcategory>(UPDATE_SUBCATEGORY_SQL)
            .bind(subcategory.into_uuid())
            .bind(name)
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn delete_subcategory(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        subcategory: SubcategoryUuid,
    ) -> Result<u64, sqlx::Error> {
        let rows_affected = query(DELETE_SUBCATEGORY_SQL)
            .bind(subcategory.into_uuid())
            .execute(&mut **tx)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }
}

impl<'r> FromRow<'r, PgRow> for Subcategory {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            uuid: SubcategoryUuid::from_uuid(row.try_get("uuid")?),
            category_uuid: CategoryUuid::from_uuid(row.try_get("category_uuid")?),
            name: row.try_get("name")?,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            updated_at: row.try_get::<SqlxTimestamp, _>("updated_at")?.to_jiff(),
        })
    }
}
