//! Stored Files Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query, query_as};

use crate::domain::files::models::{StoredFile, StoredFileUuid};

const LIST_FILES_SQL: &str = include_str!("sql/list_files.sql");
const GET_FILE_SQL: &str = include_str!("sql/get_file.sql");
const CREATE_FILE_SQL: &str = include_str!("sql/create_file.sql");
const DELETE_FILE_SQL: &str = include_str!("sql/delete_file.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgFilesRepository;

impl PgFilesRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn list_files(
        &self,
        tx: &mut Transaction<'_, Postgres>,
    ) -> Result<Vec<StoredFile>, sqlx::Error> {
        query_as::<Postgres, StoredFile>(LIST_FILES_SQL)
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn get_file(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        file: StoredFileUuid,
    ) -> Result<StoredFile, sqlx::Error> {
        query_as::<Postgres, StoredFile>(GET_FILE_SQL)
            .bind(file.into_uuid())
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn create_file(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        file: StoredFileUuid,
        file_name: &str,
        content_type: &str,
        size_bytes: u64,
        url: &str,
    ) -> Result<StoredFile, sqlx::Error> {
        let size = i64::try_from(size_bytes).map_err(|e| sqlx::Error::ColumnDecode {
            index: "size_bytes".to_string(),
            source: Box::new(e),
        })?;

        query_as::<Postgres, StoredFile>(CREATE_FILE_SQL)
            .bind(file.into_uuid())
            .bind(file_name)
            .bind(content_type)
            .bind(size)
            .bind(url)
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn delete_file(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        file: StoredFileUuid,
    ) -> Result<u64, sqlx::Error> {
        let rows_affected = query(DELETE_FILE_SQL)
            .bind(file.into_uuid())
            .execute(&mut **tx)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }
}

impl<'r> FromRow<'r, PgRow> for StoredFile {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        let size_bytes: i64 = row.try_get("size_bytes")?;

        let size_bytes = u64::try_from(size_bytes).map_err(|e| sqlx::Error::ColumnDecode {
            index: "size_bytes".to_string(),
            source: Box::new(e),
        })?;

        Ok(Self {
            uuid: StoredFileUuid::from_uuid(row.try_get("uuid")?),
            file_name: row.try_get("file_name")?,
            content_type: row.try_get("content_type")?,
            size_bytes,
            url: row.try_get("url")?,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
        })
    }
}
