//! Files service.

use async_trait::async_trait;
use mockall::automock;

use crate::{
    database::Db,
    domain::files::{
        data::NewStoredFile,
        errors::FilesServiceError,
        models::{StoredFile, StoredFileUuid},
        repository::PgFilesRepository,
    },
};

#[derive(Debug, Clone)]
pub struct PgFilesService {
    db: Db,
    repository: PgFilesRepository,
}

impl PgFilesService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgFilesRepository::new(),
        }
    }
}

#[async_trait]
impl FilesService for PgFilesService {
    async fn list_files(&self) -> Result<Vec<StoredFile>, FilesServiceError> {
        let mut tx = self.db.begin().await?;

        let files = self.repository.list_files(&mut tx).await?;

        tx.commit().await?;

        Ok(files)
    }

    async fn get_file(&self, file: StoredFileUuid) -> Result<StoredFile, FilesServiceError> {
        let mut tx = self.db.begin().await?;

        let file = self.repository.get_file(&mut tx, file).await?;

        tx.commit().await?;

        Ok(file)
    }

    async fn create_file(&self, file: NewStoredFile) -> Result<StoredFile, FilesServiceError> {
        let mut tx = self.db.begin().await?;

        let created = self
            .repository
            .create_file(
                &mut tx,
                file.uuid,
                &file.file_name,
                &file.content_type,
                file.size_bytes,
                &file.url,
            )
            .await?;

        tx.commit().await?;

        Ok(created)
    }

    async fn delete_file(&self, file: StoredFileUuid) -> Result<(), FilesServiceError> {
        let mut tx = self.db.begin().await?;

        let rows_affected = self.repository.delete_file(&mut tx, file).await?;

        if rows_affected == 0 {
            return Err(FilesServiceError::NotFound);
        }

        tx.commit().await?;

        Ok(())
    }
}

#[automock]
#[async_trait]
pub trait FilesService: Send + Sync {
    /// Retrieves all file metadata records.
    async fn list_files(&self) -> Result<Vec<StoredFile>, FilesServiceError>;

    /// Retrieve a single file metadata record.
    async fn get_file(&self, file: StoredFileUuid) -> Result<StoredFile, FilesServiceError>;

    /// Records metadata for a file held by the external store.
    async fn create_file(&self, file: NewStoredFile) -> Result<StoredFile, FilesServiceError>;

    /// Deletes a file metadata record.
    async fn delete_file(&self, file: StoredFileUuid) -> Result<(), FilesServiceError>;
}
