//! Reviews service.

use async_trait::async_trait;
use mockall::automock;

use crate::{
    database::Db,
    domain::{
        products::models::ProductUuid,
        reviews::{
            data::{NewReview, ReviewUpdate},
            errors::ReviewsServiceError,
            models::{Review, ReviewUuid},
            repository::PgReviewsRepository,
        },
    },
};

const RATING_RANGE: std::ops::RangeInclusive<u8> = 1..=5;

#[derive(Debug, Clone)]
pub struct PgReviewsService {
    db: Db,
    repository: PgReviewsRepository,
}

impl PgReviewsService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgReviewsRepository::new(),
        }
    }
}

#[async_trait]
impl ReviewsService for PgReviewsService {
    async fn list_reviews(
        &self,
        product: Option<ProductUuid>,
    ) -> Result<Vec<Review>, ReviewsServiceError> {
        let mut tx = self.db.begin().await?;

        let reviews = self.repository.list_reviews(&mut tx, product).await?;

        tx.commit().await?;

        Ok(reviews)
    }

    async fn get_review(&self, review: ReviewUuid) -> Result<Review, ReviewsServiceError> {
        let mut tx = self.db.begin().await?;

        let review = self.repository.get_review(&mut tx, review).await?;

        tx.commit().await?;

        Ok(review)
    }

    async fn create_review(&self, review: NewReview) -> Result<Review, ReviewsServiceError> {
        if !RATING_RANGE.contains(&review.rating) {
            return Err(ReviewsServiceError::InvalidRating);
        }

        let mut tx = self.db.begin().await?;

        let created = self
            .repository
            .create_review(
                &mut tx,
                review.uuid,
                review.product_uuid,
                review.user_uuid,
                review.rating,
                &review.body,
            )
            .await?;

        self.repository
            .refresh_product_rating(&mut tx, review.product_uuid)
            .await?;

        tx.commit().await?;

        Ok(created)
    }

    async fn update_review(
        &self,
        review: ReviewUuid,
        update: ReviewUpdate,
    ) -> Result<Review, ReviewsServiceError> {
        if !RATING_RANGE.contains(&update.rating) {
            return Err(ReviewsServiceError::InvalidRating);
        }

        let mut tx = self.db.begin().await?;

        let updated = self
            .repository
            .update_review(&mut tx, review, update.rating, &update.body)
            .await?;

        self.repository
            .refresh_product_rating(&mut tx, updated.product_uuid)
            .await?;

        tx.commit().await?;

        Ok(updated)
    }

    async fn delete_review(&self, review: ReviewUuid) -> Result<(), ReviewsServiceError> {
        let mut tx = self.db.begin().await?;

        let stored = self.repository.get_review(&mut tx, review).await?;

        let rows_affected = self.repository.delete_review(&mut tx, review).await?;

        if rows_affected == 0 {
            return Err(ReviewsServiceError::NotFound);
        }

        self.repository
            .refresh_product_rating(&mut tx, stored.product_uuid)
            .await?;

        tx.commit().await?;

        Ok(())
    }
}

#[automock]
#[async_trait]
pub trait ReviewsService: Send + Sync {
    /// Retrieves reviews, optionally narrowed to one product.
    async fn list_reviews(
        &self,
        product: Option<ProductUuid>,
    ) -> Result<Vec<Review>, ReviewsServiceError>;

    /// Retrieve a single review.
    async fn get_review(&self, review: ReviewUuid) -> Result<Review, ReviewsServiceError>;

    /// Creates a review and refreshes the product's aggregate rating.
    async fn create_review(&self, review: NewReview) -> Result<Review, ReviewsServiceError>;

    /// Updates a review and refreshes the product's aggregate rating.
    async fn update_review(
        &self,
        review: ReviewUuid,
        update: ReviewUpdate,
    ) -> Result<Review, ReviewsServiceError>;

    /// Deletes a review and refreshes the product's aggregate rating.
    async fn delete_review(&self, review: ReviewUuid) -> Result<(), ReviewsServiceError>;
}
