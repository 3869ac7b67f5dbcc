//! Test context for service-level integration tests.

use jiff::SignedDuration;
use uuid::Uuid;

use crate::{
    auth::PgAuthService,
    database::Db,
    domain::{
        bouquets::PgBouquetsService,
        categories::{
            CategoriesService, CategoriesServiceError, PgCategoriesService,
            data::{NewCategory, NewSubcategory},
            models::{CategoryUuid, SubcategoryUuid},
        },
        files::PgFilesService,
        flowers::{
            FlowersService, FlowersServiceError, PgFlowersService,
            data::NewFlower,
            models::FlowerUuid,
        },
        orders::{
            PgOrdersService,
            data::{NewOrder, NewOrderItem},
            models::{OrderItemUuid, OrderUuid},
        },
        products::{
            PgProductsService, ProductsService, ProductsServiceError,
            data::{NewProduct, NewProductLine},
            models::{ProductKind, ProductUuid},
        },
        reviews::PgReviewsService,
        users::{
            PgUsersService, UsersService,
            data::NewUser,
            models::{UserRole, UserUuid},
        },
    },
};

use super::db::TestDb;

/// Session lifetime for tests.
const TEST_SESSION_TTL: SignedDuration = SignedDuration::from_hours(1);

pub struct TestContext {
    pub db: TestDb,
    pub categories: PgCategoriesService,
    pub flowers: PgFlowersService,
    pub products: PgProductsService,
    pub bouquets: PgBouquetsService,
    pub orders: PgOrdersService,
    pub reviews: PgReviewsService,
    pub files: PgFilesService,
    pub users: PgUsersService,
    pub auth: PgAuthService,
}

impl TestContext {
    pub async fn new() -> Self {
        let test_db = TestDb::new().await;
        let db = Db::new(test_db.pool().clone());

        Self {
            categories: PgCategoriesService::new(db.clone()),
            flowers: PgFlowersService::new(db.clone()),
            products: PgProductsService::new(db.clone()),
            bouquets: PgBouquetsService::new(db.clone()),
            orders: PgOrdersService::new(db.clone()),
            reviews: PgReviewsService::new(db.clone()),
            files: PgFilesService::new(db.clone()),
            users: PgUsersService::new(db),
            auth: PgAuthService::new(test_db.pool().clone(), TEST_SESSION_TTL),
            db: test_db,
        }
    }

    pub async fn create_category(
        &self,
        name: &str,
    ) -> Result<CategoryUuid, CategoriesServiceError> {
        let uuid = CategoryUuid::new();

        self.categories
            .create_category(NewCategory {
                uuid,
                name: name.to_string(),
            })
            .await?;

        Ok(uuid)
    }

    pub async fn create_subcategory(
        &self,
        category: CategoryUuid,
        name: &str,
    ) -> Result<SubcategoryUuid, CategoriesServiceError> {
        let uuid = SubcategoryUuid::new();

        self.categories
            .create_subcategory(NewSubcategory {
                uuid,
                category_uuid: category,
                name: name.to_string(),
            })
            .await?;

        Ok(uuid)
    }

    /// A category/subcategory pair for tests that just need a valid parent.
    pub async fn create_default_subcategory(
        &self,
    ) -> Result<SubcategoryUuid, CategoriesServiceError> {
        let category = self.create_category("Fresh Flowers").await?;

        self.create_subcategory(category, "Arrangements").await
    }

    pub async fn create_flower(
        &self,
        name: &str,
        price: u64,
    ) -> Result<FlowerUuid, FlowersServiceError> {
        let uuid = FlowerUuid::new();

        self.flowers
            .create_flower(NewFlower {
                uuid,
                name: name.to_string(),
                price,
            })
            .await?;

        Ok(uuid)
    }

    pub async fn create_normal_product(
        &self,
        subcategory: SubcategoryUuid,
        name: &str,
        price: u64,
    ) -> Result<ProductUuid, ProductsServiceError> {
        let uuid = ProductUuid::new();

        self.products
            .create_product(NewProduct {
                uuid,
                name: name.to_string(),
                description: String::new(),
                price: Some(price),
                kind: ProductKind::Normal,
                subcategory_uuid: Some(subcategory),
                lines: Vec::new(),
            })
            .await?;

        Ok(uuid)
    }

    pub async fn create_bouquet(
        &self,
        subcategory: SubcategoryUuid,
        lines: &[(FlowerUuid, u32)],
    ) -> Result<ProductUuid, ProductsServiceError> {
        let uuid = ProductUuid::new();

        self.products
            .create_product(NewProduct {
                uuid,
                name: "Test Bouquet".to_string(),
                description: String::new(),
                price: None,
                kind: ProductKind::Bouquet,
                subcategory_uuid: Some(subcategory),
                lines: lines
                    .iter()
                    .map(|&(flower_uuid, quantity)| NewProductLine {
                        flower_uuid,
                        quantity,
                    })
                    .collect(),
            })
            .await?;

        Ok(uuid)
    }

    pub async fn create_user(
        &self,
        email: &str,
        password: &str,
        role: UserRole,
    ) -> Result<UserUuid, Box<dyn std::error::Error + Send + Sync>> {
        let uuid = UserUuid::new();

        self.users
            .create_user(NewUser {
                uuid,
                email: email.to_string(),
                password: password.to_string(),
                display_name: "Test User".to_string(),
                role,
            })
            .await?;

        Ok(uuid)
    }

    /// A one-item order on a fresh user and product; returns the order uuid.
    pub async fn create_simple_order(
        &self,
    ) -> Result<OrderUuid, Box<dyn std::error::Error + Send + Sync>> {
        use crate::domain::orders::OrdersService as _;

        let user = self
            .create_user(
                &format!("buyer-{}@example.com", Uuid::now_v7().simple()),
                "pw",
                UserRole::User,
            )
            .await?;

        let subcategory = self.create_default_subcategory().await?;
        let product = self
            .create_normal_product(subcategory, "Single Stem", 300)
            .await?;

        let uuid = OrderUuid::new();

        self.orders
            .create_order(NewOrder {
                uuid,
                user_uuid: user,
                delivery_address: "1 Petal Lane".to_string(),
                delivery_date: "2026-08-14".to_string(),
                delivery_time: "10:00-12:00".to_string(),
                comment: String::new(),
                items: vec![NewOrderItem {
                    uuid: OrderItemUuid::new(),
                    product_uuid: product,
                    quantity: 1,
                }],
            })
            .await?;

        Ok(uuid)
    }
}
