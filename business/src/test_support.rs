//! Port mocks and fixtures shared by the use case tests.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use mockall::mock;

use crate::domain::auth::errors::AuthError;
use crate::domain::auth::model::{AccessClaims, AccessToken};
use crate::domain::auth::services::TokenService;
use crate::domain::category::model::ProductCategory;
use crate::domain::category::repository::CategoryRepository;
use crate::domain::errors::RepositoryError;
use crate::domain::farmer::model::{Farmer, NewFarmer};
use crate::domain::farmer::repository::FarmerRepository;
use crate::domain::logger::Logger;
use crate::domain::product::filter::ProductPredicate;
use crate::domain::product::model::Product;
use crate::domain::product::repository::ProductRepository;
use crate::domain::shared::value_objects::Email;
use crate::domain::user::model::{NewUser, User};
use crate::domain::user::repository::UserRepository;
use crate::domain::user::services::{PasswordHashError, PasswordHasher};
use crate::domain::user::value_objects::UserType;

mock! {
    pub ProductRepo {}

    #[async_trait]
    impl ProductRepository for ProductRepo {
        async fn search(&self, predicates: &[ProductPredicate]) -> Result<Vec<Product>, RepositoryError>;
        async fn get_by_id(&self, id: i64) -> Result<Product, RepositoryError>;
    }
}

mock! {
    pub CategoryRepo {}

    #[async_trait]
    impl CategoryRepository for CategoryRepo {
        async fn get_all(&self, limit: i64, offset: i64) -> Result<Vec<ProductCategory>, RepositoryError>;
        async fn get_by_id(&self, id: i64) -> Result<ProductCategory, RepositoryError>;
        async fn get_by_ids(&self, ids: &[i64]) -> Result<Vec<ProductCategory>, RepositoryError>;
    }
}

mock! {
    pub FarmerRepo {}

    #[async_trait]
    impl FarmerRepository for FarmerRepo {
        async fn get_all(&self, skip: i64, limit: i64) -> Result<Vec<Farmer>, RepositoryError>;
        async fn get_by_id(&self, id: i64) -> Result<Farmer, RepositoryError>;
        async fn get_by_ids(&self, ids: &[i64]) -> Result<Vec<Farmer>, RepositoryError>;
        async fn get_by_user_id(&self, user_id: i64) -> Result<Farmer, RepositoryError>;
        async fn find_by_email(&self, email: &Email) -> Result<Option<Farmer>, RepositoryError>;
        async fn create(&self, farmer: &NewFarmer) -> Result<Farmer, RepositoryError>;
        async fn update(&self, farmer: &Farmer) -> Result<(), RepositoryError>;
        async fn delete(&self, id: i64) -> Result<(), RepositoryError>;
    }
}

mock! {
    pub UserRepo {}

    #[async_trait]
    impl UserRepository for UserRepo {
        async fn get_by_id(&self, id: i64) -> Result<User, RepositoryError>;
        async fn find_by_email(&self, email: &Email) -> Result<Option<User>, RepositoryError>;
        async fn create(&self, user: &NewUser) -> Result<User, RepositoryError>;
    }
}

mock! {
    pub Hasher {}

    #[async_trait]
    impl PasswordHasher for Hasher {
        async fn hash(&self, password: &str) -> Result<String, PasswordHashError>;
        async fn verify(&self, password: &str, hashed_password: &str) -> Result<bool, PasswordHashError>;
    }
}

mock! {
    pub Tokens {}

    impl TokenService for Tokens {
        fn issue(&self, subject_id: i64, email: Option<String>, ttl: Option<Duration>) -> Result<AccessToken, AuthError>;
        fn validate(&self, token: &str) -> Result<AccessClaims, AuthError>;
    }
}

mock! {
    pub Log {}

    impl Logger for Log {
        fn info(&self, message: &str);
        fn warn(&self, message: &str);
        fn error(&self, message: &str);
        fn debug(&self, message: &str);
    }
}

pub fn mock_logger() -> Arc<dyn Logger> {
    let mut logger = MockLog::new();
    logger.expect_info().returning(|_| ());
    logger.expect_warn().returning(|_| ());
    logger.expect_error().returning(|_| ());
    logger.expect_debug().returning(|_| ());
    Arc::new(logger)
}

pub fn product(id: i64, name: &str, price: f64, stock: i32, category_id: i64, farmer_id: i64) -> Product {
    Product::from_repository(
        id,
        name.to_string(),
        None,
        price,
        stock,
        None,
        category_id,
        farmer_id,
    )
    .unwrap()
}

pub fn category(id: i64, name: &str) -> ProductCategory {
    ProductCategory::from_repository(id, name.to_string(), None)
}

pub fn farmer(id: i64, user_id: i64) -> Farmer {
    Farmer::from_repository(
        id,
        user_id,
        format!("Farm {}", id),
        format!("farm{}@example.com", id),
        None,
        Some("Valley".to_string()),
        true,
    )
}

pub fn user(id: i64, email: &str) -> User {
    let now: DateTime<Utc> = Utc::now();
    User::from_repository(
        id,
        email.to_string(),
        "hashed".to_string(),
        UserType::Consumer,
        true,
        now,
        now,
    )
}
