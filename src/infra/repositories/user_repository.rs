//! User repository - the persistence gateway for the `users` table.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, NotSet, QueryFilter,
    QueryOrder, QuerySelect, Set,
};

use super::entities::user::{self, ActiveModel, Entity as UserEntity};
use crate::domain::{Secret, User};
use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// User repository trait for dependency injection.
///
/// Each method is one statement against the store. Failures come back as
/// `AppError::Database`; deciding what an absent row or a constraint
/// violation means is left to the caller.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by exact email
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>>;

    /// Find user by exact username (lowest id wins if several match)
    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>>;

    /// List users in id order, skipping `skip` rows and returning at most `limit`
    async fn list(&self, skip: u64, limit: u64) -> AppResult<Vec<User>>;

    /// Insert a new user and return it with its assigned id
    async fn create(
        &self,
        email: String,
        username: String,
        hashed_password: Secret,
    ) -> AppResult<User>;
}

/// SeaORM-backed implementation of UserRepository
pub struct UserStore {
    db: DatabaseConnection,
}

impl UserStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserRepository for UserStore {
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let result = UserEntity::find()
            .filter(user::Column::Email.eq(email))
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(User::from))
    }

    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>> {
        let result = UserEntity::find()
            .filter(user::Column::Username.eq(username))
            .order_by_asc(user::Column::Id)
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(User::from))
    }

    async fn list(&self, skip: u64, limit: u64) -> AppResult<Vec<User>> {
        let models = UserEntity::find()
            .order_by_asc(user::Column::Id)
            .offset(skip)
            .limit(limit)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(User::from).collect())
    }

    async fn create(
        &self,
        email: String,
        username: String,
        hashed_password: Secret,
    ) -> AppResult<User> {
        let active_model = ActiveModel {
            id: NotSet,
            email: Set(email),
            username: Set(username),
            hashed_password: Set(hashed_password.into_string()),
        };

        let model = active_model.insert(&self.db).await.map_err(AppError::from)?;
        Ok(User::from(model))
    }
}
