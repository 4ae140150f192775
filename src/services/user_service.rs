//! User service - Handles user-related business logic.

use async_trait::async_trait;
use sea_orm::{DbErr, SqlErr};
use std::sync::Arc;

use crate::domain::{CreateUser, Secret, User};
use crate::errors::{AppError, AppResult};
use crate::infra::UserRepository;

/// User service trait for dependency injection.
#[async_trait]
pub trait UserService: Send + Sync {
    /// Register a new user; the email must not be in use
    async fn create_user(&self, input: CreateUser) -> AppResult<User>;

    /// List users in registration order
    async fn list_users(&self, skip: u64, limit: u64) -> AppResult<Vec<User>>;

    /// Get a user by username
    async fn get_user_by_username(&self, username: &str) -> AppResult<User>;
}

/// Concrete implementation of UserService using repository.
pub struct UserManager {
    repo: Arc<dyn UserRepository>,
}

impl UserManager {
    /// Create new user service instance with repository
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl UserService for UserManager {
    async fn create_user(&self, input: CreateUser) -> AppResult<User> {
        if self.repo.find_by_email(&input.email).await?.is_some() {
            tracing::debug!(email = %input.email, "Registration rejected: email in use");
            return Err(AppError::EmailTaken);
        }

        let created = self
            .repo
            .create(input.email, input.username, Secret::from(input.password))
            .await;

        // A concurrent registration can win between the lookup and the insert;
        // the unique index on email turns that into a constraint violation.
        match created {
            Ok(user) => {
                tracing::info!(user_id = user.id, username = %user.username, "User registered");
                Ok(user)
            }
            Err(AppError::Database(err)) if is_unique_violation(&err) => {
                tracing::warn!("Registration lost race on unique email");
                Err(AppError::EmailTaken)
            }
            Err(e) => Err(e),
        }
    }

    async fn list_users(&self, skip: u64, limit: u64) -> AppResult<Vec<User>> {
        self.repo.list(skip, limit).await
    }

    async fn get_user_by_username(&self, username: &str) -> AppResult<User> {
        self.repo
            .find_by_username(username)
            .await?
            .ok_or(AppError::UserNotFound)
    }
}

fn is_unique_violation(err: &DbErr) -> bool {
    matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::MockUserRepository;
    use mockall::predicate::eq;

    fn input(email: &str, username: &str) -> CreateUser {
        CreateUser {
            email: email.to_string(),
            username: username.to_string(),
            password: "pw".to_string(),
        }
    }

    fn stored(id: i32, email: &str, username: &str) -> User {
        User::new(id, email.to_string(), username.to_string(), Secret::new("pw"))
    }

    #[tokio::test]
    async fn test_create_user_success() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_email()
            .withf(|email: &str| email == "ann@example.com")
            .returning(|_| Ok(None));
        repo.expect_create()
            .withf(|email, username, secret| {
                email == "ann@example.com" && username == "ann" && secret.as_str() == "pw"
            })
            .times(1)
            .returning(|email, username, secret| Ok(User::new(1, email, username, secret)));

        let service = UserManager::new(Arc::new(repo));
        let user = service
            .create_user(input("ann@example.com", "ann"))
            .await
            .unwrap();

        assert_eq!(user.id, 1);
        assert_eq!(user.username, "ann");
    }

    #[tokio::test]
    async fn test_create_user_duplicate_email_skips_insert() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_email()
            .returning(|email| Ok(Some(stored(4, email, "someone-else"))));
        repo.expect_create().never();

        let service = UserManager::new(Arc::new(repo));
        let result = service.create_user(input("ann@example.com", "ann")).await;

        assert!(matches!(result, Err(AppError::EmailTaken)));
    }

    #[tokio::test]
    async fn test_create_user_insert_failure_propagates() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_email().returning(|_| Ok(None));
        repo.expect_create()
            .returning(|_, _, _| Err(AppError::Database(DbErr::Custom("disk full".into()))));

        let service = UserManager::new(Arc::new(repo));
        let result = service.create_user(input("ann@example.com", "ann")).await;

        assert!(matches!(result, Err(AppError::Database(_))));
    }

    #[tokio::test]
    async fn test_list_users_passes_window_through() {
        let mut repo = MockUserRepository::new();
        repo.expect_list()
            .with(eq(3u64), eq(10u64))
            .times(1)
            .returning(|_, _| Ok(vec![]));

        let service = UserManager::new(Arc::new(repo));
        let users = service.list_users(3, 10).await.unwrap();

        assert!(users.is_empty());
    }

    #[tokio::test]
    async fn test_get_user_by_username_success() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_username()
            .withf(|username: &str| username == "ann")
            .returning(|username| Ok(Some(stored(2, "ann@example.com", username))));

        let service = UserManager::new(Arc::new(repo));
        let user = service.get_user_by_username("ann").await.unwrap();

        assert_eq!(user.id, 2);
        assert_eq!(user.email, "ann@example.com");
    }

    #[tokio::test]
    async fn test_get_user_by_username_not_found() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_username().returning(|_| Ok(None));

        let service = UserManager::new(Arc::new(repo));
        let result = service.get_user_by_username("ghost").await;

        assert!(matches!(result, Err(AppError::UserNotFound)));
    }
}
