//! User service - Handles user-related business logic.
//!
//! SOLID (SRP): Handles user-related use cases only.

use async_trait::async_trait;
use std::sync::Arc;

use common::AppResult;
use domain::{DomainError, NewUser, PageRequest, Paginated, User};

use crate::repository::UserRepository;

/// User service trait for dependency injection.
#[async_trait]
pub trait UserService: Send + Sync {
    /// Register a user unless the email is already taken.
    ///
    /// Returns `AppError::Conflict` for a duplicate, whether it was caught
    /// by the pre-check or by the store's uniqueness constraint.
    async fn add_user(&self, new_user: NewUser) -> AppResult<User>;

    /// Look up a user by email
    async fn find_user_by_email(&self, email: &str) -> AppResult<Option<User>>;

    /// List one page of users in creation order
    async fn list_users(&self, request: PageRequest) -> AppResult<Paginated<User>>;
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
    async fn add_user(&self, new_user: NewUser) -> AppResult<User> {
        // Check if email already exists
        if self.repo.find_by_email(&new_user.email).await?.is_some() {
            tracing::info!(email = %new_user.email, "User already exists");
            return Err(DomainError::conflict("User").into());
        }

        let user = self
            .repo
            .create(new_user.name, Some(new_user.email))
            .await?;
        tracing::info!(user_id = user.id, "User created");

        Ok(user)
    }

    async fn find_user_by_email(&self, email: &str) -> AppResult<Option<User>> {
        self.repo.find_by_email(email).await
    }

    async fn list_users(&self, request: PageRequest) -> AppResult<Paginated<User>> {
        self.repo.list_ordered_by_creation(request).await
    }
}
