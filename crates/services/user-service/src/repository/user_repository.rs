//! User repository implementation.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, NotSet,
    PaginatorTrait, QueryFilter, QueryOrder, Set, SqlErr,
};

use super::entities::user::{self, ActiveModel, Entity as UserEntity};
use common::{AppError, AppResult};
use domain::{DomainError, PageRequest, Paginated, User};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// User repository trait for dependency injection.
///
/// Users are only ever inserted and read; nothing updates or deletes them.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find the user registered with an email address
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>>;

    /// Insert a new user; the store assigns the id and creation time.
    ///
    /// Fails with `AppError::Conflict` when the email is already taken.
    async fn create(&self, name: String, email: Option<String>) -> AppResult<User>;

    /// One page of users, oldest first
    async fn list_ordered_by_creation(&self, request: PageRequest) -> AppResult<Paginated<User>>;
}

/// Concrete implementation of UserRepository
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
            .order_by_asc(user::Column::Id)
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(User::from))
    }

    async fn create(&self, name: String, email: Option<String>) -> AppResult<User> {
        let active_model = ActiveModel {
            id: NotSet,
            name: Set(name),
            email: Set(email),
            date_created: Set(chrono::Utc::now()),
        };

        let model = active_model.insert(&self.db).await.map_err(insert_error)?;
        Ok(User::from(model))
    }

    async fn list_ordered_by_creation(&self, request: PageRequest) -> AppResult<Paginated<User>> {
        let paginator = UserEntity::find()
            .order_by_asc(user::Column::DateCreated)
            .order_by_asc(user::Column::Id)
            .paginate(&self.db, request.per_page);

        let total = paginator.num_items().await.map_err(AppError::from)?;
        // Nothing to fetch, and a huge page number would overflow the offset
        if request.is_past_end(total) {
            return Ok(Paginated::new(Vec::new(), request, total));
        }

        let models = paginator
            .fetch_page(request.page - 1)
            .await
            .map_err(AppError::from)?;

        Ok(Paginated::new(
            models.into_iter().map(User::from).collect(),
            request,
            total,
        ))
    }
}

/// The UNIQUE constraint on `email` is the last line against duplicates
/// that slip past the service's pre-check.
fn insert_error(err: DbErr) -> AppError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(detail)) => {
            tracing::warn!("Rejected duplicate user insert: {}", detail);
            DomainError::conflict("User").into()
        }
        _ => AppError::from(err),
    }
}
