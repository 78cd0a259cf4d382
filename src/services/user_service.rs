//! User service - Handles user-related business logic.
//!
//! Maps "absent" results from the repository to `AppError::NotFound`
//! and logs every mutation.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::{User, UserPayload};
use crate::errors::{AppError, AppResult, OptionExt};
use crate::infra::UserRepository;

/// User service trait for dependency injection.
#[async_trait]
pub trait UserService: Send + Sync {
    /// List all users in creation order
    async fn list_users(&self) -> AppResult<Vec<User>>;

    /// Get user by ID
    async fn get_user(&self, id: i64) -> AppResult<User>;

    /// Create a new user; the id is always issued by the store
    async fn create_user(&self, payload: UserPayload) -> AppResult<User>;

    /// Replace name, email and role of an existing user
    async fn update_user(&self, id: i64, payload: UserPayload) -> AppResult<User>;

    /// Delete user by ID
    async fn delete_user(&self, id: i64) -> AppResult<()>;

    /// Number of stored users
    async fn count_users(&self) -> AppResult<u64>;
}

/// Concrete implementation of UserService over a repository.
pub struct UserManager<R: UserRepository> {
    repository: Arc<R>,
}

impl<R: UserRepository> UserManager<R> {
    /// Create new user service instance
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R: UserRepository> UserService for UserManager<R> {
    async fn list_users(&self) -> AppResult<Vec<User>> {
        self.repository.list().await
    }

    async fn get_user(&self, id: i64) -> AppResult<User> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_not_found()
            .inspect_err(|_| tracing::debug!(user_id = id, "User not found"))
    }

    async fn create_user(&self, payload: UserPayload) -> AppResult<User> {
        let user = self.repository.create(payload).await?;
        tracing::info!(user_id = user.id, "User created");
        Ok(user)
    }

    async fn update_user(&self, id: i64, payload: UserPayload) -> AppResult<User> {
        match self.repository.update(id, payload).await? {
            Some(user) => {
                tracing::info!(user_id = id, "User updated");
                Ok(user)
            }
            None => {
                tracing::debug!(user_id = id, "Update skipped, user not found");
                Err(AppError::NotFound)
            }
        }
    }

    async fn delete_user(&self, id: i64) -> AppResult<()> {
        if self.repository.delete(id).await? {
            tracing::info!(user_id = id, "User deleted");
            Ok(())
        } else {
            tracing::debug!(user_id = id, "Delete skipped, user not found");
            Err(AppError::NotFound)
        }
    }

    async fn count_users(&self) -> AppResult<u64> {
        self.repository.count().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::MockUserRepository;
    use mockall::predicate::eq;

    fn sample_user(id: i64) -> User {
        User::from_payload(id, UserPayload::new("Test User", "test@example.com", "USER"))
    }

    #[tokio::test]
    async fn test_get_user_success() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_id()
            .with(eq(1))
            .returning(|id| Ok(Some(sample_user(id))));

        let service = UserManager::new(Arc::new(repo));
        let user = service.get_user(1).await.unwrap();

        assert_eq!(user.id, 1);
    }

    #[tokio::test]
    async fn test_get_user_not_found() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_id().returning(|_| Ok(None));

        let service = UserManager::new(Arc::new(repo));
        let result = service.get_user(999).await;

        assert!(matches!(result, Err(AppError::NotFound)));
    }

    #[tokio::test]
    async fn test_update_user_not_found() {
        let mut repo = MockUserRepository::new();
        repo.expect_update()
            .with(eq(999), mockall::predicate::always())
            .times(1)
            .returning(|_, _| Ok(None));

        let service = UserManager::new(Arc::new(repo));
        let result = service
            .update_user(999, UserPayload::new("Updated Name", "updated@example.com", "ADMIN"))
            .await;

        assert!(matches!(result, Err(AppError::NotFound)));
    }

    #[tokio::test]
    async fn test_delete_user_maps_false_to_not_found() {
        let mut repo = MockUserRepository::new();
        repo.expect_delete().with(eq(999)).returning(|_| Ok(false));
        repo.expect_delete().with(eq(1)).returning(|_| Ok(true));

        let service = UserManager::new(Arc::new(repo));

        assert!(service.delete_user(1).await.is_ok());
        assert!(matches!(
            service.delete_user(999).await,
            Err(AppError::NotFound)
        ));
    }

    #[tokio::test]
    async fn test_repository_errors_propagate() {
        let mut repo = MockUserRepository::new();
        repo.expect_count()
            .returning(|| Err(AppError::internal("user store lock poisoned")));

        let service = UserManager::new(Arc::new(repo));

        assert!(matches!(
            service.count_users().await,
            Err(AppError::Internal(_))
        ));
    }
}
