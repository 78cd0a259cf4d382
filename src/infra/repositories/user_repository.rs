//! User repository with an in-memory backing.

use async_trait::async_trait;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::config::SAMPLE_USERS;
use crate::domain::{User, UserPayload};
use crate::errors::{AppError, AppResult};

#[cfg(test)]
use mockall::automock;

/// User repository trait for dependency injection.
///
/// Implementations own the authoritative record set. Every returned `User`
/// is a snapshot: later writes to the store do not show through it.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// All users in creation order
    async fn list(&self) -> AppResult<Vec<User>>;

    /// Find user by ID
    async fn find_by_id(&self, id: i64) -> AppResult<Option<User>>;

    /// Store a new user under a freshly issued id
    async fn create(&self, payload: UserPayload) -> AppResult<User>;

    /// Overwrite name, email and role of an existing user
    async fn update(&self, id: i64, payload: UserPayload) -> AppResult<Option<User>>;

    /// Remove a user; returns whether anything was removed
    async fn delete(&self, id: i64) -> AppResult<bool>;

    /// Number of stored users
    async fn count(&self) -> AppResult<u64>;
}

/// Records plus the id counter. Both change under the same write lock,
/// so ids appear in the list in ascending order.
#[derive(Debug, Default)]
struct Directory {
    users: Vec<User>,
    last_id: i64,
}

impl Directory {
    fn insert(&mut self, payload: UserPayload) -> User {
        self.last_id += 1;
        let user = User::from_payload(self.last_id, payload);
        self.users.push(user.clone());
        user
    }

    fn position(&self, id: i64) -> Option<usize> {
        self.users.iter().position(|user| user.id == id)
    }
}

/// In-memory implementation of UserRepository.
///
/// Deleted ids are never reissued.
#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    state: RwLock<Directory>,
}

impl InMemoryUserRepository {
    /// Create an empty repository; the first issued id is 1
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository holding the sample users (ids 1 and 2)
    pub fn seeded() -> Self {
        let mut directory = Directory::default();
        for (name, email, role) in SAMPLE_USERS {
            directory.insert(UserPayload::new(*name, *email, *role));
        }
        Self {
            state: RwLock::new(directory),
        }
    }

    fn read(&self) -> AppResult<RwLockReadGuard<'_, Directory>> {
        self.state
            .read()
            .map_err(|_| AppError::internal("user store lock poisoned"))
    }

    fn write(&self) -> AppResult<RwLockWriteGuard<'_, Directory>> {
        self.state
            .write()
            .map_err(|_| AppError::internal("user store lock poisoned"))
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn list(&self) -> AppResult<Vec<User>> {
        Ok(self.read()?.users.clone())
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Option<User>> {
        let directory = self.read()?;
        Ok(directory.users.iter().find(|user| user.id == id).cloned())
    }

    async fn create(&self, payload: UserPayload) -> AppResult<User> {
        Ok(self.write()?.insert(payload))
    }

    async fn update(&self, id: i64, payload: UserPayload) -> AppResult<Option<User>> {
        let mut directory = self.write()?;
        Ok(directory.users.iter_mut().find(|user| user.id == id).map(|user| {
            user.apply(payload);
            user.clone()
        }))
    }

    async fn delete(&self, id: i64) -> AppResult<bool> {
        let mut directory = self.write()?;
        match directory.position(id) {
            Some(index) => {
                directory.users.remove(index);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn count(&self) -> AppResult<u64> {
        Ok(self.read()?.users.len() as u64)
    }
}
