//! Repository layer - Data access abstraction
//!
//! Repositories provide an abstraction over data storage, so the
//! in-memory backing can be swapped without touching the services.

mod user_repository;

pub use user_repository::{InMemoryUserRepository, UserRepository};

#[cfg(test)]
pub use user_repository::MockUserRepository;
