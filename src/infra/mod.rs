//! Infrastructure layer - Storage backings
//!
//! Holds the repositories that own application state.

pub mod repositories;

pub use repositories::{InMemoryUserRepository, UserRepository};

#[cfg(test)]
pub use repositories::MockUserRepository;
