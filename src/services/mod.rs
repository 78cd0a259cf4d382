//! Application services layer - Use cases and business logic.
//!
//! Services depend on repository traits, not on a concrete backing.

mod user_service;

pub use user_service::{UserManager, UserService};
