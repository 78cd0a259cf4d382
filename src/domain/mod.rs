//! Domain layer - Core business entities
//!
//! This module contains the core domain models that represent
//! business concepts independent of infrastructure concerns.

pub mod app_info;
pub mod user;

pub use app_info::AppInfo;
pub use user::{User, UserPayload};
