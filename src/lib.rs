//! User Directory - In-memory user CRUD service
//!
//! Exposes list/get/create/update/delete/count over a single User
//! resource, backed by an in-process store.
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Application configuration and constants
//! - **domain**: Core entities
//! - **services**: Use cases on top of the repositories
//! - **infra**: Repository trait and the in-memory backing
//! - **api**: HTTP handlers, extractors, and routes
//! - **types**: Shared response types
//! - **errors**: Centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! # Start the server
//! cargo run -- serve
//!
//! # Start with an empty store on another port
//! cargo run -- serve --port 9000 --no-seed
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;
pub mod services;
pub mod types;

// Re-export commonly used types at crate root
pub use api::AppState;
pub use config::Config;
pub use domain::{AppInfo, User, UserPayload};
pub use errors::{AppError, AppResult};
pub use infra::{InMemoryUserRepository, UserRepository};
