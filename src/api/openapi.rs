//! OpenAPI documentation configuration.
//!
//! Provides Swagger UI for API exploration and testing.

use utoipa::OpenApi;

use crate::api::handlers::user_handler;
use crate::domain::{AppInfo, User, UserPayload};

/// OpenAPI documentation for the user directory
#[derive(OpenApi)]
#[openapi(
    info(
        title = "User Directory",
        version = "0.1.0",
        description = "In-memory CRUD service for users",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development server")
    ),
    paths(
        user_handler::list_users,
        user_handler::get_user,
        user_handler::create_user,
        user_handler::update_user,
        user_handler::delete_user,
        user_handler::count_users,
        user_handler::app_info,
    ),
    components(
        schemas(User, UserPayload, AppInfo)
    ),
    tags(
        (name = "Users", description = "User management operations")
    )
)]
pub struct ApiDoc;
