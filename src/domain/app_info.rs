//! Static application metadata.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Name, version and deployment environment of the running service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct AppInfo {
    #[schema(example = "user-directory")]
    pub name: String,
    #[schema(example = "0.1.0")]
    pub version: String,
    #[schema(example = "development")]
    pub environment: String,
}
