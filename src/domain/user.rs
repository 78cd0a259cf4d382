//! User domain entity and related types.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// User domain entity.
///
/// `role` is free-form text; "USER" and "ADMIN" are conventional but not enforced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct User {
    /// Store-assigned identifier
    #[schema(example = 1)]
    pub id: i64,
    /// Display name
    #[schema(example = "John Doe")]
    pub name: String,
    /// Email address (not validated)
    #[schema(example = "john.doe@example.com")]
    pub email: String,
    /// Role label
    #[schema(example = "USER")]
    pub role: String,
}

impl User {
    /// Build a stored user from an id issued by the store and a payload
    pub fn from_payload(id: i64, payload: UserPayload) -> Self {
        Self {
            id,
            name: payload.name,
            email: payload.email,
            role: payload.role,
        }
    }

    /// Overwrite name, email and role; the id is left untouched
    pub fn apply(&mut self, payload: UserPayload) {
        self.name = payload.name;
        self.email = payload.email;
        self.role = payload.role;
    }
}

/// User create/update data transfer object.
///
/// Carries no id: any `id` in the request body is ignored. Missing fields
/// default to the empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct UserPayload {
    /// Display name
    #[schema(example = "Jane Doe")]
    pub name: String,
    /// Email address
    #[schema(example = "jane@example.com")]
    pub email: String,
    /// Role label
    #[schema(example = "ADMIN")]
    pub role: String,
}

impl UserPayload {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        role: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            role: role.into(),
        }
    }
}
