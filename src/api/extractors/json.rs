//! JSON extractor that reports body errors as `AppError`.

use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;

use crate::errors::AppError;

/// Drop-in replacement for `axum::Json` whose rejection uses the
/// application's error body instead of axum's plain-text one.
///
/// # Example
///
/// ```rust,ignore
/// use user_directory::api::extractors::AppJson;
/// use user_directory::domain::UserPayload;
///
/// async fn create_user(AppJson(payload): AppJson<UserPayload>) {
///     // payload was decoded from a well-formed JSON body
/// }
/// ```
pub struct AppJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for AppJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|e| AppError::bad_request(e.body_text()))?;

        Ok(AppJson(value))
    }
}
