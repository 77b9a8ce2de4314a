//! JSON body extractor with application-style rejections.

use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;

use crate::errors::AppError;

/// JSON extractor that reports malformed bodies as `AppError::BadRequest`,
/// so they share the `{ "error": { code, message } }` envelope.
///
/// # Example
///
/// ```rust,ignore
/// use product_catalog_api::api::extractors::AppJson;
/// use product_catalog_api::domain::ProductRecord;
///
/// async fn create(AppJson(record): AppJson<ProductRecord>) {
///     // record deserialized successfully
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
