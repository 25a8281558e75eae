//! API handlers for the bookstore REST endpoints

pub mod books;
pub mod health;
pub mod openapi;

use axum::{
    async_trait,
    body::Bytes,
    extract::{FromRequest, Request},
};

use crate::{error::AppError, models::book::BookFields};

/// Extractor for a JSON object request body.
///
/// An empty body reads as `{}`. Anything that is not a JSON object is
/// rejected with [`AppError::BadRequest`], so body errors share the status of
/// every other failure.
pub struct JsonObject(pub BookFields);

#[async_trait]
impl<S> FromRequest<S> for JsonObject
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| AppError::BadRequest(e.to_string()))?;

        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(JsonObject(BookFields::new()));
        }

        serde_json::from_slice::<BookFields>(&bytes)
            .map(JsonObject)
            .map_err(|e| AppError::BadRequest(format!("Invalid JSON object: {}", e)))
    }
}
