//! Path parameter extractors
//!
//! Every identifier in a route is a UUID; a malformed one is a 400.

use axum::{
    async_trait,
    extract::{FromRequestParts, Path},
    http::request::Parts,
};
use serde::{de::DeserializeOwned, Deserialize};
use uuid::Uuid;

use crate::response::ApiError;

/// Path extractor that rejects with [`ApiError::InvalidPath`]
#[derive(Debug, Clone)]
pub struct IdPath<T>(pub T);

#[async_trait]
impl<S, T> FromRequestParts<S> for IdPath<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Send,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(inner) = Path::<T>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::invalid_path(e.body_text()))?;

        Ok(IdPath(inner))
    }
}

/// `/user/:id` and `/stand/:id`
#[derive(Debug, Deserialize)]
pub struct IdParam {
    pub id: Uuid,
}

/// `/user/:id/review/:review_id`
#[derive(Debug, Deserialize)]
pub struct UserReviewPath {
    pub id: Uuid,
    pub review_id: Uuid,
}

/// `/user/:id/favorite/:stand_id`
#[derive(Debug, Deserialize)]
pub struct UserFavoritePath {
    pub id: Uuid,
    pub stand_id: Uuid,
}
