use axum::http::Uri;

use crate::response::ApiError;

/// Any route that matched nothing
pub async fn not_found(uri: Uri) -> ApiError {
    let path = uri
        .path_and_query()
        .map_or_else(|| uri.path().to_string(), ToString::to_string);
    ApiError::UnknownRoute(path)
}
