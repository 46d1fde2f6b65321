//! Stand handlers

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    response::{IntoResponse, Response},
};
use stand_service::{
    dto::{CreateStandRequest, StandDetailsResponse, StandListQuery, StandResponse},
    StandService,
};

use crate::extractors::{AuthUser, IdParam, IdPath, ValidatedJson};
use crate::response::{ApiError, ApiResult, Created, Envelope, NoContent};
use crate::state::AppState;

/// List active stands, full or `?info=short`
///
/// GET /api/v1/stand/
pub async fn list_stands(
    State(state): State<AppState>,
    query: Result<Query<StandListQuery>, QueryRejection>,
) -> ApiResult<Response> {
    let Query(query) = query.map_err(|e| ApiError::invalid_query(e.body_text()))?;
    let service = StandService::new(state.service_context());

    let response = if query.is_short() {
        Envelope::list("stands", service.list_short().await?).into_response()
    } else {
        Envelope::list("stands", service.list().await?).into_response()
    };
    Ok(response)
}

/// Get a stand with its reviews
///
/// GET /api/v1/stand/:id
pub async fn get_stand(
    State(state): State<AppState>,
    IdPath(path): IdPath<IdParam>,
) -> ApiResult<Envelope<StandDetailsResponse>> {
    let stand = StandService::new(state.service_context())
        .get(path.id)
        .await?;
    Ok(Envelope::new("stand", stand))
}

/// Create a stand
///
/// POST /api/v1/stand/
pub async fn create_stand(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<CreateStandRequest>,
) -> ApiResult<Created<Envelope<StandResponse>>> {
    let stand = StandService::new(state.service_context())
        .create(&auth.identity(), request)
        .await?;
    Ok(Created(Envelope::new("stand", stand)))
}

/// Deactivate a stand
///
/// DELETE /api/v1/stand/:id
pub async fn delete_stand(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(path): IdPath<IdParam>,
) -> ApiResult<NoContent> {
    StandService::new(state.service_context())
        .delete(&auth.identity(), path.id)
        .await?;
    Ok(NoContent)
}
