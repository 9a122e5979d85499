/// Event resolution endpoints
///
/// The whole group sits behind the secretario role guard: an invalid or
/// wrongly-roled token is rejected before any handler here runs.
///
/// # Endpoints
///
/// - `POST /resolucion/resoluciones`
/// - `GET /resolucion/resoluciones`
/// - `GET /resolucion/resoluciones/:name_event`
/// - `PUT /resolucion/resoluciones/:name_event`
/// - `DELETE /resolucion/resoluciones/:name_event`
///
/// Event names are not unique; lookups, updates and deletes act on the
/// oldest matching resolution.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use liga_shared::models::resolution::{CreateResolution, Resolution, UpdateResolution};
use validator::Validate;

use super::MessageResponse;
use crate::{
    app::AppState,
    error::{ApiError, ApiResult},
};

/// Creates a resolution
///
/// Duplicate event names are accepted by design; each call adds a row.
pub async fn create_resolution(
    State(state): State<AppState>,
    Json(payload): Json<CreateResolution>,
) -> ApiResult<(StatusCode, Json<Resolution>)> {
    payload.validate()?;

    let resolution = Resolution::create(&state.db, payload).await?;

    Ok((StatusCode::CREATED, Json(resolution)))
}

/// Lists all resolutions
pub async fn list_resolutions(State(state): State<AppState>) -> ApiResult<Json<Vec<Resolution>>> {
    let resolutions = Resolution::list(&state.db).await?;
    Ok(Json(resolutions))
}

/// Fetches a resolution by event name
pub async fn get_resolution(
    State(state): State<AppState>,
    Path(name_event): Path<String>,
) -> ApiResult<Json<Resolution>> {
    let resolution = Resolution::find_by_name(&state.db, &name_event)
        .await?
        .ok_or_else(|| ApiError::NotFound("Resolución no encontrada".to_string()))?;

    Ok(Json(resolution))
}

/// Updates a resolution by event name
pub async fn update_resolution(
    State(state): State<AppState>,
    Path(name_event): Path<String>,
    Json(payload): Json<UpdateResolution>,
) -> ApiResult<Json<Resolution>> {
    payload.validate()?;

    let resolution = Resolution::update_by_name(&state.db, &name_event, payload)
        .await?
        .ok_or_else(|| ApiError::NotFound("Resolución no encontrada".to_string()))?;

    Ok(Json(resolution))
}

/// Deletes a resolution by event name
pub async fn delete_resolution(
    State(state): State<AppState>,
    Path(name_event): Path<String>,
) -> ApiResult<Json<MessageResponse>> {
    let deleted = Resolution::delete_by_name(&state.db, &name_event).await?;

    if !deleted {
        return Err(ApiError::NotFound("Resolución no encontrada".to_string()));
    }

    Ok(Json(MessageResponse::new("Resolución eliminada")))
}
