/// Skater ("patinador") endpoints
///
/// # Endpoints
///
/// - `POST /api/patinadores` — batch registration (find-or-create)
/// - `GET /api/patinadores` — list all
/// - `GET /api/patinadores/:number_id` — by document number
/// - `PUT /api/patinadores/:number_id` — allow-list update
/// - `DELETE /api/patinadores/:number_id`

use axum::{
    extract::{Path, State},
    Json,
};
use futures::future;
use liga_shared::models::skater::{CreateSkater, Skater, UpdateSkater};
use validator::Validate;

use super::MessageResponse;
use crate::{app::AppState, error::{ApiError, ApiResult}};

/// Batch registration
///
/// Takes an array of skater payloads. The whole batch is validated up
/// front; one bad payload rejects everything before any write. Items are
/// then registered concurrently, each as a single atomic find-or-create:
/// an unseen `number_ID` is inserted as `Nuevo`, a known one has only its
/// `estado` flipped to `Afiliado`. The response preserves input order.
///
/// A database error on any item aborts the batch with a generic failure;
/// items already written stay written.
pub async fn register_batch(
    State(state): State<AppState>,
    Json(batch): Json<Vec<CreateSkater>>,
) -> ApiResult<Json<Vec<Skater>>> {
    for payload in &batch {
        payload.validate()?;
    }

    let results = future::try_join_all(
        batch
            .into_iter()
            .map(|payload| Skater::register(&state.db, payload)),
    )
    .await?;

    Ok(Json(results))
}

/// Lists all skaters
pub async fn list_skaters(State(state): State<AppState>) -> ApiResult<Json<Vec<Skater>>> {
    let skaters = Skater::list(&state.db).await?;
    Ok(Json(skaters))
}

/// Fetches a skater by document number
pub async fn get_skater(
    State(state): State<AppState>,
    Path(number_id): Path<i64>,
) -> ApiResult<Json<Skater>> {
    let skater = Skater::find_by_number(&state.db, number_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Patinador no encontrado".to_string()))?;

    Ok(Json(skater))
}

/// Updates a skater's mutable fields
///
/// `estado` and `number_ID` never change here, whatever the body says;
/// the payload type only carries the allow-listed fields.
pub async fn update_skater(
    State(state): State<AppState>,
    Path(number_id): Path<i64>,
    Json(payload): Json<UpdateSkater>,
) -> ApiResult<Json<Skater>> {
    payload.validate()?;

    let skater = Skater::update_by_number(&state.db, number_id, payload)
        .await?
        .ok_or_else(|| ApiError::NotFound("Patinador no encontrado".to_string()))?;

    Ok(Json(skater))
}

/// Deletes a skater by document number
pub async fn delete_skater(
    State(state): State<AppState>,
    Path(number_id): Path<i64>,
) -> ApiResult<Json<MessageResponse>> {
    let deleted = Skater::delete_by_number(&state.db, number_id).await?;

    if !deleted {
        return Err(ApiError::NotFound("Patinador no encontrado".to_string()));
    }

    Ok(Json(MessageResponse::new("Patinador eliminado")))
}
