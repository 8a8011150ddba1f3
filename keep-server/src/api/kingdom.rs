//! Kingdom API handlers

use axum::extract::{Path, State};
use axum::Json;
use http::StatusCode;
use shared::error::AppError;
use shared::models::kingdom::{KingdomCreate, KingdomCreated, KingdomDetail, KingdomSummary};

use crate::db;
use crate::error::ServiceError;
use crate::state::AppState;

use super::ApiResult;

pub async fn list_kingdoms(State(state): State<AppState>) -> ApiResult<Vec<KingdomSummary>> {
    let kingdoms = db::kingdom::list_kingdoms(&state.pool).await?;
    Ok(Json(kingdoms))
}

pub async fn create_kingdom(
    State(state): State<AppState>,
    Json(data): Json<KingdomCreate>,
) -> Result<(StatusCode, Json<KingdomCreated>), ServiceError> {
    let data = KingdomCreate {
        name: data.name.trim().to_string(),
    };
    if data.name.is_empty() {
        return Err(AppError::validation("Kingdom name must not be empty")
            .with_detail("field", "name")
            .into());
    }

    let created = db::kingdom::create_kingdom(&state.pool, &data).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn get_kingdom(
    State(state): State<AppState>,
    Path(kingdom_id): Path<i64>,
) -> ApiResult<KingdomDetail> {
    let detail = db::kingdom::get_kingdom(&state.pool, kingdom_id).await?;
    Ok(Json(detail))
}

pub async fn delete_kingdom(
    State(state): State<AppState>,
    Path(kingdom_id): Path<i64>,
) -> ApiResult<bool> {
    let deleted = db::kingdom::delete_kingdom(&state.pool, kingdom_id).await?;
    Ok(Json(deleted))
}
