//! Army member API handlers

use axum::extract::{Path, State};
use axum::Json;
use http::StatusCode;
use shared::error::{AppError, ErrorCode};
use shared::models::member::{Member, MemberCreate, MemberUpdate};

use crate::db;
use crate::error::ServiceError;
use crate::password::hash_password;
use crate::state::AppState;

use super::ApiResult;

const MIN_PASSWORD_LEN: usize = 8;

pub async fn create_member(
    State(state): State<AppState>,
    Path(clan_id): Path<i64>,
    Json(data): Json<MemberCreate>,
) -> Result<(StatusCode, Json<Member>), ServiceError> {
    if data.nickname.trim().is_empty() {
        return Err(AppError::validation("Nickname must not be empty")
            .with_detail("field", "nickname")
            .into());
    }
    if data.password.len() < MIN_PASSWORD_LEN {
        return Err(AppError::new(ErrorCode::PasswordTooShort).into());
    }

    let password_hash = hash_password(&data.password)
        .map_err(|e| AppError::internal(format!("Password hashing failed: {e}")))?;

    let member = db::member::create_member(&state.pool, clan_id, &data, &password_hash).await?;
    Ok((StatusCode::CREATED, Json(member)))
}

pub async fn update_member(
    State(state): State<AppState>,
    Path((clan_id, member_id)): Path<(i64, i64)>,
    Json(data): Json<MemberUpdate>,
) -> ApiResult<Member> {
    if let Some(ref nickname) = data.nickname {
        if nickname.trim().is_empty() {
            return Err(AppError::validation("Nickname must not be empty")
                .with_detail("field", "nickname")
                .into());
        }
    }

    let password_hash = match data.password {
        Some(ref password) => {
            if password.len() < MIN_PASSWORD_LEN {
                return Err(AppError::new(ErrorCode::PasswordTooShort).into());
            }
            Some(
                hash_password(password)
                    .map_err(|e| AppError::internal(format!("Password hashing failed: {e}")))?,
            )
        }
        None => None,
    };

    let member =
        db::member::update_member(&state.pool, clan_id, member_id, &data, password_hash).await?;
    Ok(Json(member))
}

pub async fn delete_member(
    State(state): State<AppState>,
    Path((clan_id, member_id)): Path<(i64, i64)>,
) -> ApiResult<bool> {
    let deleted = db::member::delete_member(&state.pool, clan_id, member_id).await?;
    Ok(Json(deleted))
}
