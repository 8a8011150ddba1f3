//! Army member database operations

use shared::error::{AppError, ErrorCode};
use shared::models::member::{Member, MemberCreate, MemberUpdate};
use sqlx::PgPool;

use crate::error::{ServiceError, ServiceResult};

const MEMBER_RETURNING: &str = "id, clan_id, nickname, email, rank, status, \
     registration_date, last_login, description, phone, \
     image_access, info_access, manage_access, media_access";

pub async fn create_member(
    pool: &PgPool,
    clan_id: i64,
    data: &MemberCreate,
    password_hash: &str,
) -> ServiceResult<Member> {
    if !super::clan::clan_exists(pool, clan_id).await? {
        return Err(AppError::new(ErrorCode::ClanNotFound).into());
    }

    let id = shared::util::snowflake_id();

    let member: Member = sqlx::query_as(&format!(
        r#"
        INSERT INTO clan_members (id, clan_id, nickname, email, password_hash, rank)
        VALUES ($1, $2, $3, $4, $5, $6)
        RETURNING {MEMBER_RETURNING}
        "#
    ))
    .bind(id)
    .bind(clan_id)
    .bind(&data.nickname)
    .bind(&data.email)
    .bind(password_hash)
    .bind(&data.rank)
    .fetch_one(pool)
    .await
    .map_err(|e| {
        if super::unique_violation(&e) {
            ServiceError::App(AppError::new(ErrorCode::MemberEmailExists))
        } else {
            ServiceError::from(e)
        }
    })?;

    Ok(member)
}

pub async fn update_member(
    pool: &PgPool,
    clan_id: i64,
    member_id: i64,
    data: &MemberUpdate,
    password_hash: Option<String>,
) -> ServiceResult<Member> {
    let member: Member = sqlx::query_as(&format!(
        r#"
        UPDATE clan_members SET
            nickname = COALESCE($1, nickname),
            email = COALESCE($2, email),
            password_hash = COALESCE($3, password_hash),
            rank = COALESCE($4, rank),
            status = COALESCE($5, status),
            last_login = COALESCE($6, last_login),
            description = COALESCE($7, description),
            phone = COALESCE($8, phone),
            image_access = COALESCE($9, image_access),
            info_access = COALESCE($10, info_access),
            manage_access = COALESCE($11, manage_access),
            media_access = COALESCE($12, media_access)
        WHERE id = $13 AND clan_id = $14
        RETURNING {MEMBER_RETURNING}
        "#
    ))
    .bind(&data.nickname)
    .bind(&data.email)
    .bind(password_hash)
    .bind(&data.rank)
    .bind(&data.status)
    .bind(data.last_login)
    .bind(&data.description)
    .bind(&data.phone)
    .bind(data.image_access)
    .bind(data.info_access)
    .bind(data.manage_access)
    .bind(data.media_access)
    .bind(member_id)
    .bind(clan_id)
    .fetch_optional(pool)
    .await
    .map_err(|e| {
        if super::unique_violation(&e) {
            ServiceError::App(AppError::new(ErrorCode::MemberEmailExists))
        } else {
            ServiceError::from(e)
        }
    })?
    .ok_or_else(|| AppError::new(ErrorCode::MemberNotFound))?;

    Ok(member)
}

pub async fn delete_member(pool: &PgPool, clan_id: i64, member_id: i64) -> ServiceResult<bool> {
    let result = sqlx::query("DELETE FROM clan_members WHERE id = $1 AND clan_id = $2")
        .bind(member_id)
        .bind(clan_id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() == 1)
}
