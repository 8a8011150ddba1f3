//! Clan database operations

use std::collections::HashMap;

use shared::error::{AppError, ErrorCode};
use shared::models::clan::{Clan, ClanCreate, ClanUpdate, ClanWithMembers};
use shared::models::member::Member;
use sqlx::PgPool;

use crate::error::{ServiceError, ServiceResult};

const MEMBER_COLUMNS: &str = "id, clan_id, nickname, email, rank, status, \
     registration_date, last_login, description, phone, \
     image_access, info_access, manage_access, media_access";

pub async fn list_clans(pool: &PgPool, kingdom_id: i64) -> ServiceResult<Vec<ClanWithMembers>> {
    if !super::kingdom::kingdom_exists(pool, kingdom_id).await? {
        return Err(AppError::new(ErrorCode::KingdomNotFound).into());
    }
    clans_with_members(pool, kingdom_id).await
}

/// Fetch all clans of a kingdom with their members attached.
///
/// Members are loaded in one query and grouped in memory to avoid a
/// per-clan round trip.
pub(crate) async fn clans_with_members(
    pool: &PgPool,
    kingdom_id: i64,
) -> ServiceResult<Vec<ClanWithMembers>> {
    let clans: Vec<Clan> = sqlx::query_as(
        r#"
        SELECT id, kingdom_id, name, description, created_at
        FROM clans
        WHERE kingdom_id = $1
        ORDER BY name
        "#,
    )
    .bind(kingdom_id)
    .fetch_all(pool)
    .await?;

    if clans.is_empty() {
        return Ok(vec![]);
    }

    let clan_ids: Vec<i64> = clans.iter().map(|c| c.id).collect();
    let mut member_map = members_by_clan(pool, &clan_ids).await?;

    Ok(clans
        .into_iter()
        .map(|c| ClanWithMembers {
            members: member_map.remove(&c.id).unwrap_or_default(),
            id: c.id,
            kingdom_id: c.kingdom_id,
            name: c.name,
            description: c.description,
            created_at: c.created_at,
        })
        .collect())
}

async fn members_by_clan(
    pool: &PgPool,
    clan_ids: &[i64],
) -> ServiceResult<HashMap<i64, Vec<Member>>> {
    let members: Vec<Member> = sqlx::query_as(&format!(
        "SELECT {MEMBER_COLUMNS} FROM clan_members WHERE clan_id = ANY($1) ORDER BY nickname"
    ))
    .bind(clan_ids)
    .fetch_all(pool)
    .await?;

    let mut map: HashMap<i64, Vec<Member>> = HashMap::new();
    for member in members {
        map.entry(member.clan_id).or_default().push(member);
    }
    Ok(map)
}

pub async fn create_clan(
    pool: &PgPool,
    kingdom_id: i64,
    data: &ClanCreate,
) -> ServiceResult<Clan> {
    if !super::kingdom::kingdom_exists(pool, kingdom_id).await? {
        return Err(AppError::new(ErrorCode::KingdomNotFound).into());
    }

    let id = shared::util::snowflake_id();
    let now = shared::util::now_millis();

    sqlx::query(
        "INSERT INTO clans (id, kingdom_id, name, description, created_at) \
         VALUES ($1, $2, $3, $4, $5)",
    )
    .bind(id)
    .bind(kingdom_id)
    .bind(&data.name)
    .bind(&data.description)
    .bind(now)
    .execute(pool)
    .await
    .map_err(|e| {
        if super::unique_violation(&e) {
            ServiceError::App(AppError::new(ErrorCode::ClanNameExists))
        } else {
            e.into()
        }
    })?;

    Ok(Clan {
        id,
        kingdom_id,
        name: data.name.clone(),
        description: data.description.clone(),
        created_at: now,
    })
}

pub async fn get_clan(pool: &PgPool, clan_id: i64) -> ServiceResult<ClanWithMembers> {
    let clan: Clan = sqlx::query_as(
        "SELECT id, kingdom_id, name, description, created_at FROM clans WHERE id = $1",
    )
    .bind(clan_id)
    .fetch_optional(pool)
    .await?
    .ok_or_else(|| AppError::new(ErrorCode::ClanNotFound))?;

    let mut member_map = members_by_clan(pool, &[clan.id]).await?;

    Ok(ClanWithMembers {
        members: member_map.remove(&clan.id).unwrap_or_default(),
        id: clan.id,
        kingdom_id: clan.kingdom_id,
        name: clan.name,
        description: clan.description,
        created_at: clan.created_at,
    })
}

pub async fn update_clan(pool: &PgPool, clan_id: i64, data: &ClanUpdate) -> ServiceResult<Clan> {
    let clan: Clan = sqlx::query_as(
        r#"
        UPDATE clans SET
            name = COALESCE($1, name),
            description = COALESCE($2, description)
        WHERE id = $3
        RETURNING id, kingdom_id, name, description, created_at
        "#,
    )
    .bind(&data.name)
    .bind(&data.description)
    .bind(clan_id)
    .fetch_optional(pool)
    .await
    .map_err(|e| {
        if super::unique_violation(&e) {
            ServiceError::App(AppError::new(ErrorCode::ClanNameExists))
        } else {
            ServiceError::from(e)
        }
    })?
    .ok_or_else(|| AppError::new(ErrorCode::ClanNotFound))?;

    Ok(clan)
}

/// Members go with the clan (FK ON DELETE CASCADE).
pub async fn delete_clan(pool: &PgPool, clan_id: i64) -> ServiceResult<bool> {
    let result = sqlx::query("DELETE FROM clans WHERE id = $1")
        .bind(clan_id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() == 1)
}

pub(crate) async fn clan_exists(pool: &PgPool, clan_id: i64) -> ServiceResult<bool> {
    let row: Option<(i64,)> = sqlx::query_as("SELECT id FROM clans WHERE id = $1")
        .bind(clan_id)
        .fetch_optional(pool)
        .await?;
    Ok(row.is_some())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[sqlx::test]
    #[ignore = "requires a Postgres server (DATABASE_URL)"]
    async fn clan_operations_require_existing_kingdom(pool: PgPool) {
        let missing_kingdom = 42;
        let payload = ClanCreate {
            name: "Wolfskins".into(),
            description: String::new(),
        };

        let err = create_clan(&pool, missing_kingdom, &payload)
            .await
            .unwrap_err();
        assert_eq!(super::super::domain_code(err), ErrorCode::KingdomNotFound);

        let err = list_clans(&pool, missing_kingdom).await.unwrap_err();
        assert_eq!(super::super::domain_code(err), ErrorCode::KingdomNotFound);
    }
}
