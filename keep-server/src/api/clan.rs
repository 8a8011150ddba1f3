//! Clan API handlers

use axum::extract::{Path, State};
use axum::Json;
use http::StatusCode;
use shared::error::AppError;
use shared::models::clan::{Clan, ClanCreate, ClanUpdate, ClanWithMembers};

use crate::db;
use crate::error::ServiceError;
use crate::state::AppState;

use super::ApiResult;

pub async fn list_clans(
    State(state): State<AppState>,
    Path(kingdom_id): Path<i64>,
) -> ApiResult<Vec<ClanWithMembers>> {
    let clans = db::clan::list_clans(&state.pool, kingdom_id).await?;
    Ok(Json(clans))
}

pub async fn create_clan(
    State(state): State<AppState>,
    Path(kingdom_id): Path<i64>,
    Json(data): Json<ClanCreate>,
) -> Result<(StatusCode, Json<Clan>), ServiceError> {
    let data = ClanCreate {
        name: data.name.trim().to_string(),
        description: data.description,
    };
    if data.name.is_empty() {
        return Err(AppError::validation("Clan name must not be empty")
            .with_detail("field", "clan_name")
            .into());
    }

    let clan = db::clan::create_clan(&state.pool, kingdom_id, &data).await?;
    Ok((StatusCode::CREATED, Json(clan)))
}

pub async fn get_clan(
    State(state): State<AppState>,
    Path(clan_id): Path<i64>,
) -> ApiResult<ClanWithMembers> {
    let clan = db::clan::get_clan(&state.pool, clan_id).await?;
    Ok(Json(clan))
}

pub async fn update_clan(
    State(state): State<AppState>,
    Path(clan_id): Path<i64>,
    Json(data): Json<ClanUpdate>,
) -> ApiResult<Clan> {
    let data = ClanUpdate {
        name: data.name.map(|n| n.trim().to_string()),
        description: data.description,
    };
    if let Some(ref name) = data.name {
        if name.is_empty() {
            return Err(AppError::validation("Clan name must not be empty")
                .with_detail("field", "name")
                .into());
        }
    }

    let clan = db::clan::update_clan(&state.pool, clan_id, &data).await?;
    Ok(Json(clan))
}

pub async fn delete_clan(
    State(state): State<AppState>,
    Path(clan_id): Path<i64>,
) -> ApiResult<bool> {
    let deleted = db::clan::delete_clan(&state.pool, clan_id).await?;
    Ok(Json(deleted))
}

#[cfg(test)]
mod tests {
    use shared::models::kingdom::KingdomCreate;
    use sqlx::PgPool;

    use super::*;

    #[sqlx::test]
    #[ignore = "requires a Postgres server (DATABASE_URL)"]
    async fn update_clan_normalizes_name(pool: PgPool) {
        let kingdom = db::kingdom::create_kingdom(
            &pool,
            &KingdomCreate {
                name: "Vlandia".into(),
            },
        )
        .await
        .unwrap();
        let clan = db::clan::create_clan(
            &pool,
            kingdom.id,
            &ClanCreate {
                name: "dey Meroc".into(),
                description: String::new(),
            },
        )
        .await
        .unwrap();
        let state = AppState { pool };

        // Whitespace-only rejected outright
        let result = update_clan(
            State(state.clone()),
            Path(clan.id),
            Json(ClanUpdate {
                name: Some("   ".into()),
                description: None,
            }),
        )
        .await;
        assert!(result.is_err());

        // Padded names stored trimmed
        let Json(updated) = update_clan(
            State(state),
            Path(clan.id),
            Json(ClanUpdate {
                name: Some("  dey Arromanc  ".into()),
                description: None,
            }),
        )
        .await
        .unwrap();
        assert_eq!(updated.name, "dey Arromanc");
    }
}
