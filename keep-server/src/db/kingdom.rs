//! Kingdom database operations

use shared::error::{AppError, ErrorCode};
use shared::models::kingdom::{
    Kingdom, KingdomCreate, KingdomCreated, KingdomDetail, KingdomSummary,
};
use sqlx::PgPool;

use crate::error::{ServiceError, ServiceResult};

pub async fn list_kingdoms(pool: &PgPool) -> ServiceResult<Vec<KingdomSummary>> {
    let rows: Vec<KingdomSummary> = sqlx::query_as(
        r#"
        SELECT k.id, k.name, COUNT(c.id) AS clan_count
        FROM kingdoms k
        LEFT JOIN clans c ON c.kingdom_id = k.id
        GROUP BY k.id, k.name
        ORDER BY k.name
        "#,
    )
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

pub async fn create_kingdom(pool: &PgPool, data: &KingdomCreate) -> ServiceResult<KingdomCreated> {
    let id = shared::util::snowflake_id();
    let now = shared::util::now_millis();

    sqlx::query("INSERT INTO kingdoms (id, name, created_at) VALUES ($1, $2, $3)")
        .bind(id)
        .bind(&data.name)
        .bind(now)
        .execute(pool)
        .await
        .map_err(|e| {
            if super::unique_violation(&e) {
                ServiceError::App(AppError::new(ErrorCode::KingdomNameExists))
            } else {
                e.into()
            }
        })?;

    Ok(KingdomCreated {
        id,
        name: data.name.clone(),
    })
}

pub async fn get_kingdom(pool: &PgPool, kingdom_id: i64) -> ServiceResult<KingdomDetail> {
    let kingdom: Kingdom =
        sqlx::query_as("SELECT id, name, created_at FROM kingdoms WHERE id = $1")
            .bind(kingdom_id)
            .fetch_optional(pool)
            .await?
            .ok_or_else(|| AppError::new(ErrorCode::KingdomNotFound))?;

    let clans = super::clan::clans_with_members(pool, kingdom_id).await?;

    Ok(KingdomDetail {
        id: kingdom.id,
        name: kingdom.name,
        created_at: kingdom.created_at,
        clans,
    })
}

/// Clans and members go with the kingdom (FK ON DELETE CASCADE).
pub async fn delete_kingdom(pool: &PgPool, kingdom_id: i64) -> ServiceResult<bool> {
    let result = sqlx::query("DELETE FROM kingdoms WHERE id = $1")
        .bind(kingdom_id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() == 1)
}

pub(crate) async fn kingdom_exists(pool: &PgPool, kingdom_id: i64) -> ServiceResult<bool> {
    let row: Option<(i64,)> = sqlx::query_as("SELECT id FROM kingdoms WHERE id = $1")
        .bind(kingdom_id)
        .fetch_optional(pool)
        .await?;
    Ok(row.is_some())
}

#[cfg(test)]
mod tests {
    use shared::models::clan::ClanCreate;
    use shared::models::member::MemberCreate;

    use super::*;

    #[sqlx::test]
    #[ignore = "requires a Postgres server (DATABASE_URL)"]
    async fn delete_kingdom_cascades_to_clans_and_members(pool: PgPool) {
        let kingdom = create_kingdom(
            &pool,
            &KingdomCreate {
                name: "Battania".into(),
            },
        )
        .await
        .unwrap();
        let clan = super::super::clan::create_clan(
            &pool,
            kingdom.id,
            &ClanCreate {
                name: "Wolfskins".into(),
                description: String::new(),
            },
        )
        .await
        .unwrap();
        super::super::member::create_member(
            &pool,
            clan.id,
            &MemberCreate {
                nickname: "caladog".into(),
                email: "caladog@battania.example".into(),
                password: "fen derkarakor".into(),
                rank: "king".into(),
            },
            "argon2-hash",
        )
        .await
        .unwrap();

        assert!(delete_kingdom(&pool, kingdom.id).await.unwrap());

        let (clans, members): (i64, i64) = sqlx::query_as(
            "SELECT (SELECT COUNT(*) FROM clans), (SELECT COUNT(*) FROM clan_members)",
        )
        .fetch_one(&pool)
        .await
        .unwrap();
        assert_eq!((clans, members), (0, 0));
        assert!(!kingdom_exists(&pool, kingdom.id).await.unwrap());
    }

    #[sqlx::test]
    #[ignore = "requires a Postgres server (DATABASE_URL)"]
    async fn list_kingdoms_counts_clans(pool: PgPool) {
        let vlandia = create_kingdom(
            &pool,
            &KingdomCreate {
                name: "Vlandia".into(),
            },
        )
        .await
        .unwrap();
        let sturgia = create_kingdom(
            &pool,
            &KingdomCreate {
                name: "Sturgia".into(),
            },
        )
        .await
        .unwrap();
        for name in ["dey Meroc", "dey Arromanc"] {
            super::super::clan::create_clan(
                &pool,
                vlandia.id,
                &ClanCreate {
                    name: name.into(),
                    description: String::new(),
                },
            )
            .await
            .unwrap();
        }

        let kingdoms = list_kingdoms(&pool).await.unwrap();
        let count_of = |id: i64| kingdoms.iter().find(|k| k.id == id).unwrap().clan_count;
        assert_eq!(count_of(vlandia.id), 2);
        assert_eq!(count_of(sturgia.id), 0);
    }

    #[sqlx::test]
    #[ignore = "requires a Postgres server (DATABASE_URL)"]
    async fn create_kingdom_rejects_duplicate_name(pool: PgPool) {
        let payload = KingdomCreate {
            name: "Aserai".into(),
        };
        create_kingdom(&pool, &payload).await.unwrap();

        let err = create_kingdom(&pool, &payload).await.unwrap_err();
        assert_eq!(super::super::domain_code(err), ErrorCode::KingdomNameExists);
    }
}
