//! Clan Model

use serde::{Deserialize, Serialize};

use super::member::Member;

/// Clan entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Clan {
    pub id: i64,
    pub kingdom_id: i64,
    pub name: String,
    pub description: String,
    pub created_at: i64,
}

/// Create clan payload
///
/// Wire field is `clan_name` for compatibility with existing frontends.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClanCreate {
    #[serde(rename = "clan_name")]
    pub name: String,
    #[serde(default)]
    pub description: String,
}

/// Update clan payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClanUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
}

/// Clan with its members (list/detail views)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClanWithMembers {
    pub id: i64,
    pub kingdom_id: i64,
    pub name: String,
    pub description: String,
    pub created_at: i64,
    pub members: Vec<Member>,
}
