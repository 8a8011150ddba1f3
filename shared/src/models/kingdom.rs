//! Kingdom Model

use serde::{Deserialize, Serialize};

use super::clan::ClanWithMembers;

/// Kingdom entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Kingdom {
    pub id: i64,
    pub name: String,
    pub created_at: i64,
}

/// Kingdom list item with its clan count
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct KingdomSummary {
    pub id: i64,
    pub name: String,
    pub clan_count: i64,
}

/// Create kingdom payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KingdomCreate {
    pub name: String,
}

/// Response returned after creating a kingdom
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KingdomCreated {
    pub id: i64,
    pub name: String,
}

/// Kingdom with nested clans and their members (detail view)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KingdomDetail {
    pub id: i64,
    pub name: String,
    pub created_at: i64,
    pub clans: Vec<ClanWithMembers>,
}
