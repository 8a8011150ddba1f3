//! Army Member Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Army member entity
///
/// The password hash never leaves the database layer; this type carries
/// everything a client is allowed to see.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Member {
    pub id: i64,
    pub clan_id: i64,
    pub nickname: String,
    pub email: String,
    pub rank: String,
    pub status: String,
    pub registration_date: DateTime<Utc>,
    pub last_login: DateTime<Utc>,
    pub description: String,
    pub phone: String,
    pub image_access: bool,
    pub info_access: bool,
    pub manage_access: bool,
    pub media_access: bool,
}

/// Create member payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemberCreate {
    pub nickname: String,
    pub email: String,
    pub password: String,
    pub rank: String,
}

/// Update member payload (partial)
///
/// `registration_date` is server-set and immutable, so it has no field here.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MemberUpdate {
    pub nickname: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub rank: Option<String>,
    pub status: Option<String>,
    pub last_login: Option<DateTime<Utc>>,
    pub description: Option<String>,
    pub phone: Option<String>,
    pub image_access: Option<bool>,
    pub info_access: Option<bool>,
    pub manage_access: Option<bool>,
    pub media_access: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_member_create_deserialize() {
        let payload: MemberCreate = serde_json::from_str(
            r#"{"nickname":"derthert","email":"king@vlandia.example","password":"castellan1","rank":"King"}"#,
        )
        .unwrap();
        assert_eq!(payload.nickname, "derthert");
        assert_eq!(payload.rank, "King");
    }

    #[test]
    fn test_member_update_partial() {
        let payload: MemberUpdate =
            serde_json::from_str(r#"{"rank":"Marshal","manage_access":true}"#).unwrap();
        assert_eq!(payload.rank.as_deref(), Some("Marshal"));
        assert_eq!(payload.manage_access, Some(true));
        assert!(payload.nickname.is_none());
        assert!(payload.password.is_none());
    }

    #[test]
    fn test_member_serialize_has_no_password() {
        let member = Member {
            id: 7,
            clan_id: 3,
            nickname: "caladog".to_string(),
            email: "".to_string(),
            rank: "Chief".to_string(),
            status: "active".to_string(),
            registration_date: Utc::now(),
            last_login: Utc::now(),
            description: "".to_string(),
            phone: "".to_string(),
            image_access: false,
            info_access: true,
            manage_access: false,
            media_access: false,
        };
        let json = serde_json::to_string(&member).unwrap();
        assert!(!json.contains("password"));
        assert!(json.contains("\"clan_id\":3"));
    }
}
