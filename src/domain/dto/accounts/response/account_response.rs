use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entities::Account;

/// 계정 요약 응답 DTO
///
/// 패스워드 해시는 포함되지 않습니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountResponse {
    pub id: String,
    pub username: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Account> for AccountResponse {
    fn from(account: Account) -> Self {
        let Account {
            id,
            username,
            email,
            created_at,
            updated_at,
            ..
        } = account;

        Self {
            id,
            username,
            email,
            created_at,
            updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_never_contains_hash() {
        let account = Account::new_local("alice".into(), "alice@example.com".into(), "$2b$04$hash".into());
        let json = serde_json::to_value(AccountResponse::from(account.clone())).unwrap();

        assert_eq!(json["id"], account.id);
        assert_eq!(json["username"], "alice");
        assert!(json.get("password_hash").is_none());
        assert!(!json.to_string().contains("$2b$04$hash"));
    }
}
