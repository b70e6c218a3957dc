//! Account Entity Implementation
//!
//! 등록된 사용자 계정을 표현하는 핵심 엔티티입니다.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 계정 엔티티
///
/// `users` 컬렉션의 문서와 1:1로 매핑됩니다.
///
/// - `id`는 생성 시 UUID v4로 부여되며 이후 변경되지 않습니다.
/// - `username`은 대소문자를 구분하고, `email`은 소문자로 정규화되어 저장됩니다.
/// - `password_hash`는 항상 패스워드 해셔의 출력이며 평문이 저장되지 않습니다.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    #[serde(rename = "_id")]
    pub id: String,
    /// 사용자명 (unique)
    pub username: String,
    /// 이메일 (unique)
    pub email: String,
    /// bcrypt 해시
    pub password_hash: String,
    /// 생성 시간
    pub created_at: DateTime<Utc>,
    /// 수정 시간
    pub updated_at: DateTime<Utc>,
}

impl Account {
    /// 새 로컬 계정 생성
    ///
    /// 호출자는 이미 정규화된 사용자명/이메일과 해시된 패스워드를 전달해야 합니다.
    pub fn new_local(username: String, email: String, password_hash: String) -> Self {
        let now = Utc::now();

        Self {
            id: Uuid::new_v4().to_string(),
            username,
            email,
            password_hash,
            created_at: now,
            updated_at: now,
        }
    }
}

// 로그에 해시가 남지 않도록 직접 구현
impl fmt::Debug for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Account")
            .field("id", &self.id)
            .field("username", &self.username)
            .field("email", &self.email)
            .field("password_hash", &"<redacted>")
            .field("created_at", &self.created_at)
            .field("updated_at", &self.updated_at)
            .finish()
    }
}
