//! 토큰 클레임 구조체와 토큰 페어
//!
//! 서명된 토큰에 담기는 클레임 셋과, 한 번에 발급되는 access/refresh 토큰 쌍을 정의합니다.

use std::fmt;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::entities::Account;

/// 토큰 종류
///
/// 클레임의 `token_type` 필드로 직렬화되어 서명 범위 안에 포함됩니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenKind {
    /// 보호된 리소스 접근용
    Access,
    /// 새 토큰 페어 교환용
    Refresh,
}

impl TokenKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenKind::Access => "access",
            TokenKind::Refresh => "refresh",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 토큰 클레임 셋
///
/// | 필드 | 의미 |
/// |------|------|
/// | `sub` | 계정 ID |
/// | `username` / `email` | 발급 시점의 계정 정보 |
/// | `token_type` | `access` 또는 `refresh` |
/// | `iat` / `exp` | 발급/만료 시각 (Unix 초) |
/// | `jti` | 토큰 고유 ID (UUID v4) |
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClaimSet {
    pub sub: String,
    pub username: String,
    pub email: String,
    pub token_type: TokenKind,
    pub iat: i64,
    pub exp: i64,
    pub jti: String,
}

impl ClaimSet {
    /// 계정 정보로 클레임 셋을 생성합니다.
    ///
    /// `exp = issued_at + ttl` 이며, `ttl`이 0 이하이면 발급 즉시 만료된 클레임이 됩니다.
    pub fn for_account(account: &Account, kind: TokenKind, issued_at: DateTime<Utc>, ttl: Duration) -> Self {
        let iat = issued_at.timestamp();

        Self {
            sub: account.id.clone(),
            username: account.username.clone(),
            email: account.email.clone(),
            token_type: kind,
            iat,
            exp: iat + ttl.num_seconds(),
            jti: Uuid::new_v4().to_string(),
        }
    }

    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now.timestamp() >= self.exp
    }
}

/// 함께 발급된 access/refresh 토큰 쌍
#[derive(Clone, PartialEq, Eq)]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
    /// access 토큰 수명 (초)
    pub expires_in: i64,
}

impl fmt::Debug for TokenPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenPair")
            .field("access_token", &"<redacted>")
            .field("refresh_token", &"<redacted>")
            .field("expires_in", &self.expires_in)
            .finish()
    }
}
