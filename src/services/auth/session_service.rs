//! 세션 서비스
//!
//! 로그인 성공 시 토큰 페어를 발급하고, 리프레시 토큰을 새 토큰 페어로 교환합니다.
//!
//! ## 리프레시 흐름
//!
//! ```text
//! refresh token ──► 서명/만료 검증 ──► 종류 == refresh ? ──► 현재 계정 조회 ──► 새 토큰 페어
//!                        │                    │                     │
//!                InvalidSignature       WrongTokenType       AccountNotFound
//!                    Expired
//! ```
//!
//! 폐기 저장소가 없으므로 이전 리프레시 토큰은 자신의 만료 시각까지 유효합니다.

use std::sync::Arc;

use chrono::{Duration, Utc};

use crate::config::AuthConfig;
use crate::domain::entities::Account;
use crate::domain::models::{ClaimSet, TokenKind, TokenPair};
use crate::errors::AppResult;
use crate::repositories::users::UserDirectory;
use crate::services::auth::{AccessGuard, TokenCodec};

pub struct SessionService {
    guard: AccessGuard,
    codec: Arc<TokenCodec>,
    access_ttl: Duration,
    refresh_ttl: Duration,
}

impl SessionService {
    pub fn new(
        directory: Arc<dyn UserDirectory>,
        codec: Arc<TokenCodec>,
        access_ttl: Duration,
        refresh_ttl: Duration,
    ) -> Self {
        Self {
            guard: AccessGuard::new(directory, Arc::clone(&codec)),
            codec,
            access_ttl,
            refresh_ttl,
        }
    }

    pub fn from_config(directory: Arc<dyn UserDirectory>, codec: Arc<TokenCodec>, config: &AuthConfig) -> Self {
        Self::new(directory, codec, config.access_ttl(), config.refresh_ttl())
    }

    /// 인증된 계정에 대해 access/refresh 토큰 페어를 발급합니다.
    ///
    /// 두 토큰은 같은 계정 정보와 같은 발급 시각을 가지며 종류와 수명만 다릅니다.
    pub fn login(&self, account: &Account) -> AppResult<TokenPair> {
        let issued_at = Utc::now();

        let access = ClaimSet::for_account(account, TokenKind::Access, issued_at, self.access_ttl);
        let refresh = ClaimSet::for_account(account, TokenKind::Refresh, issued_at, self.refresh_ttl);

        Ok(TokenPair {
            access_token: self.codec.encode(&access)?,
            refresh_token: self.codec.encode(&refresh)?,
            expires_in: self.access_ttl.num_seconds(),
        })
    }

    /// 리프레시 토큰을 새 토큰 페어로 교환합니다.
    ///
    /// 토큰에 담긴 클레임이 아닌 현재 계정 상태로 새 토큰을 발급합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::InvalidSignature` / `AppError::Expired` - 토큰 자체가 유효하지 않음
    /// * `AppError::WrongTokenType` - access 토큰이 제시됨
    /// * `AppError::AccountNotFound` - 계정이 더 이상 존재하지 않음
    pub async fn refresh(&self, refresh_token: &str) -> AppResult<TokenPair> {
        let account = self.guard.resolve(refresh_token, TokenKind::Refresh).await?;
        let pair = self.login(&account)?;

        log::info!("토큰 갱신 완료 - 사용자: {}, ID: {}", account.username, account.id);
        Ok(pair)
    }

    pub fn access_ttl(&self) -> Duration {
        self.access_ttl
    }

    pub fn refresh_ttl(&self) -> Duration {
        self.refresh_ttl
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::AppError;
    use crate::repositories::users::InMemoryUserDirectory;

    const KEY: &str = "test-signing-key-0123456789abcdef";

    async fn setup(access_ttl: Duration, refresh_ttl: Duration) -> (SessionService, Arc<TokenCodec>, Account) {
        let directory = Arc::new(InMemoryUserDirectory::new());
        let account = directory
            .insert(Account::new_local("alice".into(), "alice@example.com".into(), "hash".into()))
            .await
            .unwrap();
        let codec = Arc::new(TokenCodec::new(KEY));
        let service = SessionService::new(directory, Arc::clone(&codec), access_ttl, refresh_ttl);

        (service, codec, account)
    }

    #[actix_web::test]
    async fn test_login_mints_matched_pair() {
        let (service, codec, account) = setup(Duration::minutes(15), Duration::days(7)).await;
        let pair = service.login(&account).unwrap();

        let access = codec.decode(&pair.access_token).unwrap();
        let refresh = codec.decode(&pair.refresh_token).unwrap();

        assert_eq!(access.token_type, TokenKind::Access);
        assert_eq!(refresh.token_type, TokenKind::Refresh);
        assert_eq!(access.sub, account.id);
        assert_eq!(refresh.sub, account.id);
        assert_eq!(access.username, refresh.username);
        assert_eq!(access.email, refresh.email);
        assert_eq!(access.iat, refresh.iat);
        assert_eq!(access.exp - access.iat, 15 * 60);
        assert_eq!(refresh.exp - refresh.iat, 7 * 24 * 60 * 60);
        assert_eq!(pair.expires_in, 15 * 60);
    }

    #[actix_web::test]
    async fn test_refresh_issues_new_pair() {
        let (service, codec, account) = setup(Duration::minutes(15), Duration::minutes(60)).await;
        let first = service.login(&account).unwrap();
        let second = service.refresh(&first.refresh_token).await.unwrap();

        assert_ne!(first.access_token, second.access_token);
        assert_ne!(first.refresh_token, second.refresh_token);
        assert!(codec.decode(&second.access_token).is_ok());
        assert!(codec.decode(&second.refresh_token).is_ok());

        // 폐기 저장소가 없으므로 이전 리프레시 토큰도 여전히 사용 가능
        assert!(service.refresh(&first.refresh_token).await.is_ok());
    }

    #[actix_web::test]
    async fn test_access_token_cannot_refresh() {
        let (service, _, account) = setup(Duration::minutes(15), Duration::minutes(60)).await;
        let pair = service.login(&account).unwrap();

        assert_eq!(service.refresh(&pair.access_token).await.unwrap_err(), AppError::WrongTokenType);
    }

    #[actix_web::test]
    async fn test_refresh_for_deleted_account() {
        let (service, codec, account) = setup(Duration::minutes(15), Duration::minutes(60)).await;
        let pair = service.login(&account).unwrap();

        let empty = SessionService::new(
            Arc::new(InMemoryUserDirectory::new()),
            codec,
            service.access_ttl(),
            service.refresh_ttl(),
        );

        assert_eq!(empty.refresh(&pair.refresh_token).await.unwrap_err(), AppError::AccountNotFound);
    }

    #[actix_web::test]
    async fn test_refresh_uses_current_account_state() {
        let (service, codec, account) = setup(Duration::minutes(15), Duration::minutes(60)).await;
        let mut stale = account.clone();
        stale.username = "old-name".to_string();

        let pair = service.login(&stale).unwrap();
        let refreshed = service.refresh(&pair.refresh_token).await.unwrap();

        assert_eq!(codec.decode(&refreshed.access_token).unwrap().username, "alice");
    }

    #[actix_web::test]
    async fn test_expired_refresh_token() {
        let (service, _, account) = setup(Duration::minutes(15), Duration::zero()).await;
        let pair = service.login(&account).unwrap();

        assert_eq!(service.refresh(&pair.refresh_token).await.unwrap_err(), AppError::Expired);
    }
}
