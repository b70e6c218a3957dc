//! 접근 가드
//!
//! 제시된 토큰을 기대한 종류와 대조하고, 토큰의 계정 ID를 현재 계정으로 다시 조회합니다.
//! 내부 에러 종류는 진단용이며 HTTP 경계에서는 모두 같은 401 응답이 됩니다.

use std::sync::Arc;

use actix_web::http::header::{self, HeaderMap};

use crate::domain::entities::Account;
use crate::domain::models::TokenKind;
use crate::errors::{AppError, AppResult};
use crate::repositories::users::UserDirectory;
use crate::services::auth::TokenCodec;

#[derive(Clone)]
pub struct AccessGuard {
    directory: Arc<dyn UserDirectory>,
    codec: Arc<TokenCodec>,
}

impl AccessGuard {
    pub fn new(directory: Arc<dyn UserDirectory>, codec: Arc<TokenCodec>) -> Self {
        Self { directory, codec }
    }

    /// 토큰을 검증하고 소유 계정을 반환합니다.
    ///
    /// 토큰에 담긴 클레임이 아니라 저장소의 현재 계정 상태를 반환합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::InvalidSignature` / `AppError::Expired` - 토큰 자체가 유효하지 않음
    /// * `AppError::WrongTokenType` - 토큰 종류가 `expected`와 다름
    /// * `AppError::AccountNotFound` - 계정이 더 이상 존재하지 않음
    pub async fn resolve(&self, token: &str, expected: TokenKind) -> AppResult<Account> {
        let claims = self.codec.decode(token)?;

        if claims.token_type != expected {
            log::warn!(
                "토큰 종류 불일치 - 기대: {}, 실제: {}, 계정: {}",
                expected,
                claims.token_type,
                claims.sub
            );
            return Err(AppError::WrongTokenType);
        }

        self.directory.find_by_id(&claims.sub).await?.ok_or_else(|| {
            log::warn!("토큰의 계정을 찾을 수 없음 - 계정: {}", claims.sub);
            AppError::AccountNotFound
        })
    }

    /// `Authorization` 헤더에서 Bearer 토큰을 추출합니다.
    ///
    /// 스킴 비교는 대소문자를 구분하지 않습니다.
    ///
    /// # Errors
    ///
    /// 헤더가 없거나, Bearer 스킴이 아니거나, 토큰이 비어 있으면 `AppError::MissingToken`
    pub fn bearer_token(headers: &HeaderMap) -> AppResult<&str> {
        let value = headers
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .ok_or(AppError::MissingToken)?;

        let (scheme, token) = value.trim().split_once(' ').ok_or(AppError::MissingToken)?;
        let token = token.trim();

        if !scheme.eq_ignore_ascii_case("bearer") || token.is_empty() {
            return Err(AppError::MissingToken);
        }

        Ok(token)
    }
}
