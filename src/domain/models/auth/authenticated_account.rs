//! 인증된 계정 정보 추출기
//!
//! 인증 미들웨어가 요청 extensions에 저장한 계정을 핸들러에서 꺼내는 extractor 입니다.

use std::future::{ready, Ready};
use std::ops::Deref;

use actix_web::{FromRequest, HttpMessage, HttpRequest};

use crate::domain::entities::Account;
use crate::errors::AppError;

/// 인증된 계정
///
/// 토큰의 클레임이 아니라 저장소에서 다시 조회한 현재 계정 상태를 담습니다.
///
/// # 사용 예제
///
/// ```rust,ignore
/// async fn me(account: AuthenticatedAccount) -> impl Responder {
///     HttpResponse::Ok().json(AccountResponse::from(account.into_inner()))
/// }
/// ```
#[derive(Debug, Clone)]
pub struct AuthenticatedAccount(pub Account);

impl AuthenticatedAccount {
    pub fn into_inner(self) -> Account {
        self.0
    }
}

impl Deref for AuthenticatedAccount {
    type Target = Account;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromRequest for AuthenticatedAccount {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        // 미들웨어를 거치지 않은 라우트에서는 항상 401
        match req.extensions().get::<AuthenticatedAccount>() {
            Some(account) => ready(Ok(account.clone())),
            None => ready(Err(AppError::MissingToken)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::TestRequest;

    #[actix_web::test]
    async fn test_extracts_account_from_extensions() {
        let account = Account::new_local("alice".into(), "alice@example.com".into(), "hash".into());
        let req = TestRequest::default().to_http_request();
        req.extensions_mut().insert(AuthenticatedAccount(account.clone()));

        let extracted = AuthenticatedAccount::extract(&req).await.unwrap();
        assert_eq!(extracted.id, account.id);
    }

    #[actix_web::test]
    async fn test_missing_extension_is_unauthorized() {
        let req = TestRequest::default().to_http_request();
        let result = AuthenticatedAccount::extract(&req).await;

        assert_eq!(result.unwrap_err(), AppError::MissingToken);
    }
}
