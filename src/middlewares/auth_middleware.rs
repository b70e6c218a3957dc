//! 토큰 인증 미들웨어
//!
//! ActixWeb 요청 파이프라인에서 Bearer 토큰을 검증하고 현재 계정을 request extensions에 저장합니다.
//!
//! ```rust,ignore
//! web::resource("/me")
//!     .wrap(AuthMiddleware::access())
//!     .route(web::get().to(me))
//! ```
//!
//! 미들웨어는 app data에 등록된 `web::Data<AccessGuard>`를 사용합니다.

use std::future::{ready, Ready};
use std::rc::Rc;

use actix_web::{
    body::EitherBody,
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    Error, Result,
};

use crate::domain::models::TokenKind;
use crate::middlewares::auth_inner::AuthMiddlewareService;

/// 보호된 라우트를 감싸는 인증 미들웨어
///
/// 토큰이 기대한 종류가 아니거나 유효하지 않으면 다음 서비스로 넘기지 않고 401로 응답합니다.
pub struct AuthMiddleware {
    expected_kind: TokenKind,
}

impl AuthMiddleware {
    pub fn new(expected_kind: TokenKind) -> Self {
        Self { expected_kind }
    }

    /// access 토큰을 요구하는 미들웨어
    pub fn access() -> Self {
        Self::new(TokenKind::Access)
    }
}

impl<S, B> Transform<S, ServiceRequest> for AuthMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = AuthMiddlewareService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AuthMiddlewareService {
            service: Rc::new(service),
            expected_kind: self.expected_kind,
        }))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use actix_web::{http::header, http::StatusCode, test, web, App, HttpResponse};
    use chrono::Duration;

    use super::*;
    use crate::domain::entities::Account;
    use crate::domain::models::AuthenticatedAccount;
    use crate::repositories::users::{InMemoryUserDirectory, UserDirectory};
    use crate::services::auth::{AccessGuard, TokenCodec};

    async fn whoami(account: AuthenticatedAccount) -> HttpResponse {
        HttpResponse::Ok().body(account.username.clone())
    }

    async fn setup() -> (web::Data<AccessGuard>, Arc<TokenCodec>, Account) {
        let directory = Arc::new(InMemoryUserDirectory::new());
        let account = directory
            .insert(Account::new_local("alice".into(), "alice@example.com".into(), "hash".into()))
            .await
            .unwrap();
        let codec = Arc::new(TokenCodec::new("test-signing-key-0123456789abcdef"));
        let guard = web::Data::new(AccessGuard::new(directory, Arc::clone(&codec)));

        (guard, codec, account)
    }

    #[actix_web::test]
    async fn test_valid_access_token_reaches_handler() {
        let (guard, codec, account) = setup().await;
        let app = test::init_service(
            App::new()
                .app_data(guard)
                .service(web::resource("/me").wrap(AuthMiddleware::access()).route(web::get().to(whoami))),
        )
        .await;

        let token = codec.issue(&account, TokenKind::Access, Duration::minutes(5)).unwrap();
        let req = test::TestRequest::get()
            .uri("/me")
            .insert_header((header::AUTHORIZATION, format!("Bearer {}", token)))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(test::read_body(resp).await, "alice");
    }

    #[actix_web::test]
    async fn test_rejections_short_circuit_with_401() {
        let (guard, codec, account) = setup().await;
        let app = test::init_service(
            App::new()
                .app_data(guard)
                .service(web::resource("/me").wrap(AuthMiddleware::access()).route(web::get().to(whoami))),
        )
        .await;

        let refresh = codec.issue(&account, TokenKind::Refresh, Duration::minutes(5)).unwrap();
        let expired = codec.issue(&account, TokenKind::Access, Duration::zero()).unwrap();

        for authorization in [None, Some("Bearer garbage".to_string()), Some(format!("Bearer {}", refresh)), Some(format!("Bearer {}", expired))] {
            let mut req = test::TestRequest::get().uri("/me");
            if let Some(value) = authorization {
                req = req.insert_header((header::AUTHORIZATION, value));
            }
            let resp = test::call_service(&app, req.to_request()).await;

            assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
            assert_eq!(resp.headers().get(header::WWW_AUTHENTICATE).unwrap(), "Bearer");
        }
    }

    #[actix_web::test]
    async fn test_missing_guard_is_internal_error() {
        let app = test::init_service(
            App::new().service(web::resource("/me").wrap(AuthMiddleware::access()).route(web::get().to(whoami))),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/me")
            .insert_header((header::AUTHORIZATION, "Bearer x.y.z"))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
