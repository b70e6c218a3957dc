//! AuthMiddleware 인증 로직의 핵심적인 기능
use std::rc::Rc;

use actix_web::body::EitherBody;
use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse};
use actix_web::{web, Error, HttpMessage, ResponseError};
use futures_util::future::LocalBoxFuture;

use crate::domain::entities::Account;
use crate::domain::models::{AuthenticatedAccount, TokenKind};
use crate::errors::{AppError, AppResult};
use crate::services::auth::AccessGuard;

pub struct AuthMiddlewareService<S> {
    pub service: Rc<S>,
    pub expected_kind: TokenKind,
}

impl<S, B> Service<ServiceRequest> for AuthMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, actix_web::Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = self.service.clone();
        let expected_kind = self.expected_kind;

        Box::pin(async move {
            match authenticate_request(&req, expected_kind).await {
                Ok(account) => {
                    log::debug!("인증 성공: 계정 ID {}", account.id);
                    req.extensions_mut().insert(AuthenticatedAccount(account));
                }
                Err(err) => {
                    // 클라이언트에는 원인과 무관하게 같은 응답
                    if err.is_unauthorized() {
                        log::warn!("인증 실패: {} ({} {})", err, req.method(), req.path());
                    } else {
                        log::error!("인증 처리 오류: {} ({} {})", err, req.method(), req.path());
                    }
                    let response = err.error_response();
                    let (req, _) = req.into_parts();
                    let res = ServiceResponse::new(req, response).map_into_right_body();
                    return Ok(res);
                }
            }

            let res = service.call(req).await?;
            Ok(res.map_into_left_body())
        })
    }
}

async fn authenticate_request(req: &ServiceRequest, expected_kind: TokenKind) -> AppResult<Account> {
    let guard = req
        .app_data::<web::Data<AccessGuard>>()
        .cloned()
        .ok_or_else(|| AppError::InternalError("AccessGuard가 등록되지 않았습니다".to_string()))?;

    let token = AccessGuard::bearer_token(req.headers())?.to_owned();

    guard.resolve(&token, expected_kind).await
}
