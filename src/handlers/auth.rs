//! Authentication HTTP Handlers
//!
//! 회원가입, 로그인, 토큰 갱신, 현재 계정 조회 엔드포인트입니다.
//!
//! | Method | Path | 성공 | 실패 |
//! |--------|------|------|------|
//! | POST | `/api/v1/auth/signup` | 201 계정 요약 | 409 중복, 422 입력 오류 |
//! | POST | `/api/v1/auth/login` | 200 토큰 페어 | 401 |
//! | POST | `/api/v1/auth/refresh` | 200 새 토큰 페어 | 401 |
//! | GET | `/api/v1/auth/me` | 200 계정 요약 | 401 |
use actix_web::{get, post, web, HttpRequest, HttpResponse};
use validator::Validate;

use crate::domain::{
    AccountResponse, AuthenticatedAccount, LoginRequest, RefreshTokenRequest, SignupRequest, TokenResponse,
};
use crate::errors::{AppError, AppResult};
use crate::middlewares::AuthMiddleware;
use crate::services::{AccessGuard, CredentialService, SessionService};

/// 회원가입 핸들러
///
/// # Endpoint
/// `POST /api/v1/auth/signup`
///
/// ```bash
/// curl -X POST http://localhost:8080/api/v1/auth/signup \
///   -H "Content-Type: application/json" \
///   -d '{"username": "alice", "email": "alice@example.com", "password": "Str0ngP@ss"}'
/// ```
#[post("/signup")]
pub async fn signup(
    payload: web::Json<SignupRequest>,
    credentials: web::Data<CredentialService>,
) -> Result<HttpResponse, AppError> {
    // 유효성 검사
    payload.validate()
        .map_err(|e| AppError::MalformedInput(e.to_string()))?;

    let request = payload.into_inner();
    let account = credentials
        .register(&request.username, &request.email, &request.password)
        .await?;

    Ok(HttpResponse::Created().json(AccountResponse::from(account)))
}

/// 로그인 핸들러
///
/// 사용자명 또는 이메일과 비밀번호로 인증하고 토큰 페어를 발급합니다.
///
/// # Endpoint
/// `POST /api/v1/auth/login`
#[post("/login")]
pub async fn login(
    payload: web::Json<LoginRequest>,
    credentials: web::Data<CredentialService>,
    sessions: web::Data<SessionService>,
) -> Result<HttpResponse, AppError> {
    payload.validate()
        .map_err(|e| AppError::MalformedInput(e.to_string()))?;

    let account = credentials
        .authenticate(&payload.identifier, &payload.password)
        .await?;

    let token_pair = sessions.login(&account)?;

    Ok(HttpResponse::Ok().json(TokenResponse::from(token_pair)))
}

/// 토큰 갱신 핸들러
///
/// `Authorization: Bearer <refresh_token>` 헤더를 우선 사용하고,
/// 헤더가 없으면 JSON 본문의 `refresh_token`을 사용합니다.
///
/// # Endpoint
/// `POST /api/v1/auth/refresh`
#[post("/refresh")]
pub async fn refresh(
    req: HttpRequest,
    body: Option<web::Json<RefreshTokenRequest>>,
    sessions: web::Data<SessionService>,
) -> Result<HttpResponse, AppError> {
    let refresh_token = presented_refresh_token(&req, body)?;
    let token_pair = sessions.refresh(&refresh_token).await?;

    Ok(HttpResponse::Ok().json(TokenResponse::from(token_pair)))
}

fn presented_refresh_token(req: &HttpRequest, body: Option<web::Json<RefreshTokenRequest>>) -> AppResult<String> {
    if let Ok(token) = AccessGuard::bearer_token(req.headers()) {
        return Ok(token.to_owned());
    }

    body.map(|json| json.into_inner().refresh_token.trim().to_string())
        .filter(|token| !token.is_empty())
        .ok_or(AppError::MissingToken)
}

/// 현재 계정 조회 핸들러
///
/// access 토큰이 필요하며, 토큰 발급 이후 변경된 내용까지 반영된 현재 계정을 반환합니다.
///
/// # Endpoint
/// `GET /api/v1/auth/me`
#[get("/me", wrap = "AuthMiddleware::access()")]
pub async fn me(account: AuthenticatedAccount) -> HttpResponse {
    HttpResponse::Ok().json(AccountResponse::from(account.into_inner()))
}
