//! 애플리케이션 전역에서 사용하는 에러 시스템
//!
//! 인증 서비스의 실패 유형을 하나의 열거형으로 정의하고,
//! `actix_web::ResponseError`를 구현하여 HTTP 응답으로 변환합니다.
//!
//! ## HTTP 응답 매핑
//!
//! | AppError | HTTP Status | 외부 노출 메시지 |
//! |----------|-------------|------------------|
//! | `DuplicateUsername` / `DuplicateEmail` | 409 Conflict | 어떤 필드가 중복인지 노출 |
//! | `MalformedInput` | 422 Unprocessable Entity | 검증 상세 |
//! | `InvalidCredentials` | 401 Unauthorized | 로그인 실패 공통 메시지 |
//! | `MissingToken` / `InvalidSignature` / `Expired` / `WrongTokenType` / `AccountNotFound` | 401 Unauthorized | 토큰 실패 공통 메시지 |
//! | `DatabaseError` / `InternalError` | 500 Internal Server Error | 일반 메시지 (상세는 로그에만) |
//!
//! 인증/토큰 경로의 실패는 원인과 무관하게 동일한 응답 본문을 가집니다.
//! 내부 변형은 로그와 진단을 위해서만 구분됩니다.
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::errors::AppError;
//!
//! async fn authenticate(identifier: &str, secret: &str) -> Result<Account, AppError> {
//!     let account = directory.find_by_username_or_email(identifier).await?
//!         .ok_or(AppError::InvalidCredentials)?;
//!     Ok(account)
//! }
//! ```

use actix_web::http::{header, StatusCode};
use actix_web::HttpResponse;
use thiserror::Error;

/// 로그인 실패 시 외부에 노출되는 메시지
pub const INVALID_CREDENTIALS_MESSAGE: &str = "아이디 또는 비밀번호가 올바르지 않습니다";

/// 토큰 검증 실패 시 외부에 노출되는 메시지
pub const UNAUTHORIZED_MESSAGE: &str = "유효한 인증 토큰이 필요합니다";

const INTERNAL_ERROR_MESSAGE: &str = "서버 내부 오류가 발생했습니다";

/// 애플리케이션 전역 에러 타입
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AppError {
    /// 이미 사용 중인 사용자명 (409 Conflict)
    #[error("이미 사용 중인 사용자명입니다")]
    DuplicateUsername,

    /// 이미 사용 중인 이메일 (409 Conflict)
    #[error("이미 사용 중인 이메일입니다")]
    DuplicateEmail,

    /// 존재하지 않는 계정이거나 비밀번호 불일치 (401 Unauthorized)
    ///
    /// 두 경우를 구분하지 않아 계정 존재 여부가 노출되지 않습니다.
    #[error("invalid credentials")]
    InvalidCredentials,

    /// Authorization 헤더가 없거나 Bearer 형식이 아님 (401 Unauthorized)
    #[error("missing bearer token")]
    MissingToken,

    /// 서명 검증 실패 또는 구조가 깨진 토큰 (401 Unauthorized)
    #[error("invalid token signature")]
    InvalidSignature,

    /// 만료된 토큰 (401 Unauthorized)
    #[error("token expired")]
    Expired,

    /// 기대한 종류(access/refresh)와 다른 토큰 (401 Unauthorized)
    #[error("wrong token type")]
    WrongTokenType,

    /// 토큰의 계정 ID가 더 이상 존재하지 않음 (401 Unauthorized)
    #[error("account not found")]
    AccountNotFound,

    /// 입력값 검증 에러 (422 Unprocessable Entity)
    #[error("입력값이 올바르지 않습니다: {0}")]
    MalformedInput(String),

    /// 데이터베이스 관련 에러 (500 Internal Server Error)
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// 내부 서버 에러 (500 Internal Server Error)
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    /// 401로 수렴되는 인증/토큰 실패인지 확인
    pub fn is_unauthorized(&self) -> bool {
        matches!(
            self,
            AppError::InvalidCredentials
                | AppError::MissingToken
                | AppError::InvalidSignature
                | AppError::Expired
                | AppError::WrongTokenType
                | AppError::AccountNotFound
        )
    }

    /// 클라이언트에게 전달되는 메시지
    ///
    /// 토큰 경로의 변형들은 모두 같은 문자열로 수렴합니다.
    fn public_message(&self) -> String {
        match self {
            AppError::DuplicateUsername | AppError::DuplicateEmail | AppError::MalformedInput(_) => {
                self.to_string()
            }
            AppError::InvalidCredentials => INVALID_CREDENTIALS_MESSAGE.to_string(),
            AppError::DatabaseError(_) | AppError::InternalError(_) => INTERNAL_ERROR_MESSAGE.to_string(),
            _ => UNAUTHORIZED_MESSAGE.to_string(),
        }
    }
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::DuplicateUsername | AppError::DuplicateEmail => StatusCode::CONFLICT,
            AppError::MalformedInput(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::DatabaseError(_) | AppError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            _ => StatusCode::UNAUTHORIZED,
        }
    }

    /// HTTP 에러 응답을 생성합니다.
    ///
    /// 5xx 에러의 상세 내용은 서버 로그에만 남기고 클라이언트에는 일반 메시지를 보냅니다.
    /// 401 응답에는 `WWW-Authenticate: Bearer` 헤더가 포함됩니다.
    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();

        if status.is_server_error() {
            log::error!("요청 처리 중 내부 오류: {}", self);
        }

        let mut builder = HttpResponse::build(status);
        if status == StatusCode::UNAUTHORIZED {
            builder.insert_header((header::WWW_AUTHENTICATE, "Bearer"));
        }

        builder.json(serde_json::json!({
            "error": self.public_message()
        }))
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

/// bcrypt, jsonwebtoken, 블로킹 풀 등 외부 에러를 `InternalError`로 감싸는 확장 trait
///
/// ```rust,ignore
/// let token = encode(&header, claims, &key).context("토큰 생성 실패")?;
/// ```
pub trait ErrorContext<T> {
    fn context(self, msg: &str) -> AppResult<T>;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", msg, e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;
    use actix_web::ResponseError;

    #[test]
    fn test_duplicate_errors_are_conflicts() {
        assert_eq!(AppError::DuplicateUsername.status_code(), StatusCode::CONFLICT);
        assert_eq!(AppError::DuplicateEmail.status_code(), StatusCode::CONFLICT);
    }

    #[test]
    fn test_malformed_input_response() {
        let error = AppError::MalformedInput("email".to_string());
        assert_eq!(error.error_response().status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn test_internal_error_response() {
        let error = AppError::DatabaseError("connection reset".to_string());
        assert_eq!(error.error_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_unauthorized_family() {
        let family = [
            AppError::InvalidCredentials,
            AppError::MissingToken,
            AppError::InvalidSignature,
            AppError::Expired,
            AppError::WrongTokenType,
            AppError::AccountNotFound,
        ];

        for error in family {
            assert!(error.is_unauthorized());
            let response = error.error_response();
            assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
            assert_eq!(
                response.headers().get(header::WWW_AUTHENTICATE).unwrap(),
                "Bearer"
            );
        }

        assert!(!AppError::DuplicateEmail.is_unauthorized());
    }

    #[actix_web::test]
    async fn test_token_failures_share_one_body() {
        let mut bodies = Vec::new();
        for error in [
            AppError::MissingToken,
            AppError::InvalidSignature,
            AppError::Expired,
            AppError::WrongTokenType,
            AppError::AccountNotFound,
        ] {
            let body = to_bytes(error.error_response().into_body()).await.unwrap();
            bodies.push(body);
        }

        assert!(bodies.windows(2).all(|pair| pair[0] == pair[1]));
    }

    #[actix_web::test]
    async fn test_internal_detail_is_not_exposed() {
        let error = AppError::DatabaseError("E11000 secret detail".to_string());
        let body = to_bytes(error.error_response().into_body()).await.unwrap();
        let text = String::from_utf8(body.to_vec()).unwrap();

        assert!(!text.contains("E11000"));
    }

    #[test]
    fn test_context_wraps_foreign_error_as_internal() {
        let result: Result<(), &str> = Err("rng unavailable");

        match result.context("패스워드 해싱 실패") {
            Err(AppError::InternalError(msg)) => {
                assert!(msg.starts_with("패스워드 해싱 실패"));
                assert!(msg.contains("rng unavailable"));
            }
            other => panic!("Expected InternalError, got {:?}", other),
        }
    }
}
