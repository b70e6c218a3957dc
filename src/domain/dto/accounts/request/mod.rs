//! 계정 관련 요청 DTO
//!
//! 모든 요청 DTO는 `validator::Validate`를 구현하며,
//! 검증 실패 시 핸들러에서 `AppError::MalformedInput`(422)으로 변환됩니다.

pub mod login_request;
pub mod signup_request;

pub use login_request::LoginRequest;
pub use signup_request::SignupRequest;
