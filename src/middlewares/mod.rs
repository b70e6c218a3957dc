//! # Middleware Module
//!
//! 요청 파이프라인 미들웨어입니다.
//!
//! - [`auth_middleware::AuthMiddleware`] - Bearer 토큰 검증 후 `AuthenticatedAccount` 주입

pub mod auth_middleware;
mod auth_inner;

// 미들웨어 재export
pub use auth_middleware::AuthMiddleware;
