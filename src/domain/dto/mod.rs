//! # Data Transfer Objects (DTO) Module
//!
//! API 경계에서 주고받는 요청/응답 객체들입니다.
//!
//! - **Request → 검증**: 요청 DTO는 `validator::Validate`로 형식을 검증합니다
//! - **Entity → Response**: `impl From<Entity> for Response`로 민감 정보를 걸러냅니다

pub mod accounts;
pub mod tokens;

pub use accounts::{AccountResponse, LoginRequest, SignupRequest};
pub use tokens::{RefreshTokenRequest, TokenResponse};
