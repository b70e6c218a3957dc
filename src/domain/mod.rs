//! # Domain Layer Module
//!
//! 도메인 계층을 구성하는 핵심 모듈로, 계정과 토큰에 관한 타입을 담당합니다.
//!
//! ## 아키텍처 개요
//!
//! ```text
//! Domain Layer (이 모듈)
//! ├── Entities  - 영속화되는 계정 엔티티
//! ├── DTOs      - 요청/응답 객체
//! └── Models    - 토큰 클레임, 토큰 페어, 인증된 계정
//!      │
//!      ▼
//! Application Layer (Services)
//!      │
//!      ▼
//! Infrastructure Layer (Repositories, DB)
//! ```
//!
//! ## 사용자 등록 플로우
//!
//! ```rust,ignore
//! use crate::domain::{SignupRequest, AccountResponse};
//!
//! request.validate()?;
//! let account = credential_service
//!     .register(&request.username, &request.email, &request.password)
//!     .await?;
//! let response = AccountResponse::from(account);
//! ```

pub mod entities;
pub mod dto;
pub mod models;

pub use entities::Account;
pub use dto::{AccountResponse, LoginRequest, RefreshTokenRequest, SignupRequest, TokenResponse};
pub use models::{AuthenticatedAccount, ClaimSet, TokenKind, TokenPair};
