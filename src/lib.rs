//! 자격 증명 발급 및 세션 검증 서비스
//!
//! 계정 가입, 비밀번호 로그인, access/refresh 토큰 페어 발급,
//! 토큰 갱신과 보호된 요청의 토큰 검증을 제공합니다.
//!
//! # Features
//!
//! - **계정 가입**: 사용자명/이메일 고유성 보장, bcrypt 해시 저장
//! - **로그인**: 사용자명 또는 이메일로 인증, 실패 원인을 노출하지 않음
//! - **토큰 페어**: HS256 서명 access/refresh 토큰, 종류 혼용 차단
//! - **저장소**: MongoDB 또는 인메모리 디렉터리
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청/응답 처리, AuthMiddleware
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← CredentialService, SessionService, AccessGuard
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← UserDirectory
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    MongoDB      │ ← 저장소
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use credential_service::repositories::InMemoryUserDirectory;
//! use credential_service::services::{AuthServices, CredentialHasher};
//!
//! let services = AuthServices::new(
//!     Arc::new(InMemoryUserDirectory::new()),
//!     CredentialHasher::from_config(),
//!     &auth_config,
//! )?;
//!
//! let account = services.credentials.register("alice", "alice@example.com", "Str0ngP@ss").await?;
//! let tokens = services.sessions.login(&account)?;
//! ```

pub mod config;
pub mod db;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod utils;
pub mod routes;
pub mod handlers;
pub mod errors;
pub mod middlewares;
