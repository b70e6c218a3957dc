//! # Domain Models Module
//!
//! 영속화되지 않는 도메인 모델들을 정의합니다.
//!
//! - [`token`] - 토큰 종류, 클레임 셋, 토큰 페어
//! - [`auth`] - 요청 단위로 전달되는 인증된 계정

pub mod auth;
pub mod token;

pub use auth::AuthenticatedAccount;
pub use token::{ClaimSet, TokenKind, TokenPair};
