//! 인증 서비스 모듈
//!
//! - [`password_hasher`] - bcrypt 해싱/검증
//! - [`token_codec`] - HS256 토큰 인코딩/디코딩
//! - [`access_guard`] - 토큰 종류 확인과 계정 재조회
//! - [`session_service`] - 토큰 페어 발급과 리프레시

pub mod access_guard;
pub mod password_hasher;
pub mod session_service;
pub mod token_codec;

pub use access_guard::AccessGuard;
pub use password_hasher::CredentialHasher;
pub use session_service::SessionService;
pub use token_codec::TokenCodec;
