//! 에러 타입 모듈
//!
//! [`AppError`]와 [`AppResult`]를 재export 합니다.

pub mod errors;

pub use errors::*;
