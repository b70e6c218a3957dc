//! # HTTP Request Handlers Module
//!
//! HTTP 요청을 처리하는 핸들러 함수들을 정의하는 모듈입니다.
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//!   Client
//! └─────────────────────┬───────────────────────┘
//!                       │ HTTP Request/Response
//! ┌─────────────────────▼───────────────────────┐
//!   Handlers (이 모듈) - 입력 검증, 응답 변환        ← Web Layer
//! ├─────────────────────────────────────────────┤
//!   Services - 자격 증명, 세션, 토큰 검증            ← Service Layer
//! ├─────────────────────────────────────────────┤
//!   Repositories - 계정 디렉터리                    ← Repository Layer
//! └─────────────────────────────────────────────┘
//! ```
//!
//! 핸들러는 서비스를 `web::Data`로 주입받고, 모든 실패를 [`crate::errors::AppError`]로 반환합니다.
//! HTTP 상태 코드와 응답 본문은 `AppError`의 `ResponseError` 구현이 결정합니다.

pub mod auth;
