//! 계정 관련 DTO 모듈
//!
//! ```text
//! accounts/
//! ├── request/
//! │   ├── signup_request.rs   ← 회원가입
//! │   └── login_request.rs    ← 로그인
//! └── response/
//!     └── account_response.rs ← 계정 요약
//! ```

pub mod request;
pub mod response;

pub use request::{LoginRequest, SignupRequest};
pub use response::AccountResponse;
