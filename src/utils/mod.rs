//! 공통 유틸리티 함수 모듈
//!
//! 애플리케이션 전체에서 사용되는 공통 유틸리티 함수들을 제공합니다.
//!
//! # Modules
//!
//! - [`string_utils`] - 입력 문자열 검증과 식별자 정규화
//! - [`display_terminal`] - 서버 시작 시 터미널 출력
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::utils::string_utils::normalize_email;
//! use crate::utils::display_terminal::print_boxed_title;
//!
//! let email = normalize_email("  Alice@Example.com ");
//! print_boxed_title("Credential Service");
//! ```

pub mod string_utils;
pub mod display_terminal;
