//! Accounts Entity Module
//!
//! 사용자 계정 도메인의 핵심 엔티티를 정의하는 모듈입니다.
//!
//! ```rust,ignore
//! use crate::domain::entities::accounts::Account;
//!
//! let account = Account::new_local("alice".to_string(), "alice@example.com".to_string(), hash);
//! ```

pub mod account;

pub use account::Account;
