//! # Domain Entities Module
//!
//! 비즈니스 도메인의 핵심 엔티티들을 정의합니다.
//! MongoDB 문서와 직접 매핑되는 데이터 구조체들을 포함합니다.
//!
//! ## 엔티티 설계 원칙
//!
//! - **불변 식별자**: `_id`는 생성 시 한 번 부여되고 변경되지 않습니다
//! - **민감 정보 분리**: 해시된 패스워드는 엔티티에만 존재하고 응답 DTO로 나가지 않습니다
//! - **직렬화**: `serde`를 통해 BSON/JSON 양쪽으로 변환됩니다
//!
//! ## 모듈 구조
//!
//! ```text
//! entities/
//! ├── mod.rs
//! └── accounts/
//!     ├── mod.rs
//!     └── account.rs   ← Account 엔티티
//! ```

pub mod accounts;

pub use accounts::Account;
