//! # 사용자 디렉터리
//!
//! 계정 레코드를 저장하고 고유 필드로 조회하는 저장소 계약과 구현체들입니다.
//!
//! | 구현체 | 저장소 | 용도 |
//! |--------|--------|------|
//! | [`MongoUserDirectory`] | MongoDB `users` 컬렉션 | 운영 |
//! | [`InMemoryUserDirectory`] | 프로세스 메모리 | 테스트, 로컬 실행 |
//!
//! 서비스 계층은 `Arc<dyn UserDirectory>`만 알고 있으므로 구현체를 자유롭게 교체할 수 있습니다.

use async_trait::async_trait;

use crate::domain::entities::Account;
use crate::errors::AppResult;
use crate::utils::string_utils::is_email_identifier;

pub mod memory_repo;
pub mod user_repo;

pub use memory_repo::InMemoryUserDirectory;
pub use user_repo::MongoUserDirectory;

/// 계정 저장소 계약
///
/// 조회 메서드는 "없음"을 `Ok(None)`으로 명시적으로 반환하며,
/// `Err`는 저장소 자체의 장애만을 의미합니다.
#[async_trait]
pub trait UserDirectory: Send + Sync {
    async fn find_by_id(&self, id: &str) -> AppResult<Option<Account>>;

    /// 사용자명으로 조회 (대소문자 구분)
    async fn find_by_username(&self, username: &str) -> AppResult<Option<Account>>;

    /// 정규화된 이메일로 조회
    async fn find_by_email(&self, email: &str) -> AppResult<Option<Account>>;

    /// 사용자명 또는 이메일로 조회합니다.
    ///
    /// `@`가 있으면 이메일로만, 없으면 사용자명으로만 조회합니다.
    /// 한 식별자가 두 계정에 동시에 일치할 수 없습니다.
    async fn find_by_username_or_email(&self, identifier: &str) -> AppResult<Option<Account>> {
        if is_email_identifier(identifier) {
            self.find_by_email(identifier).await
        } else {
            self.find_by_username(identifier).await
        }
    }

    /// 새 계정을 저장합니다.
    ///
    /// # Errors
    ///
    /// 사용자명 또는 이메일이 이미 존재하면 저장소 수준에서 거부되어
    /// `AppError::DuplicateUsername` / `AppError::DuplicateEmail`을 반환합니다.
    async fn insert(&self, account: Account) -> AppResult<Account>;
}
