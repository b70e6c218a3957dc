//! # MongoDB 사용자 디렉터리
//!
//! `users` 컬렉션에 계정을 저장합니다.
//!
//! ## 특징
//!
//! - **유니크 인덱스**: `username_unique`, `email_unique` 인덱스를 시작 시 생성
//! - **중복 방지 백스톱**: 중복 키 에러(11000)를 위반한 인덱스에 따라 도메인 에러로 변환
//! - **캐시 없음**: 조회는 항상 컬렉션의 현재 상태를 반환

use async_trait::async_trait;
use mongodb::{
    bson::doc,
    error::{ErrorKind, WriteFailure},
    options::IndexOptions,
    Collection, IndexModel,
};

use super::UserDirectory;
use crate::db::Database;
use crate::domain::entities::Account;
use crate::errors::{AppError, AppResult};

/// 계정 컬렉션 이름
pub const USERS_COLLECTION: &str = "users";

const USERNAME_INDEX: &str = "username_unique";
const EMAIL_INDEX: &str = "email_unique";
const DUPLICATE_KEY_CODE: i32 = 11000;

/// MongoDB 기반 사용자 디렉터리
#[derive(Clone)]
pub struct MongoUserDirectory {
    collection: Collection<Account>,
}

impl MongoUserDirectory {
    /// 컬렉션 핸들을 만들고 유니크 인덱스를 보장합니다.
    ///
    /// ```rust,ignore
    /// let database = Database::new(&DatabaseConfig::from_env()).await?;
    /// let directory = MongoUserDirectory::new(&database).await?;
    /// ```
    pub async fn new(database: &Database) -> AppResult<Self> {
        let directory = Self {
            collection: database.get_database().collection::<Account>(USERS_COLLECTION),
        };
        directory.create_indexes().await?;
        Ok(directory)
    }

    /// 유니크 인덱스와 생성일 인덱스를 생성합니다.
    ///
    /// 이미 존재하는 동일한 인덱스는 MongoDB가 무시합니다.
    pub async fn create_indexes(&self) -> AppResult<()> {
        let username_index = IndexModel::builder()
            .keys(doc! { "username": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .name(USERNAME_INDEX.to_string())
                .build())
            .build();

        let email_index = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .name(EMAIL_INDEX.to_string())
                .build())
            .build();

        let created_at_index = IndexModel::builder()
            .keys(doc! { "created_at": -1 })
            .options(IndexOptions::builder()
                .name("created_at_desc".to_string())
                .build())
            .build();

        self.collection
            .create_indexes([username_index, email_index, created_at_index])
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        log::info!("✅ users 컬렉션 인덱스 확인 완료");
        Ok(())
    }

    async fn find_one(&self, filter: mongodb::bson::Document) -> AppResult<Option<Account>> {
        self.collection
            .find_one(filter)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }
}

/// 쓰기 에러가 중복 키 위반이면 어떤 필드가 중복인지 판별합니다.
///
/// 에러 메시지에 위반된 인덱스 이름이 포함됩니다.
/// (`E11000 duplicate key error collection: db.users index: email_unique dup key: ...`)
pub(crate) fn duplicate_key_error(code: i32, message: &str) -> Option<AppError> {
    if code != DUPLICATE_KEY_CODE {
        return None;
    }

    if message.contains(USERNAME_INDEX) {
        Some(AppError::DuplicateUsername)
    } else if message.contains(EMAIL_INDEX) {
        Some(AppError::DuplicateEmail)
    } else {
        None
    }
}

fn map_insert_error(error: mongodb::error::Error) -> AppError {
    if let ErrorKind::Write(WriteFailure::WriteError(write_error)) = error.kind.as_ref() {
        if let Some(duplicate) = duplicate_key_error(write_error.code, &write_error.message) {
            log::warn!("저장소 수준 중복 거부: {}", duplicate);
            return duplicate;
        }
    }

    AppError::DatabaseError(error.to_string())
}

#[async_trait]
impl UserDirectory for MongoUserDirectory {
    async fn find_by_id(&self, id: &str) -> AppResult<Option<Account>> {
        self.find_one(doc! { "_id": id }).await
    }

    async fn find_by_username(&self, username: &str) -> AppResult<Option<Account>> {
        self.find_one(doc! { "username": username }).await
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<Account>> {
        self.find_one(doc! { "email": email }).await
    }

    // 사용자명에는 '@'가 들어갈 수 없으므로 두 조건이 동시에 다른 문서와 일치하지 않습니다
    async fn insert(&self, account: Account) -> AppResult<Account> {
        self.collection
            .insert_one(&account)
            .await
            .map_err(map_insert_error)?;

        Ok(account)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_username_index() {
        let message = "E11000 duplicate key error collection: app.users index: username_unique dup key: { username: \"alice\" }";
        assert_eq!(duplicate_key_error(11000, message), Some(AppError::DuplicateUsername));
    }

    #[test]
    fn test_duplicate_email_index() {
        let message = "E11000 duplicate key error collection: app.users index: email_unique dup key: { email: \"a@b.c\" }";
        assert_eq!(duplicate_key_error(11000, message), Some(AppError::DuplicateEmail));
    }

    #[test]
    fn test_other_write_errors_are_not_duplicates() {
        assert_eq!(duplicate_key_error(121, "Document failed validation"), None);
        assert_eq!(duplicate_key_error(11000, "index: _id_ dup key"), None);
    }
}
