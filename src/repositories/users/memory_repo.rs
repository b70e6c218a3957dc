//! # 메모리 사용자 디렉터리
//!
//! 프로세스 메모리에 계정을 저장하는 구현체입니다.
//! 테스트와 `USER_STORE=memory` 로컬 실행에 사용되며, 재시작하면 초기화됩니다.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;

use super::UserDirectory;
use crate::domain::entities::Account;
use crate::errors::{AppError, AppResult};

/// `RwLock<HashMap>` 기반 사용자 디렉터리
///
/// 중복 검사와 삽입이 하나의 쓰기 잠금 안에서 수행되므로
/// 동시 가입 요청에서도 사용자명/이메일 유일성이 유지됩니다.
#[derive(Default)]
pub struct InMemoryUserDirectory {
    accounts: RwLock<HashMap<String, Account>>,
}

impl InMemoryUserDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// 저장된 계정 수
    pub fn len(&self) -> usize {
        self.accounts.read().map(|accounts| accounts.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn find_where<P>(&self, predicate: P) -> AppResult<Option<Account>>
    where
        P: Fn(&Account) -> bool,
    {
        let accounts = self
            .accounts
            .read()
            .map_err(|_| AppError::InternalError("계정 저장소 잠금 실패".to_string()))?;

        Ok(accounts.values().find(|account| predicate(account)).cloned())
    }
}

#[async_trait]
impl UserDirectory for InMemoryUserDirectory {
    async fn find_by_id(&self, id: &str) -> AppResult<Option<Account>> {
        let accounts = self
            .accounts
            .read()
            .map_err(|_| AppError::InternalError("계정 저장소 잠금 실패".to_string()))?;

        Ok(accounts.get(id).cloned())
    }

    async fn find_by_username(&self, username: &str) -> AppResult<Option<Account>> {
        self.find_where(|account| account.username == username)
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<Account>> {
        self.find_where(|account| account.email == email)
    }

    async fn insert(&self, account: Account) -> AppResult<Account> {
        let mut accounts = self
            .accounts
            .write()
            .map_err(|_| AppError::InternalError("계정 저장소 잠금 실패".to_string()))?;

        if accounts.values().any(|existing| existing.username == account.username) {
            return Err(AppError::DuplicateUsername);
        }
        if accounts.values().any(|existing| existing.email == account.email) {
            return Err(AppError::DuplicateEmail);
        }

        accounts.insert(account.id.clone(), account.clone());
        Ok(account)
    }
}
