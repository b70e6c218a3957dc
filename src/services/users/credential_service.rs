//! # 자격 증명 서비스
//!
//! 회원가입(중복 확인 → 해싱 → 저장)과 로그인(조회 → 패스워드 검증)을 담당합니다.
//!
//! ## 보안 설계
//!
//! - **중복 확인 후 해싱**: 이미 존재하는 사용자명/이메일이면 해싱 비용을 쓰지 않고 거부
//! - **저장소 백스톱**: 확인과 삽입 사이의 경쟁은 저장소의 유니크 제약이 막고, 같은 에러로 변환
//! - **열거 방지**: 존재하지 않는 계정과 틀린 패스워드는 동일한 `InvalidCredentials`
//! - **타이밍 균등화**: 존재하지 않는 계정도 더미 해시로 검증을 한 번 수행

use std::sync::Arc;

use crate::domain::entities::Account;
use crate::errors::{AppError, AppResult};
use crate::repositories::users::UserDirectory;
use crate::services::auth::CredentialHasher;
use crate::utils::string_utils::{
    check_username_chars, normalize_email, normalize_identifier, validate_required_string,
};

const TIMING_DUMMY_SECRET: &str = "timing-equalization-dummy-secret";

pub struct CredentialService {
    directory: Arc<dyn UserDirectory>,
    hasher: CredentialHasher,
    dummy_hash: String,
}

impl CredentialService {
    /// 서비스를 생성합니다.
    ///
    /// 계정이 없는 로그인 시도에 사용할 더미 해시를 같은 cost로 미리 계산합니다.
    pub fn new(directory: Arc<dyn UserDirectory>, hasher: CredentialHasher) -> AppResult<Self> {
        let dummy_hash = hasher.hash(TIMING_DUMMY_SECRET)?;

        Ok(Self {
            directory,
            hasher,
            dummy_hash,
        })
    }

    /// 새 계정을 등록합니다.
    ///
    /// 사용자명은 앞뒤 공백만 제거하고 대소문자를 유지하며, 이메일은 소문자로 정규화됩니다.
    /// 사용자명에는 `@`를 포함한 허용되지 않은 문자를 쓸 수 없으므로 이메일과 겹치지 않습니다.
    ///
    /// # Errors
    ///
    /// * `AppError::DuplicateUsername` - 사용자명이 이미 존재
    /// * `AppError::DuplicateEmail` - 이메일이 이미 존재
    /// * `AppError::MalformedInput` - 빈 값, 허용되지 않은 사용자명 문자, 72바이트를 초과하는 패스워드
    pub async fn register(&self, username: &str, email: &str, secret: &str) -> AppResult<Account> {
        let username = validate_required_string(username, "사용자명")?;
        check_username_chars(&username).map_err(|message| AppError::MalformedInput(message.to_string()))?;
        let email = normalize_email(&validate_required_string(email, "이메일")?);
        if secret.is_empty() {
            return Err(AppError::MalformedInput("비밀번호는 필수입니다".to_string()));
        }

        if self.directory.find_by_username(&username).await?.is_some() {
            log::warn!("회원가입 거부 - 사용자명 중복: {}", username);
            return Err(AppError::DuplicateUsername);
        }

        if self.directory.find_by_email(&email).await?.is_some() {
            log::warn!("회원가입 거부 - 이메일 중복: {}", email);
            return Err(AppError::DuplicateEmail);
        }

        let password_hash = self.hasher.hash_blocking(secret.to_string()).await?;
        let account = Account::new_local(username, email, password_hash);

        let saved = self.directory.insert(account).await.inspect_err(|e| {
            if matches!(e, AppError::DuplicateUsername | AppError::DuplicateEmail) {
                log::warn!("회원가입 거부 - 동시 가입 경쟁에서 중복 감지: {}", e);
            }
        })?;

        log::info!("✅ 회원가입 완료 - 사용자: {}, ID: {}", saved.username, saved.id);
        Ok(saved)
    }

    /// 사용자명 또는 이메일과 패스워드로 계정을 인증합니다.
    ///
    /// # Errors
    ///
    /// 계정이 없거나 패스워드가 틀리면 구분 없이 `AppError::InvalidCredentials`를 반환합니다.
    pub async fn authenticate(&self, identifier: &str, secret: &str) -> AppResult<Account> {
        let identifier = normalize_identifier(identifier);
        if identifier.is_empty() {
            return Err(AppError::InvalidCredentials);
        }

        let Some(account) = self.directory.find_by_username_or_email(&identifier).await? else {
            // 계정 유무가 응답 시간으로 드러나지 않도록 같은 비용의 검증을 수행
            let _ = self
                .hasher
                .verify_blocking(self.dummy_hash.clone(), secret.to_string())
                .await;
            log::warn!("로그인 실패 - 식별자: {}", identifier);
            return Err(AppError::InvalidCredentials);
        };

        let matched = self
            .hasher
            .verify_blocking(account.password_hash.clone(), secret.to_string())
            .await;

        if !matched {
            log::warn!("로그인 실패 - 식별자: {}", identifier);
            return Err(AppError::InvalidCredentials);
        }

        log::info!("로그인 인증 성공 - 사용자: {}, ID: {}", account.username, account.id);
        Ok(account)
    }
}
