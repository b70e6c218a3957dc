//! 패스워드 해싱 서비스
//!
//! bcrypt를 사용한 단방향 해싱과 검증을 제공합니다.
//! 해시마다 임의의 salt가 포함되므로 같은 입력도 매번 다른 문자열이 됩니다.
//!
//! 해싱은 의도적으로 CPU 비용이 크기 때문에, 요청 처리 경로에서는
//! [`CredentialHasher::hash_blocking`] / [`CredentialHasher::verify_blocking`]으로
//! actix 블로킹 스레드 풀에서 실행합니다.
//!
//! bcrypt는 72바이트를 넘는 입력을 잘라서 처리하므로, 잘리지 않는 API만 사용하여
//! 72바이트를 초과하는 비밀번호는 해싱을 거부하고 검증은 항상 실패시킵니다.

use std::time::Instant;

use actix_web::web;

use bcrypt::BcryptError;

use crate::config::PasswordConfig;
use crate::errors::{AppError, AppResult, ErrorContext};

/// bcrypt 기반 패스워드 해셔
///
/// 상태는 cost 값뿐이며 복제 비용이 없습니다.
#[derive(Debug, Clone, Copy)]
pub struct CredentialHasher {
    cost: u32,
}

impl CredentialHasher {
    pub fn new(cost: u32) -> Self {
        Self {
            cost: PasswordConfig::clamp_cost(cost),
        }
    }

    /// 환경 설정(`BCRYPT_COST`, `ENVIRONMENT`)에 맞는 해셔를 생성합니다.
    pub fn from_config() -> Self {
        Self::new(PasswordConfig::bcrypt_cost())
    }

    pub fn cost(&self) -> u32 {
        self.cost
    }

    /// 패스워드를 해싱합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::MalformedInput` - 72바이트를 초과하는 비밀번호
    /// * `AppError::InternalError` - bcrypt 내부 오류(난수 생성 실패 등)
    pub fn hash(&self, secret: &str) -> AppResult<String> {
        let started = Instant::now();
        let hashed = match bcrypt::non_truncating_hash(secret, self.cost) {
            Err(BcryptError::Truncation(len)) => {
                return Err(AppError::MalformedInput(format!(
                    "비밀번호는 {}바이트 이하여야 합니다 (입력: {}바이트)",
                    PasswordConfig::MAX_SECRET_BYTES,
                    len
                )));
            }
            other => other.context("패스워드 해싱 실패")?,
        };

        log::debug!("패스워드 해싱 완료 (cost={}, {}ms)", self.cost, started.elapsed().as_millis());
        Ok(hashed)
    }

    /// 패스워드가 해시와 일치하는지 확인합니다.
    ///
    /// 해시 비교는 상수 시간으로 수행됩니다.
    /// 형식이 잘못된 해시나 72바이트를 초과하는 비밀번호는 에러 대신 `false`를 반환하며,
    /// 원인은 debug 로그로만 남깁니다.
    pub fn verify(&self, hash_value: &str, secret: &str) -> bool {
        match bcrypt::non_truncating_verify(secret, hash_value) {
            Ok(matched) => matched,
            Err(e) => {
                log::debug!("패스워드 검증 불가: {}", e);
                false
            }
        }
    }

    /// 블로킹 스레드 풀에서 해싱합니다.
    pub async fn hash_blocking(&self, secret: String) -> AppResult<String> {
        let hasher = *self;
        web::block(move || hasher.hash(&secret))
            .await
            .context("해싱 작업 실행 실패")?
    }

    /// 블로킹 스레드 풀에서 검증합니다.
    ///
    /// 작업 실행 자체가 실패한 경우에도 `false`를 반환합니다.
    pub async fn verify_blocking(&self, hash_value: String, secret: String) -> bool {
        let hasher = *self;
        match web::block(move || hasher.verify(&hash_value, &secret)).await {
            Ok(matched) => matched,
            Err(e) => {
                log::error!("패스워드 검증 작업 실행 실패: {}", e);
                false
            }
        }
    }
}

impl Default for CredentialHasher {
    fn default() -> Self {
        Self::from_config()
    }
}
