//! # Authentication Configuration Module
//!
//! 토큰 서명 키와 토큰 수명 등 인증 관련 설정을 관리하는 모듈입니다.
//!
//! ## 필수 환경 변수 설정
//!
//! ```bash
//! export JWT_SECRET_KEY="your-super-secret-signing-key"
//! export ACCESS_TOKEN_EXPIRE_MINUTES="1440"
//! export REFRESH_TOKEN_EXPIRE_MINUTES="1440"
//! ```
//!
//! 개발/테스트 환경에서는 `JWT_SECRET_KEY`가 없으면 개발용 키를 사용하지만,
//! 스테이징/프로덕션 환경에서는 시작 시 에러가 발생합니다.
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::config::{AuthConfig, Environment};
//!
//! let config = AuthConfig::from_env(&Environment::current())?;
//! let codec = TokenCodec::new(config.signing_key());
//! ```

use std::env;
use std::fmt;

use chrono::Duration;
use thiserror::Error;

use super::data_config::Environment;

/// 토큰 수명 기본값 (분)
pub const DEFAULT_TOKEN_EXPIRE_MINUTES: i64 = 1440;

/// 토큰 수명 최대값 (분, 365일)
pub const MAX_TOKEN_EXPIRE_MINUTES: i64 = 525_600;

const DEVELOPMENT_SIGNING_KEY: &str = "development-only-signing-key-do-not-use-in-production";

/// 설정 로딩 실패
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("JWT_SECRET_KEY 환경 변수가 설정되지 않았습니다")]
    MissingSigningKey,

    #[error("{name} 값이 올바르지 않습니다: {value} (1-{max} 분)")]
    InvalidLifetime {
        name: &'static str,
        value: String,
        max: i64,
    },
}

/// 토큰 서명 및 수명 설정
///
/// 서명 키는 `Debug` 출력에서 가려집니다.
#[derive(Clone)]
pub struct AuthConfig {
    signing_key: String,
    access_ttl: Duration,
    refresh_ttl: Duration,
}

impl AuthConfig {
    pub fn new(signing_key: impl Into<String>, access_ttl: Duration, refresh_ttl: Duration) -> Self {
        Self {
            signing_key: signing_key.into(),
            access_ttl,
            refresh_ttl,
        }
    }

    /// 프로세스 환경 변수에서 설정을 읽습니다.
    pub fn from_env(environment: &Environment) -> Result<Self, ConfigError> {
        Self::from_lookup(environment, |name| env::var(name).ok())
    }

    /// 주어진 조회 함수로 설정을 읽습니다.
    ///
    /// # Errors
    ///
    /// * `ConfigError::MissingSigningKey` - 스테이징/프로덕션에서 서명 키 누락
    /// * `ConfigError::InvalidLifetime` - 토큰 수명이 숫자가 아니거나 허용 범위 밖
    pub fn from_lookup<F>(environment: &Environment, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let signing_key = match lookup("JWT_SECRET_KEY").filter(|key| !key.trim().is_empty()) {
            Some(key) => key,
            None if environment.allows_insecure_defaults() => {
                log::warn!("⚠️ JWT_SECRET_KEY 미설정: 개발용 서명 키를 사용합니다");
                DEVELOPMENT_SIGNING_KEY.to_string()
            }
            None => return Err(ConfigError::MissingSigningKey),
        };

        if signing_key.len() < 32 {
            log::warn!("⚠️ JWT_SECRET_KEY 길이가 32바이트 미만입니다");
        }

        let access_ttl = Self::lifetime(&lookup, "ACCESS_TOKEN_EXPIRE_MINUTES")?;
        let refresh_ttl = Self::lifetime(&lookup, "REFRESH_TOKEN_EXPIRE_MINUTES")?;

        Ok(Self::new(signing_key, access_ttl, refresh_ttl))
    }

    fn lifetime<F>(lookup: &F, name: &'static str) -> Result<Duration, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let Some(raw) = lookup(name) else {
            return Ok(Duration::minutes(DEFAULT_TOKEN_EXPIRE_MINUTES));
        };

        match raw.trim().parse::<i64>() {
            Ok(minutes) if (1..=MAX_TOKEN_EXPIRE_MINUTES).contains(&minutes) => {
                Ok(Duration::minutes(minutes))
            }
            _ => Err(ConfigError::InvalidLifetime {
                name,
                value: raw,
                max: MAX_TOKEN_EXPIRE_MINUTES,
            }),
        }
    }

    pub fn signing_key(&self) -> &str {
        &self.signing_key
    }

    pub fn access_ttl(&self) -> Duration {
        self.access_ttl
    }

    pub fn refresh_ttl(&self) -> Duration {
        self.refresh_ttl
    }
}

impl fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthConfig")
            .field("signing_key", &"<redacted>")
            .field("access_ttl_minutes", &self.access_ttl.num_minutes())
            .field("refresh_ttl_minutes", &self.refresh_ttl.num_minutes())
            .finish()
    }
}
