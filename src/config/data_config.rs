//! 데이터 및 서버 설정 관리 모듈
//!
//! 실행 환경, 패스워드 해싱, 서버 바인딩, 저장소, CORS 관련 설정을 관리합니다.

use std::env;

/// 애플리케이션 실행 환경
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    /// 개발 환경 - 빠른 개발을 위한 설정
    Development,
    /// 테스트 환경 - 자동화된 테스트용 설정
    Test,
    /// 스테이징 환경 - 프로덕션 유사 환경
    Staging,
    /// 프로덕션 환경 - 최고 수준의 보안 및 성능
    Production,
}

impl Environment {
    /// 현재 실행 환경을 감지합니다.
    ///
    /// `ENVIRONMENT` 환경 변수를 확인하며,
    /// 설정되지 않은 경우 `Production`을 기본값으로 사용합니다.
    pub fn current() -> Self {
        Self::from_str(&env::var("ENVIRONMENT").unwrap_or_else(|_| "production".to_string()))
    }

    /// 문자열에서 Environment를 생성합니다.
    ///
    /// 알 수 없는 값인 경우 `Production`을 반환합니다.
    pub fn from_str(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "development" | "dev" => Environment::Development,
            "test" | "testing" => Environment::Test,
            "staging" | "stage" => Environment::Staging,
            _ => Environment::Production,
        }
    }

    /// 개발용 기본값(서명 키 등)을 허용하는 환경인지 확인
    pub fn allows_insecure_defaults(&self) -> bool {
        matches!(self, Environment::Development | Environment::Test)
    }
}

/// 패스워드 해싱 설정
pub struct PasswordConfig;

impl PasswordConfig {
    /// bcrypt가 처리하는 비밀번호 최대 길이 (바이트)
    pub const MAX_SECRET_BYTES: usize = 72;

    /// 현재 환경에 맞는 bcrypt cost를 반환합니다.
    ///
    /// `BCRYPT_COST`가 설정되어 있으면 4-15 범위로 보정하여 사용하고,
    /// 없거나 숫자가 아니면 환경별 기본값을 사용합니다.
    ///
    /// # Environment Defaults
    ///
    /// - Development/Test: 4 (빠른 처리)
    /// - Staging: 10 (중간 보안)
    /// - Production: 12 (고보안)
    pub fn bcrypt_cost() -> u32 {
        if let Ok(cost_str) = env::var("BCRYPT_COST") {
            if let Ok(cost) = cost_str.trim().parse::<u32>() {
                return Self::clamp_cost(cost);
            }
            log::warn!("BCRYPT_COST 파싱 실패: {}. 환경 기본값 사용", cost_str);
        }

        Self::bcrypt_cost_for_env(&Environment::current())
    }

    /// cost 값을 허용 범위(4-15)로 보정합니다.
    pub fn clamp_cost(cost: u32) -> u32 {
        let clamped = cost.clamp(4, 15);
        if clamped != cost {
            log::warn!("BCRYPT_COST={}는 허용 범위(4-15)를 벗어나 {}(으)로 보정됩니다", cost, clamped);
        }
        clamped
    }

    /// 특정 환경에 대한 bcrypt cost를 반환합니다.
    pub fn bcrypt_cost_for_env(env: &Environment) -> u32 {
        match env {
            Environment::Development => 4,
            Environment::Test => 4,
            Environment::Staging => 10,
            Environment::Production => 12,
        }
    }
}

/// 서버 바인딩 설정
pub struct ServerConfig;

impl ServerConfig {
    /// 서버가 바인딩할 포트를 반환합니다. 기본값: 8080
    pub fn port() -> u16 {
        env::var("PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse()
            .unwrap_or(8080)
    }

    /// 서버가 바인딩할 호스트 주소를 반환합니다. 기본값: "127.0.0.1"
    pub fn host() -> String {
        env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string())
    }

    /// HTTP 워커 스레드 수. 기본값: 4
    pub fn workers() -> usize {
        env::var("HTTP_WORKERS")
            .ok()
            .and_then(|v| v.parse().ok())
            .filter(|&n: &usize| n > 0)
            .unwrap_or(4)
    }

    /// `host:port` 형식의 바인딩 주소
    pub fn bind_address() -> String {
        format!("{}:{}", Self::host(), Self::port())
    }
}

/// 사용자 저장소 종류
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserStore {
    /// MongoDB `users` 컬렉션
    MongoDb,
    /// 프로세스 메모리 (로컬 실행/테스트용, 재시작 시 초기화)
    Memory,
}

impl UserStore {
    pub fn from_str(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "memory" | "in-memory" | "inmemory" => UserStore::Memory,
            _ => UserStore::MongoDb,
        }
    }
}

/// 데이터베이스 연결 설정
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// MongoDB 연결 URI
    pub uri: String,
    /// 사용할 데이터베이스 이름
    pub database_name: String,
    /// 사용자 저장소 종류
    pub user_store: UserStore,
}

impl DatabaseConfig {
    /// 환경 변수에서 데이터베이스 설정을 읽습니다.
    ///
    /// - `MONGODB_URI` (기본값: `mongodb://localhost:27017`)
    /// - `DATABASE_NAME` (기본값: `credential_service_dev`)
    /// - `USER_STORE` (`mongodb` | `memory`, 기본값: `mongodb`)
    pub fn from_env() -> Self {
        Self {
            uri: env::var("MONGODB_URI").unwrap_or_else(|_| "mongodb://localhost:27017".to_string()),
            database_name: env::var("DATABASE_NAME")
                .unwrap_or_else(|_| "credential_service_dev".to_string()),
            user_store: UserStore::from_str(
                &env::var("USER_STORE").unwrap_or_else(|_| "mongodb".to_string()),
            ),
        }
    }
}

/// CORS 설정
pub struct CorsConfig;

impl CorsConfig {
    /// 허용할 Origin 목록 (`CORS_ORIGINS`, 쉼표 구분)
    ///
    /// 설정되지 않은 경우 로컬 프론트엔드 개발 서버 주소를 허용합니다.
    pub fn allowed_origins() -> Vec<String> {
        let raw = env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:3000,http://127.0.0.1:3000".to_string());
        Self::parse_origins(&raw)
    }

    /// 쉼표로 구분된 Origin 문자열을 파싱합니다. 빈 항목은 무시합니다.
    pub fn parse_origins(raw: &str) -> Vec<String> {
        raw.split(',')
            .map(|origin| origin.trim())
            .filter(|origin| !origin.is_empty())
            .map(|origin| origin.to_string())
            .collect()
    }
}
