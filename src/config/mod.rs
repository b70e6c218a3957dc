//! # Configuration Module
//!
//! 백엔드 서비스의 설정 관리를 담당하는 모듈입니다.
//! 환경 변수 기반의 설정값들을 중앙집중식으로 관리합니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 실행 환경, 서버, 저장소, CORS, 패스워드 해싱 설정
//! - [`auth_config`] - 토큰 서명 키와 토큰 수명 설정
//!
//! ## 환경 변수 설정 가이드
//!
//! ### 필수 환경 변수 (스테이징/프로덕션)
//!
//! ```bash
//! export JWT_SECRET_KEY="your-super-secret-key"
//! ```
//!
//! ### 선택적 환경 변수
//!
//! ```bash
//! export ENVIRONMENT="production"          # development, test, staging, production
//! export HOST="0.0.0.0"
//! export PORT="8080"
//! export ACCESS_TOKEN_EXPIRE_MINUTES="1440"
//! export REFRESH_TOKEN_EXPIRE_MINUTES="1440"
//! export BCRYPT_COST="12"                  # 4-15 범위
//! export USER_STORE="mongodb"              # mongodb, memory
//! export MONGODB_URI="mongodb://localhost:27017"
//! export DATABASE_NAME="credential_service_dev"
//! export CORS_ORIGINS="http://localhost:3000,http://127.0.0.1:3000"
//! ```

pub mod data_config;
pub mod auth_config;

pub use data_config::*;
pub use auth_config::*;
