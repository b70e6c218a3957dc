//! # Service Layer
//!
//! 비즈니스 로직 계층입니다. 모든 서비스는 시작 시 한 번 생성되어
//! `web::Data`로 핸들러와 공유되며, 요청 간 상태를 갖지 않습니다.
//!
//! ```text
//! CredentialService ──► UserDirectory
//!        │                   ▲
//!        ▼                   │
//! CredentialHasher     AccessGuard ◄── SessionService
//!                           │               │
//!                           ▼               ▼
//!                       TokenCodec ◄────────┘
//! ```

use std::sync::Arc;

use actix_web::web;

use crate::config::AuthConfig;
use crate::errors::AppResult;
use crate::repositories::users::UserDirectory;

pub mod auth;
pub mod users;

pub use auth::{AccessGuard, CredentialHasher, SessionService, TokenCodec};
pub use users::CredentialService;

/// 핸들러와 미들웨어가 공유하는 서비스 묶음
///
/// ```rust,ignore
/// let services = AuthServices::new(directory, CredentialHasher::from_config(), &auth_config)?;
///
/// HttpServer::new(move || {
///     App::new()
///         .configure(|cfg| services.configure(cfg))
///         .configure(configure_all_routes)
/// })
/// ```
#[derive(Clone)]
pub struct AuthServices {
    pub credentials: web::Data<CredentialService>,
    pub sessions: web::Data<SessionService>,
    pub guard: web::Data<AccessGuard>,
}

impl AuthServices {
    /// 하나의 디렉터리와 하나의 토큰 코덱을 공유하는 서비스들을 생성합니다.
    pub fn new(directory: Arc<dyn UserDirectory>, hasher: CredentialHasher, config: &AuthConfig) -> AppResult<Self> {
        let codec = Arc::new(TokenCodec::from_config(config));

        let credentials = CredentialService::new(Arc::clone(&directory), hasher)?;
        let sessions = SessionService::from_config(Arc::clone(&directory), Arc::clone(&codec), config);
        let guard = AccessGuard::new(directory, codec);

        Ok(Self {
            credentials: web::Data::new(credentials),
            sessions: web::Data::new(sessions),
            guard: web::Data::new(guard),
        })
    }

    /// 서비스들을 app data로 등록합니다.
    pub fn configure(&self, cfg: &mut web::ServiceConfig) {
        cfg.app_data(self.credentials.clone())
            .app_data(self.sessions.clone())
            .app_data(self.guard.clone());
    }
}
