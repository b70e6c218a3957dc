//! 자격 증명 서비스 메인 애플리케이션
//!
//! Actix-web 기반의 HTTP 서버를 구동하고 모든 서비스를 초기화합니다.
//! 설정에 따라 MongoDB 또는 인메모리 계정 디렉터리를 사용합니다.

use std::sync::Arc;

use actix_cors::Cors;
use actix_web::http::header;
use actix_web::{middleware, App, HttpServer};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info, warn};

use credential_service::config::{AuthConfig, CorsConfig, DatabaseConfig, Environment, ServerConfig, UserStore};
use credential_service::db::Database;
use credential_service::repositories::{InMemoryUserDirectory, MongoUserDirectory, UserDirectory};
use credential_service::routes::configure_all_routes;
use credential_service::services::{AuthServices, CredentialHasher};
use credential_service::utils::display_terminal::{
    print_boxed_title, print_startup_summary, print_step_complete, print_step_start, print_sub_task,
};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // 환경 설정 및 로깅 초기화
    load_env_file();
    init_logging();

    print_boxed_title("Credential Service");
    let environment = Environment::current();
    info!("🚀 자격 증명 서비스 시작중... (환경: {:?})", environment);

    // 토큰 설정은 서버 시작 전에 검증
    print_step_start(1, "인증 설정 로드");
    let auth_config = AuthConfig::from_env(&environment).map_err(|e| {
        error!("인증 설정 오류: {}", e);
        std::io::Error::other(e)
    })?;
    print_sub_task("access 토큰 수명", &format!("{}분", auth_config.access_ttl().num_minutes()));
    print_sub_task("refresh 토큰 수명", &format!("{}분", auth_config.refresh_ttl().num_minutes()));
    print_step_complete(1, "인증 설정 로드");

    print_step_start(2, "계정 디렉터리 초기화");
    let directory = initialize_directory().await?;
    print_step_complete(2, "계정 디렉터리 초기화");

    print_step_start(3, "서비스 초기화");
    let hasher = CredentialHasher::from_config();
    print_sub_task("bcrypt cost", &hasher.cost().to_string());
    let services = AuthServices::new(directory, hasher, &auth_config).map_err(|e| {
        error!("서비스 초기화 실패: {}", e);
        std::io::Error::other(e.to_string())
    })?;
    print_step_complete(3, "서비스 초기화");

    info!("✅ 모든 서비스가 성공적으로 초기화되었습니다!");

    // HTTP 서버 시작
    start_http_server(services).await
}

/// HTTP 서버를 구성하고 실행합니다
///
/// CORS, 로깅, 경로 정규화 미들웨어를 포함합니다.
///
/// # Errors
///
/// * `std::io::Error` - 포트 바인딩 실패 또는 서버 실행 오류
async fn start_http_server(services: AuthServices) -> std::io::Result<()> {
    let bind_address = ServerConfig::bind_address();
    let allowed_origins = CorsConfig::allowed_origins();

    print_startup_summary(&bind_address);
    info!("🌐 서버가 http://{} 에서 실행중입니다", bind_address);
    info!("📍 Health check: http://{}/health", bind_address);

    HttpServer::new(move || {
        App::new()
            .wrap(configure_cors(&allowed_origins))
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())
            .configure(|cfg| services.configure(cfg))
            .configure(configure_all_routes)
    })
        .bind(&bind_address)?
        .workers(ServerConfig::workers())
        .run()
        .await
}

/// 환경별 설정 파일을 로드합니다
///
/// # Environment Variables
///
/// * `PROFILE=dev` - .env.dev 파일 로드 (기본값)
/// * `PROFILE=prod` - .env.prod 파일 로드
/// * 기타 - 기본 .env 파일 로드
fn load_env_file() {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    // 로거 초기화 전이므로 결과는 stderr로 출력
    match profile.as_str() {
        "prod" => {
            if let Err(e) = dotenv::from_filename(".env.prod") {
                eprintln!(".env.prod 파일 로드 실패: {}", e);
            }
        }
        "dev" => {
            if let Err(e) = dotenv::from_filename(".env.dev") {
                eprintln!(".env.dev 파일 로드 실패: {}", e);
            }
        }
        _ => {
            dotenv().ok();
        }
    }
}

/// 로깅 시스템을 초기화합니다
///
/// * `RUST_LOG` - 로깅 레벨 설정 (기본값: "info,actix_web=debug")
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=debug"));
}

/// `USER_STORE` 설정에 따라 계정 디렉터리를 생성합니다
async fn initialize_directory() -> std::io::Result<Arc<dyn UserDirectory>> {
    let config = DatabaseConfig::from_env();

    match config.user_store {
        UserStore::Memory => {
            warn!("인메모리 계정 디렉터리 사용: 재시작 시 모든 계정이 사라집니다");
            print_sub_task("저장소", "memory");
            Ok(Arc::new(InMemoryUserDirectory::new()))
        }
        UserStore::MongoDb => {
            info!("📡 데이터베이스 연결 중...");
            let database = Database::new(&config).await.map_err(|e| {
                error!("데이터베이스 연결 실패: {}", e);
                std::io::Error::other(e)
            })?;

            let directory = MongoUserDirectory::new(&database).await.map_err(|e| {
                error!("계정 컬렉션 초기화 실패: {}", e);
                std::io::Error::other(e.to_string())
            })?;

            print_sub_task("저장소", &format!("mongodb ({})", database.database_name()));
            Ok(Arc::new(directory))
        }
    }
}

/// CORS 설정을 구성합니다
fn configure_cors(allowed_origins: &[String]) -> Cors {
    let cors = allowed_origins
        .iter()
        .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin));

    cors.allowed_methods(vec!["GET", "POST", "OPTIONS"])
        .allowed_headers(vec![header::AUTHORIZATION, header::ACCEPT, header::CONTENT_TYPE])
        .max_age(3600)
}
