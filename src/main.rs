//! REST API 예외 처리 서비스 메인 애플리케이션
//!
//! Actix-web 기반의 HTTP 서버를 구동하고, 메시지 카탈로그와 예외 처리기를
//! 초기화한 뒤 사용자 REST API를 제공합니다.

use std::sync::Arc;

use actix_cors::Cors;
use actix_governor::{Governor, GovernorConfigBuilder};
use actix_web::http::header;
use actix_web::{App, HttpServer, middleware, web};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info};
use restapi_exception_service::config::{
    ExceptionConfig, MessagesConfig, RateLimitConfig, ServerConfig,
};
use restapi_exception_service::exceptions::ExceptionController;
use restapi_exception_service::messages::PropertiesCatalog;
use restapi_exception_service::middlewares::ExceptionMiddleware;
use restapi_exception_service::repositories::users::InMemoryAppUserRepository;
use restapi_exception_service::routes::configure_all_routes;
use restapi_exception_service::services::users::UserService;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // 환경 설정 및 로깅 초기화
    load_env_file();
    init_logging();

    info!("🚀 REST API 예외 처리 서비스 시작중...");

    let controller = web::Data::new(initialize_exception_controller());
    let user_service = web::Data::new(UserService::new(Arc::new(
        InMemoryAppUserRepository::new(),
    )));

    info!("✅ 모든 서비스가 성공적으로 초기화되었습니다!");

    // HTTP 서버 시작
    start_http_server(controller, user_service).await
}

/// 메시지 카탈로그를 로드하고 예외 처리기를 생성합니다
///
/// 선언된 모든 에러 코드의 카탈로그 항목을 검증하며, 누락된 항목이 있으면
/// 서버를 시작하지 않습니다.
///
/// # Environment Variables
///
/// * `MESSAGES_PATH` - 메시지 카탈로그 파일 경로 (없으면 번들 카탈로그 사용)
/// * `RESPONSE_STACKTRACE_SIZE` - 응답 스택 트레이스 최대 길이 (기본값: 1000)
/// * `RESPONSE_MORE_INFO` - 응답 `moreInfo` 값 (기본값: "/api/v1/docs/errors")
///
/// # Panics
///
/// * 카탈로그 파일 로드 실패 시
/// * 선언된 코드의 카탈로그 항목이 없거나 상태 코드가 잘못된 경우
fn initialize_exception_controller() -> ExceptionController {
    let config = ExceptionConfig::from_env();
    info!(
        "에러 응답 설정 로드됨: stack_trace_limit={}, more_info={}",
        config.stack_trace_limit(),
        config.more_info()
    );

    let messages_path = MessagesConfig::path();
    let catalog = PropertiesCatalog::load(messages_path.as_deref())
        .expect("메시지 카탈로그 로드 실패");
    info!("📚 메시지 카탈로그 로드됨: {}개 항목", catalog.len());

    let controller = ExceptionController::new(Arc::new(catalog), config);
    controller
        .verify_catalog()
        .expect("메시지 카탈로그 검증 실패");

    controller
}

/// HTTP 서버를 구성하고 실행합니다
///
/// Rate Limiting, CORS, 로깅, 경로 정규화, 예외 변환 미들웨어를 포함합니다.
///
/// # Errors
///
/// * `std::io::Error` - 포트 바인딩 실패 또는 서버 실행 오류
///
/// # Examples
///
/// ```rust,ignore
/// // 서버는 기본적으로 127.0.0.1:8080에서 실행됩니다
/// // Health check: http://127.0.0.1:8080/health
/// // API 엔드포인트: http://127.0.0.1:8080/api/v1/users
/// ```
async fn start_http_server(
    controller: web::Data<ExceptionController>,
    user_service: web::Data<UserService>,
) -> std::io::Result<()> {
    let bind_address = ServerConfig::bind_address();

    info!("🌐 서버가 http://{} 에서 실행중입니다", bind_address);
    info!("📍 Health check: http://{}/health", bind_address);
    info!("📍 Users API: http://{}/api/v1/users", bind_address);

    // Rate Limiting 설정
    let rate_limit_config = RateLimitConfig::from_env();
    let governor_conf = GovernorConfigBuilder::default()
        .requests_per_second(rate_limit_config.per_second)
        .burst_size(rate_limit_config.burst_size)
        .use_headers()
        .finish()
        .expect("Rate Limiting 설정 실패");

    info!(
        "🛡️ Rate Limiting 활성화: 초당 {}요청, 버스트 {}개",
        rate_limit_config.per_second,
        rate_limit_config.burst_size
    );

    HttpServer::new(move || {
        App::new()
            .app_data(controller.clone())
            .app_data(user_service.clone())
            // Rate Limiting 미들웨어 (가장 먼저 적용)
            .wrap(Governor::new(&governor_conf))
            .wrap(configure_cors())
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())
            // 핸들러/추출기 에러 → 카탈로그 기반 에러 응답
            .wrap(ExceptionMiddleware::new())
            .configure(configure_all_routes)
    })
    .bind(bind_address)?
    .workers(4)
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

    info!("Current profile: {}", profile);

    match profile.as_str() {
        "prod" => match dotenv::from_filename(".env.prod") {
            Ok(_) => info!(".env.prod 파일 로드 됨"),
            Err(e) => error!(".env.prod 파일 로드 실패: {}", e),
        },
        "dev" => match dotenv::from_filename(".env.dev") {
            Ok(_) => info!(".env.dev 파일 로드 됨"),
            Err(e) => error!(".env.dev 파일 로드 실패: {}", e),
        },
        _ => {
            dotenv().ok();
            info!("기본 .env 파일 로드");
        }
    }
}

/// 로깅 시스템을 초기화합니다
///
/// # Environment Variables
///
/// * `RUST_LOG` - 로깅 레벨 설정 (기본값: "info,actix_web=debug")
///
/// # Examples
///
/// ```bash
/// # 예외 처리 로그만 debug
/// RUST_LOG=info,ExceptionController=debug cargo run
/// ```
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=debug"));
}

/// CORS 설정을 구성합니다
///
/// # Allowed Origins
///
/// * `http://localhost:3000` - 프론트엔드 개발 서버
/// * `http://localhost:8080` - 자체 서버
/// * `127.0.0.1` 동등한 주소들
fn configure_cors() -> Cors {
    Cors::default()
        .allowed_origin("http://localhost:3000")
        .allowed_origin("http://127.0.0.1:3000")
        .allowed_origin("http://localhost:8080")
        .allowed_origin("http://127.0.0.1:8080")
        .allowed_methods(vec!["GET", "POST", "DELETE", "OPTIONS"])
        .allowed_headers(vec![
            header::ACCEPT,
            header::CONTENT_TYPE,
            header::HeaderName::from_static("x-requested-by"),
        ])
        .max_age(3600)
}
