//! API 라우트 설정 모듈
//!
//! 사용자 리소스와 헬스체크 엔드포인트를 등록하고, 추출기 에러 핸들러를
//! 앱 데이터로 설정하여 모든 요청 에러가 `AppError`로 표현되도록 합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use actix_web::{web, App};
//!
//! let app = App::new()
//!     .app_data(controller)
//!     .app_data(user_service)
//!     .wrap(ExceptionMiddleware::new())
//!     .configure(configure_all_routes);
//! ```

use actix_web::web;
use serde_json::json;

use crate::domain::dto::users::request::UserSearchQuery;
use crate::errors::{json_config, path_config, query_config, typed_query_config};
use crate::handlers::{self, method_not_supported};

/// 모든 라우트를 설정합니다
///
/// # Arguments
///
/// * `cfg` - Actix-web 서비스 설정 객체
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    // 추출기 에러 → AppError
    cfg.app_data(json_config())
        .app_data(query_config())
        .app_data(path_config());

    cfg.service(health_check);

    configure_user_routes(cfg);
}

/// 사용자 관련 라우트를 설정합니다
///
/// # Route Groups
///
/// - `GET /api/v1/users?name=&status=&limit=` - 사용자 검색
/// - `POST /api/v1/users` - 사용자 생성
/// - `GET /api/v1/users/{id}` - 사용자 조회
/// - `DELETE /api/v1/users/{id}` - 사용자 삭제 (`X-Requested-By` 헤더 필요)
///
/// 등록되지 않은 메서드는 각 리소스의 기본 서비스가 `MethodNotSupported`로 응답합니다.
///
/// # Examples
///
/// ```bash
/// curl -X POST http://localhost:8080/api/v1/users \
///   -H "Content-Type: application/json" \
///   -d '{"name":"ann","email":"ann@example.com","status":"ACTIVE"}'
///
/// curl -X DELETE http://localhost:8080/api/v1/users/1 -H "X-Requested-By: admin"
/// ```
fn configure_user_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/users")
            .service(
                web::resource("")
                    .app_data(typed_query_config::<UserSearchQuery>())
                    .route(web::get().to(handlers::users::search_users))
                    .route(web::post().to(handlers::users::create_user))
                    .default_service(method_not_supported(&["GET", "POST"])),
            )
            .service(
                web::resource("/{id}")
                    .route(web::get().to(handlers::users::get_user))
                    .route(web::delete().to(handlers::users::delete_user))
                    .default_service(method_not_supported(&["GET", "DELETE"])),
            ),
    );
}

/// 서비스 상태를 확인하는 헬스체크 엔드포인트
///
/// ```bash
/// curl http://localhost:8080/health
/// ```
#[actix_web::get("/health")]
async fn health_check() -> actix_web::HttpResponse {
    actix_web::HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": "restapi_exception_service",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
