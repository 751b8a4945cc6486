//! # User HTTP Handlers
//!
//! | 메서드 | 경로 | 설명 | 상태 코드 |
//! |--------|------|------|-----------|
//! | `GET` | `/api/v1/users/{id}` | 사용자 조회 | 200 OK |
//! | `GET` | `/api/v1/users?name=&status=` | 사용자 검색 | 200 OK |
//! | `POST` | `/api/v1/users` | 사용자 생성 | 201 Created |
//! | `DELETE` | `/api/v1/users/{id}` | 사용자 삭제 (`X-Requested-By` 헤더 필수) | 204 No Content |
//!
//! ## 에러 응답 예시
//!
//! ```bash
//! curl http://localhost:8080/api/v1/users/abc
//! ```
//!
//! ```json
//! {
//!   "status": 400,
//!   "message": "Parameter id must be numeric",
//!   "errorCode": "E-PAR-003",
//!   "moreInfo": "/api/v1/docs/errors",
//!   "stackTrace": "TypeMismatch: Failed to convert value of parameter 'id'\nCaused by: For input string: can not parse \"abc\" to a u64"
//! }
//! ```

use actix_web::{HttpRequest, HttpResponse, web};

use crate::core::errors::AppError;
use crate::domain::dto::users::request::{CreateUserRequest, UserSearchQuery};
use crate::errors::ValidateExt;
use crate::services::users::UserService;
use crate::utils::request_utils::required_header;

/// 삭제 요청자를 식별하는 필수 헤더
pub const REQUESTED_BY_HEADER: &str = "X-Requested-By";

pub async fn get_user(
    id: web::Path<u64>,
    service: web::Data<UserService>,
) -> Result<HttpResponse, AppError> {
    let user = service.get_user(id.into_inner()).await?;

    Ok(HttpResponse::Ok().json(user))
}

pub async fn search_users(
    query: web::Query<UserSearchQuery>,
    service: web::Data<UserService>,
) -> Result<HttpResponse, AppError> {
    query.validate_params()?;

    let users = service.search_users(query.into_inner()).await?;

    Ok(HttpResponse::Ok().json(users))
}

pub async fn create_user(
    payload: web::Json<CreateUserRequest>,
    service: web::Data<UserService>,
) -> Result<HttpResponse, AppError> {
    payload.validate_body()?;

    let user = service.create_user(payload.into_inner()).await?;

    Ok(HttpResponse::Created().json(user))
}

pub async fn delete_user(
    req: HttpRequest,
    id: web::Path<u64>,
    service: web::Data<UserService>,
) -> Result<HttpResponse, AppError> {
    let requested_by = required_header(&req, REQUESTED_BY_HEADER)?;

    service.delete_user(id.into_inner(), &requested_by).await?;

    Ok(HttpResponse::NoContent().finish())
}
