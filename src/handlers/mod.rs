//! HTTP 요청 핸들러 모듈
//!
//! 핸들러는 `Result<HttpResponse, AppError>`를 반환하며, 에러 응답은
//! `ExceptionMiddleware`가 일괄적으로 구조화된 JSON으로 변환합니다.

pub mod users;

use actix_web::{HttpRequest, HttpResponse, Route, web};

use crate::core::errors::AppError;

/// 리소스에 등록되지 않은 HTTP 메서드 요청을 `MethodNotSupported`로 응답하는 라우트
///
/// # Examples
///
/// ```rust,ignore
/// web::resource("/{id}")
///     .route(web::get().to(get_user))
///     .default_service(method_not_supported(&["GET"]))
/// ```
pub fn method_not_supported(supported: &'static [&'static str]) -> Route {
    web::to(move |req: HttpRequest| async move {
        Err::<HttpResponse, _>(AppError::MethodNotSupported {
            method: req.method().to_string(),
            supported: supported.iter().map(|method| method.to_string()).collect(),
        })
    })
}
