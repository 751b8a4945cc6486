//! 예외 변환 미들웨어
//!
//! 핸들러나 추출기가 에러를 반환한 응답을 가로채
//! [`ExceptionController`](crate::exceptions::ExceptionController)가 만든 응답으로 교체합니다.

use std::future::{Ready, ready};
use std::rc::Rc;

use actix_web::{
    Error, Result,
    body::EitherBody,
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
};

use crate::middlewares::exception_inner::ExceptionMiddlewareService;

/// 예외 변환 미들웨어
///
/// 앱 데이터에 `web::Data<ExceptionController>`가 등록되어 있어야 합니다.
///
/// # Examples
///
/// ```rust,ignore
/// App::new()
///     .app_data(web::Data::new(controller))
///     .wrap(ExceptionMiddleware::new())
///     .configure(configure_all_routes)
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct ExceptionMiddleware;

impl ExceptionMiddleware {
    pub fn new() -> Self {
        Self
    }
}

impl<S, B> Transform<S, ServiceRequest> for ExceptionMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = ExceptionMiddlewareService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(ExceptionMiddlewareService {
            service: Rc::new(service),
        }))
    }
}
