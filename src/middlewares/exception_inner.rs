//! ExceptionMiddleware 응답 교체 로직
use std::rc::Rc;

use actix_web::body::EitherBody;
use actix_web::dev::{Service, ServiceRequest, ServiceResponse, forward_ready};
use actix_web::{Error, web};
use futures_util::future::LocalBoxFuture;

use crate::core::errors::AppError;
use crate::errors::from_framework_error;
use crate::exceptions::ExceptionController;

/// 에러가 첨부된 응답을 카탈로그 기반 응답으로 교체하는 서비스
pub struct ExceptionMiddlewareService<S> {
    pub service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for ExceptionMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, actix_web::Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = self.service.clone();

        Box::pin(async move {
            let res = service.call(req).await?;

            let Some(error) = res.response().error() else {
                return Ok(res.map_into_left_body());
            };

            let Some(controller) = res
                .request()
                .app_data::<web::Data<ExceptionController>>()
                .cloned()
            else {
                log::warn!("ExceptionController가 등록되지 않아 에러 응답을 그대로 반환합니다");
                return Ok(res.map_into_left_body());
            };

            let handled = match error.as_error::<AppError>() {
                Some(app_error) => controller.handle(app_error),
                None => controller.handle(&from_framework_error(error)),
            };
            let response = handled.map_err(|e| {
                log::error!("에러 응답 생성 실패: {}", e);
                actix_web::error::ErrorInternalServerError(e)
            })?;

            let (req, _) = res.into_parts();
            Ok(ServiceResponse::new(req, response).map_into_right_body())
        })
    }
}
