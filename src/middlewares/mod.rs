//! 미들웨어 모듈
//!
//! ActixWeb 애플리케이션의 요청 처리 파이프라인에서 사용되는 미들웨어들을 제공합니다.
//! Spring Boot의 Filter와 Interceptor와 유사한 역할을 수행하며,
//! 횡단 관심사(Cross-cutting concerns)를 처리합니다.
//!
//! # 제공 미들웨어
//!
//! ### 1. 예외 변환 미들웨어 (ExceptionMiddleware)
//! - 핸들러/추출기가 반환한 에러를 감지
//! - `ExceptionController`로 구조화된 JSON 에러 응답 생성
//! - 카탈로그 설정 결함은 숨기지 않고 서버 에러로 전파
//!
//! # 사용 방법
//!
//! ```rust,ignore
//! use actix_web::{web, App, HttpServer};
//! use crate::middlewares::ExceptionMiddleware;
//!
//! HttpServer::new(move || {
//!     App::new()
//!         .app_data(controller.clone())
//!         .wrap(ExceptionMiddleware::new()) // 모든 라우트의 에러 응답 변환
//!         .configure(configure_all_routes)
//! })
//! ```

pub mod exception_middleware;
mod exception_inner;

// 미들웨어 재export
pub use exception_middleware::ExceptionMiddleware;
