//! REST API 예외 처리 서비스
//!
//! 요청 처리 중 발생하는 모든 에러를 하나의 진입점에서 분류하고,
//! 메시지 카탈로그를 기반으로 일관된 JSON 에러 응답으로 변환하는 actix-web 백엔드입니다.
//!
//! # Features
//!
//! - **에러 분류**: 닫힌 `AppError` 열거형에 대한 규칙 기반 디스패치
//! - **메시지 카탈로그**: `STATUS`/`MESSAGE`/`CODE` 키와 위치 기반 파라미터 치환
//! - **진단 트레이스**: 에러 체인 렌더링과 설정된 길이 제한
//! - **심각도 로깅**: 클라이언트 원인은 WARN, 서버 원인은 ERROR
//! - **미들웨어 통합**: 핸들러/추출기 에러를 자동으로 응답 변환
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트 + 추출기 에러 핸들러
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청/응답 처리, 입력 검증
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 비즈니스 규칙 (ServiceException)
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← 데이터 액세스 (RepositoryError)
//! └─────────────────┘
//!
//!   실패 시 ──▶ ExceptionMiddleware ──▶ ExceptionController ──▶ ErrorResponse (JSON)
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use restapi_exception_service::config::ExceptionConfig;
//! use restapi_exception_service::core::errors::AppError;
//! use restapi_exception_service::exceptions::ExceptionController;
//! use restapi_exception_service::messages::PropertiesCatalog;
//!
//! let controller = ExceptionController::new(
//!     Arc::new(PropertiesCatalog::bundled()),
//!     ExceptionConfig::from_env(),
//! );
//!
//! let (status, body) = controller.dispatch(&AppError::MissingParameter {
//!     name: "userId".to_string(),
//! })?;
//! assert_eq!(status.as_u16(), 400);
//! ```

pub mod core;
pub mod config;
pub mod messages;
pub mod exceptions;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod utils;
pub mod routes;
pub mod handlers;
pub mod errors;
pub mod middlewares;
