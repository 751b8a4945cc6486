//! # Exceptions Module
//!
//! 요청 처리 중 발생한 에러를 구조화된 HTTP 에러 응답으로 변환하는 중앙 예외 처리 계층입니다.
//! Spring의 `@ControllerAdvice`와 유사한 역할을 수행합니다.
//!
//! ## 처리 흐름
//!
//! ```text
//! ┌──────────┐   ┌───────────────────┐   ┌─────────────────┐   ┌──────────────┐
//! │ AppError │──▶│  ErrorClassifier  │──▶│ ResponseBuilder │──▶│ ErrorLogSink │──▶ HTTP 응답
//! └──────────┘   │ (코드/심각도/인자) │   │ (카탈로그 조회)  │   │ (WARN/ERROR) │
//!                └───────────────────┘   └─────────────────┘   └──────────────┘
//! ```
//!
//! ## 모듈 구성
//!
//! - [`classifier`] - 에러 형태별 처리 규칙 선택
//! - [`response`] - 에러 응답 엔티티와 카탈로그 기반 빌더
//! - [`stack_trace`] - 진단 트레이스 렌더링과 길이 제한
//! - [`severity`], [`log_sink`] - 심각도와 로그 출력
//! - [`controller`] - 단일 진입점 [`ExceptionController`]

pub mod classifier;
pub mod controller;
pub mod error_code;
pub mod log_sink;
pub mod response;
pub mod severity;
pub mod stack_trace;

pub use classifier::{Classification, ClassifiedError, ErrorClassifier};
pub use controller::ExceptionController;
pub use error_code::{ErrorCode, MessageType};
pub use log_sink::{ErrorLogSink, LogSink};
pub use response::{ErrorResponse, ResponseBuilder};
pub use severity::Severity;
