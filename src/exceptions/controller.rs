//! 예외 처리 진입점
//!
//! 요청 처리 중 발생한 모든 [`AppError`]는 [`ExceptionController::dispatch`]
//! 하나를 거쳐 응답으로 변환됩니다.
//!
//! ```text
//! AppError ─▶ ErrorClassifier ─▶ ResponseBuilder ─▶ ErrorLogSink ─▶ (StatusCode, ErrorResponse)
//!                                      │
//!                                      ▼
//!                               MessageCatalog
//! ```

use std::sync::Arc;

use actix_web::HttpResponse;
use actix_web::http::StatusCode;
use log::Level;

use crate::config::ExceptionConfig;
use crate::core::errors::AppError;
use crate::messages::{CatalogError, MessageCatalog};

use super::classifier::{Classification, ClassifiedError, ErrorClassifier};
use super::error_code::ErrorCode;
use super::log_sink::{ErrorLogSink, LogSink};
use super::response::{ErrorResponse, ResponseBuilder};
use super::severity::Severity;
use super::stack_trace::render_trace;

/// 중앙 예외 처리기
///
/// 설정과 카탈로그는 시작 시 한 번 주입되며 이후 읽기 전용으로만 사용되므로
/// 여러 요청에서 동시에 호출할 수 있습니다.
///
/// # Examples
///
/// ```rust,ignore
/// let controller = ExceptionController::new(
///     Arc::new(PropertiesCatalog::bundled()),
///     ExceptionConfig::from_env(),
/// );
/// controller.verify_catalog()?;
///
/// let (status, body) = controller.dispatch(&AppError::MissingParameter {
///     name: "userId".to_string(),
/// })?;
/// ```
pub struct ExceptionController {
    classifier: ErrorClassifier,
    builder: ResponseBuilder,
    sink: Arc<dyn ErrorLogSink>,
}

impl ExceptionController {
    pub fn new(catalog: Arc<dyn MessageCatalog>, config: ExceptionConfig) -> Self {
        Self::with_sink(catalog, config, Arc::new(LogSink))
    }

    pub fn with_sink(
        catalog: Arc<dyn MessageCatalog>,
        config: ExceptionConfig,
        sink: Arc<dyn ErrorLogSink>,
    ) -> Self {
        Self {
            classifier: ErrorClassifier::new(),
            builder: ResponseBuilder::new(catalog, config),
            sink,
        }
    }

    /// 선언된 모든 코드의 카탈로그 항목을 검사합니다.
    ///
    /// 서버 시작 전에 호출하여 누락된 항목이나 잘못된 상태 코드를 즉시 드러냅니다.
    pub fn verify_catalog(&self) -> Result<(), CatalogError> {
        ErrorCode::DECLARED.iter().try_for_each(|code| self.verify_code(code))
    }

    fn verify_code(&self, code: &ErrorCode) -> Result<(), CatalogError> {
        let sample = AppError::internal("catalog verification");
        self.builder
            .build(&ClassifiedError {
                code: code.clone(),
                severity: Severity::Warn,
                params: None,
                raw: &sample,
            })
            .map(|_| ())
    }

    /// 에러 하나를 응답으로 변환합니다.
    ///
    /// `Error` 심각도에서는 원본 에러와 트레이스를 먼저 기록한 뒤 응답 요약을
    /// 한 번 더 기록합니다. `Warn` 심각도는 응답 요약만 기록합니다.
    ///
    /// # Errors
    ///
    /// 카탈로그 항목이 없거나 상태 코드가 잘못된 경우 `CatalogError`를 그대로 반환합니다.
    pub fn dispatch(&self, error: &AppError) -> Result<(StatusCode, ErrorResponse), CatalogError> {
        match self.classifier.classify(error) {
            Classification::Catalog(classified) => {
                if classified.severity == Severity::Error {
                    self.sink.emit(Level::Error, &Self::dump(error));
                }

                let response = self.builder.build(&classified)?;
                self.sink
                    .emit(classified.severity.level(), &response.to_string());

                Ok((response.status_code(), response))
            }
            Classification::Unreadable { message, raw } => {
                self.sink.emit(Level::Warn, &Self::dump(raw));

                let response = self.builder.raw_bad_request(message);
                Ok((response.status_code(), response))
            }
        }
    }

    /// [`dispatch`](Self::dispatch) 결과를 JSON 응답으로 직렬화합니다.
    pub fn handle(&self, error: &AppError) -> Result<HttpResponse, CatalogError> {
        let (status, body) = self.dispatch(error)?;
        Ok(HttpResponse::build(status).json(body))
    }

    fn dump(error: &AppError) -> String {
        format!("{}\n{}", error, render_trace(error))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::errors::{ConversionError, InvalidFormat, ServiceException, TargetType};
    use crate::exceptions::log_sink::RecordingSink;
    use crate::messages::PropertiesCatalog;

    fn controller_with(
        catalog: PropertiesCatalog,
        limit: usize,
    ) -> (ExceptionController, Arc<RecordingSink>) {
        let sink = Arc::new(RecordingSink::default());
        let controller = ExceptionController::with_sink(
            Arc::new(catalog),
            ExceptionConfig::new(limit, "/api/v1/docs/errors"),
            sink.clone(),
        );
        (controller, sink)
    }

    fn controller(limit: usize) -> (ExceptionController, Arc<RecordingSink>) {
        controller_with(PropertiesCatalog::bundled(), limit)
    }

    #[test]
    fn test_bundled_catalog_covers_declared_codes() {
        let (controller, _) = controller(1000);
        assert_eq!(controller.verify_catalog(), Ok(()));
    }

    #[test]
    fn test_verify_catalog_reports_missing_entries() {
        let (controller, _) = controller_with(
            PropertiesCatalog::parse("ENTITY_NOT_FOUNDSTATUS=404\n"),
            1000,
        );

        assert_eq!(
            controller.verify_catalog(),
            Err(CatalogError::MissingKey("ENTITY_NOT_FOUNDMESSAGE".to_string()))
        );
    }

    #[test]
    fn test_missing_parameter_response() {
        let (controller, sink) = controller(1000);
        let error = AppError::MissingParameter {
            name: "userId".to_string(),
        };

        let (status, response) = controller.dispatch(&error).unwrap();

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(response.error_code, "E-PAR-001");
        assert!(response.message.contains("userId"));
        assert!(response.stack_trace.is_some());
        assert_eq!(sink.levels(), vec![Level::Warn]);
    }

    #[test]
    fn test_domain_error_uses_own_code_without_trace() {
        let (controller, sink) = controller(1000);
        let error = AppError::from(ServiceException::new("ENTITY_NOT_FOUND", ["42", "User"]));

        let (status, response) = controller.dispatch(&error).unwrap();

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(response.error_code, "E-ENT-001");
        assert_eq!(response.message, "User with id 42 was not found");
        assert_eq!(response.stack_trace, None);
        assert_eq!(sink.levels(), vec![Level::Warn]);
    }

    #[test]
    fn test_non_numeric_parameter() {
        let (controller, _) = controller(1000);
        let error = AppError::TypeMismatch {
            name: "age".to_string(),
            cause: Some(ConversionError::NumberFormat("\"abc\"".to_string())),
        };

        let (status, response) = controller.dispatch(&error).unwrap();

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(response.error_code, "E-PAR-003");
        assert!(response.message.contains("age"));
    }

    #[test]
    fn test_enum_body_error_lists_accepted_values() {
        let (controller, _) = controller(1000);
        let error = AppError::MessageNotReadable {
            message: "JSON parse error".to_string(),
            cause: Some(InvalidFormat {
                value: "FOO".to_string(),
                target: TargetType::Enum(vec!["A".to_string(), "B".to_string(), "C".to_string()]),
            }),
        };

        let (status, response) = controller.dispatch(&error).unwrap();

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(response.error_code, "E-PAR-005");
        assert!(response.message.contains("FOO"));
        assert!(response.message.contains("A, B, C"));
    }

    #[test]
    fn test_unreadable_body_returns_raw_bad_request() {
        let (controller, sink) = controller(1000);
        let error = AppError::MessageNotReadable {
            message: "EOF while parsing an object".to_string(),
            cause: None,
        };

        let (status, response) = controller.dispatch(&error).unwrap();

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(response.message, "EOF while parsing an object");
        assert_eq!(response.error_code, "");
        assert_eq!(response.stack_trace, None);
        assert_eq!(sink.levels(), vec![Level::Warn]);
    }

    #[test]
    fn test_unknown_error_logs_twice_at_error_level() {
        let (controller, sink) = controller(1000);
        let error = AppError::internal("socket closed");

        let (status, response) = controller.dispatch(&error).unwrap();

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(response.error_code, "E-SYS-001");
        assert_eq!(sink.levels(), vec![Level::Error, Level::Error]);

        let lines = sink.lines();
        assert!(lines[0].1.starts_with("socket closed\nInternal: socket closed"));
        assert_eq!(lines[1].1, response.to_string());
    }

    #[test]
    fn test_timeout_maps_to_gateway_timeout() {
        let (controller, sink) = controller(1000);
        let error = AppError::Timeout("query exceeded 5s".to_string());

        let (status, response) = controller.dispatch(&error).unwrap();

        assert_eq!(status, StatusCode::GATEWAY_TIMEOUT);
        assert_eq!(response.error_code, "E-SYS-002");
        assert_eq!(sink.levels().len(), 2);
    }

    #[test]
    fn test_stack_trace_is_bounded_by_limit() {
        let (controller, _) = controller(10);
        let error = AppError::internal("x".repeat(200));

        let (_, response) = controller.dispatch(&error).unwrap();

        let trace = response.stack_trace.unwrap();
        assert_eq!(trace.chars().count(), 10 + "...".len());
        assert!(trace.ends_with("..."));
    }

    #[test]
    fn test_stack_trace_within_limit_is_complete() {
        let (controller, _) = controller(1000);
        let error = AppError::MethodNotSupported {
            method: "PATCH".to_string(),
            supported: vec!["GET".to_string()],
        };

        let (status, response) = controller.dispatch(&error).unwrap();

        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(response.stack_trace, Some(render_trace(&error)));
    }

    #[test]
    fn test_missing_catalog_entry_propagates() {
        let (controller, _) = controller(1000);
        let error = AppError::from(ServiceException::new("NOT_DECLARED", Vec::<String>::new()));

        assert_eq!(
            controller.dispatch(&error),
            Err(CatalogError::MissingKey("NOT_DECLAREDSTATUS".to_string()))
        );
    }

    #[test]
    fn test_dispatch_is_deterministic() {
        let (controller, _) = controller(1000);
        let error = AppError::IllegalArgument("id must be positive".to_string());

        assert_eq!(controller.dispatch(&error), controller.dispatch(&error));
    }

    #[actix_web::test]
    async fn test_handle_serializes_json_body() {
        let (controller, _) = controller(1000);
        let error = AppError::ObjectNotFound {
            entity: "User".to_string(),
            id: "7".to_string(),
        };

        let response = controller.handle(&error).unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let bytes = actix_web::body::to_bytes(response.into_body()).await.unwrap();
        let body: ErrorResponse = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body.error_code, "E-ENT-001");
        assert_eq!(body.message, "User with id 7 was not found");
    }
}
