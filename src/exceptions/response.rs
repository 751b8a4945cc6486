//! 에러 응답 엔티티와 응답 빌더
//!
//! 분류된 에러를 메시지 카탈로그의 `STATUS`, `MESSAGE`, `CODE` 항목으로
//! 클라이언트에 전송할 [`ErrorResponse`]로 변환합니다.
//!
//! ## 응답 형식
//!
//! ```json
//! {
//!   "status": 400,
//!   "message": "Required parameter userId was not informed",
//!   "errorCode": "E-PAR-001",
//!   "moreInfo": "/api/v1/docs/errors",
//!   "stackTrace": "MissingParameter: Required request parameter 'userId' is not present"
//! }
//! ```
//!
//! 도메인 에러의 경우 `stackTrace` 필드는 응답에서 생략됩니다.

use std::fmt;
use std::sync::Arc;

use actix_web::http::StatusCode;
use serde::{Deserialize, Serialize};

use crate::config::ExceptionConfig;
use crate::messages::{CatalogError, MessageCatalog};

use super::classifier::ClassifiedError;
use super::error_code::{ErrorCode, MessageType};
use super::stack_trace::capture_stack_trace;

/// 클라이언트에 직렬화되는 에러 응답
///
/// 요청 에러 하나당 한 번 생성되며 이후 변경되지 않습니다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    pub status: u16,
    pub message: String,
    pub error_code: String,
    pub more_info: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stack_trace: Option<String>,
}

impl ErrorResponse {
    pub fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }
}

impl fmt::Display for ErrorResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ErrorResponse [status={}, message={}, errorCode={}, moreInfo={}, stackTrace={}]",
            self.status,
            self.message,
            self.error_code,
            self.more_info,
            self.stack_trace.as_deref().unwrap_or("null")
        )
    }
}

/// 카탈로그 기반 에러 응답 빌더
///
/// I/O를 수행하지 않으며, 카탈로그 입력이 같으면 항상 같은 응답을 생성합니다.
pub struct ResponseBuilder {
    catalog: Arc<dyn MessageCatalog>,
    config: ExceptionConfig,
}

impl ResponseBuilder {
    pub fn new(catalog: Arc<dyn MessageCatalog>, config: ExceptionConfig) -> Self {
        Self { catalog, config }
    }

    /// 분류된 에러로부터 응답을 생성합니다.
    ///
    /// # Errors
    ///
    /// * `CatalogError::MissingKey` - 코드에 대한 카탈로그 항목이 없는 경우
    /// * `CatalogError::InvalidStatus` - `STATUS` 항목이 유효한 HTTP 상태 코드가 아닌 경우
    pub fn build(&self, classified: &ClassifiedError<'_>) -> Result<ErrorResponse, CatalogError> {
        let code = &classified.code;
        let status = self.status(code)?;

        let message_key = code.key(MessageType::Message);
        let message = match &classified.params {
            Some(params) => self.catalog.get_with_params(&message_key, params)?,
            None => self.catalog.get(&message_key)?,
        };

        Ok(ErrorResponse {
            status: status.as_u16(),
            message,
            error_code: self.catalog.get(&code.key(MessageType::Code))?,
            more_info: self.config.more_info().to_string(),
            stack_trace: capture_stack_trace(classified.raw, self.config.stack_trace_limit()),
        })
    }

    /// 카탈로그를 거치지 않는 400 응답
    ///
    /// 열거형이 아닌 대상의 본문 형식 오류에만 사용되며, 에러 자체의 메시지와
    /// 빈 공개 코드를 담습니다.
    pub fn raw_bad_request(&self, message: impl Into<String>) -> ErrorResponse {
        ErrorResponse {
            status: StatusCode::BAD_REQUEST.as_u16(),
            message: message.into(),
            error_code: String::new(),
            more_info: self.config.more_info().to_string(),
            stack_trace: None,
        }
    }

    /// 코드의 `STATUS` 항목을 HTTP 상태 코드로 해석합니다.
    pub fn status(&self, code: &ErrorCode) -> Result<StatusCode, CatalogError> {
        let key = code.key(MessageType::Status);
        let value = self.catalog.get(&key)?;

        value
            .trim()
            .parse::<u16>()
            .ok()
            .and_then(|status| StatusCode::from_u16(status).ok())
            .ok_or(CatalogError::InvalidStatus { key, value })
    }
}
