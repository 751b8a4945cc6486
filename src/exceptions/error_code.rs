//! 카탈로그 에러 코드와 메시지 타입

use std::borrow::Cow;
use std::fmt;

/// 메시지 카탈로그 항목의 종류
///
/// 카탈로그 키는 `<ErrorCode><MessageType>` 형태로 조합됩니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageType {
    /// HTTP 상태 코드 (정수 문자열)
    Status,
    /// 위치 기반 플레이스홀더를 가진 메시지 템플릿
    Message,
    /// 클라이언트에 노출되는 공개 에러 코드
    Code,
}

impl MessageType {
    pub fn as_str(&self) -> &'static str {
        match self {
            MessageType::Status => "STATUS",
            MessageType::Message => "MESSAGE",
            MessageType::Code => "CODE",
        }
    }
}

/// 불변 에러 코드 식별자
///
/// 분류기가 사용하는 코드는 상수로 선언되어 있으며, 도메인 에러는
/// 자신이 가진 임의의 코드를 [`ErrorCode::new`]로 감싸서 사용합니다.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ErrorCode(Cow<'static, str>);

impl ErrorCode {
    pub const ENTITY_NOT_FOUND: ErrorCode = ErrorCode(Cow::Borrowed("ENTITY_NOT_FOUND"));
    pub const ENTITY_ALREADY_EXISTS: ErrorCode = ErrorCode(Cow::Borrowed("ENTITY_ALREADY_EXISTS"));
    pub const PARAMETER_NOT_INFORMED: ErrorCode =
        ErrorCode(Cow::Borrowed("PARAMETER_NOT_INFORMED"));
    pub const PARAMETER_LIMIT_DIGIT: ErrorCode = ErrorCode(Cow::Borrowed("PARAMETER_LIMIT_DIGIT"));
    pub const PARAMETER_NOT_NUMERIC: ErrorCode = ErrorCode(Cow::Borrowed("PARAMETER_NOT_NUMERIC"));
    pub const PARAMETER_CONVERTED_NOT_EXISTS: ErrorCode =
        ErrorCode(Cow::Borrowed("PARAMETER_CONVERTED_NOT_EXISTS"));
    pub const PARAMETER_NOT_FOUND: ErrorCode = ErrorCode(Cow::Borrowed("PARAMETER_NOT_FOUND"));
    pub const PARAMETER_REQUIRED: ErrorCode = ErrorCode(Cow::Borrowed("PARAMETER_REQUIRED"));
    pub const TIMEOUT: ErrorCode = ErrorCode(Cow::Borrowed("TIMEOUT"));
    pub const UNSUPPORTED_METHOD: ErrorCode = ErrorCode(Cow::Borrowed("UNSUPPORTED_METHOD"));
    pub const INTERNAL_ERROR: ErrorCode = ErrorCode(Cow::Borrowed("INTERNAL_ERROR"));

    /// 카탈로그에 반드시 항목이 존재해야 하는 선언된 코드 목록
    pub const DECLARED: [ErrorCode; 11] = [
        Self::ENTITY_NOT_FOUND,
        Self::ENTITY_ALREADY_EXISTS,
        Self::PARAMETER_NOT_INFORMED,
        Self::PARAMETER_LIMIT_DIGIT,
        Self::PARAMETER_NOT_NUMERIC,
        Self::PARAMETER_CONVERTED_NOT_EXISTS,
        Self::PARAMETER_NOT_FOUND,
        Self::PARAMETER_REQUIRED,
        Self::TIMEOUT,
        Self::UNSUPPORTED_METHOD,
        Self::INTERNAL_ERROR,
    ];

    pub fn new(code: impl Into<String>) -> Self {
        ErrorCode(Cow::Owned(code.into()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// 메시지 카탈로그 조회 키 (`code + type`)
    pub fn key(&self, message_type: MessageType) -> String {
        format!("{}{}", self.0, message_type.as_str())
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
