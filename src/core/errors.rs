//! # Application Error Taxonomy
//!
//! 요청 처리 중 발생할 수 있는 모든 에러의 형태(shape)를 닫힌 열거형으로 정의합니다.
//! Spring의 `@ControllerAdvice`가 예외의 런타임 타입을 검사하여 핸들러를 고르는 것과 달리,
//! 이 모듈은 에러 형태를 명시적인 열거형 변형과 `#[source]` 원인 체인으로 표현하고
//! [`crate::exceptions`]의 분류기가 `match`로 규칙을 선택합니다.
//!
//! ## 에러 형태와 분류 규칙
//!
//! | AppError | 발생 지점 | 에러 코드 |
//! |----------|-----------|-----------|
//! | `Service` | 비즈니스 규칙 (`AppUserBr`) | 예외가 가진 코드 그대로 |
//! | `MissingParameter` | 쿼리 추출기 (필수 필드 누락) | `PARAMETER_NOT_INFORMED` |
//! | `MissingHeader` | `required_header` | `PARAMETER_NOT_INFORMED` |
//! | `ConstraintViolation` | `validate_params` | `PARAMETER_LIMIT_DIGIT` |
//! | `TypeMismatch` | 경로/쿼리 추출기 변환 실패 | 원인에 따라 결정 |
//! | `MessageNotReadable` | JSON 본문 추출기 | `PARAMETER_NOT_FOUND` 또는 raw 400 |
//! | `ArgumentNotValid` | `validate_body` | `PARAMETER_REQUIRED` |
//! | `IllegalArgument` | 잘못된 인자 (비 ASCII 헤더 등) | `PARAMETER_NOT_INFORMED` |
//! | `ObjectNotFound` / `ObjectRetrievalFailure` | 저장소 조회/삭제 | `ENTITY_NOT_FOUND` |
//! | `Timeout` / `TransactionTimedOut` / `PersistenceSystem` | 저장소 타임아웃/장애 | `TIMEOUT` |
//! | `MethodNotSupported` | 리소스 기본 라우트 | `UNSUPPORTED_METHOD` |
//! | `NumberFormat` | 숫자 파싱 실패 | `INTERNAL_ERROR` |
//! | `Internal` | 그 외 모든 에러 | `INTERNAL_ERROR` |
//!
//! ## 사용 패턴
//!
//! ```rust,ignore
//! use crate::core::errors::{AppError, AppResult, ServiceException};
//!
//! async fn get_user(&self, id: u64) -> AppResult<AppUser> {
//!     let user = self.repository.find_by_id(id).await?; // RepositoryError → AppError
//!     AppUserBr::validate_entity_exists(user, id) // ServiceException → AppError
//! }
//! ```

use std::error::Error as StdError;
use std::fmt;
use std::num::ParseIntError;

use actix_web::http::StatusCode;
use thiserror::Error;

/// 비즈니스 규칙 위반을 나타내는 도메인 에러
///
/// 자체적인 카탈로그 코드와 메시지 파라미터를 가지며, 항상 클라이언트에 노출되는
/// 예상된 에러입니다. 내부 스택 트레이스는 절대 응답에 포함되지 않습니다.
///
/// # Examples
///
/// ```rust,ignore
/// return Err(ServiceException::new("ENTITY_NOT_FOUND", [id.to_string(), "User".to_string()]).into());
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Service exception [{code}] {params:?}")]
pub struct ServiceException {
    code: String,
    params: Vec<String>,
}

impl ServiceException {
    pub fn new<I, S>(code: impl Into<String>, params: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            code: code.into(),
            params: params.into_iter().map(Into::into).collect(),
        }
    }

    /// 카탈로그 코드 (예: `ENTITY_NOT_FOUND`)
    pub fn code(&self) -> &str {
        &self.code
    }

    /// 메시지 템플릿에 위치 순서대로 치환될 파라미터
    pub fn params(&self) -> &[String] {
        &self.params
    }
}

/// 단일 제약 조건 위반 정보
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    pub field: String,
    pub message: String,
}

/// 타입 변환 실패의 근본 원인
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConversionError {
    /// 숫자 형식이 아닌 값을 숫자 타입으로 변환하려 한 경우
    #[error("For input string: {0}")]
    NumberFormat(String),

    /// 변환 대상에 존재하지 않는 값 (예: 알 수 없는 열거형 상수)
    #[error("{0}")]
    IllegalArgument(String),

    #[error("{0}")]
    Other(String),
}

impl ConversionError {
    /// 역직렬화 에러 메시지로부터 원인 종류를 추론합니다.
    ///
    /// serde/actix가 내보내는 메시지 형태를 기준으로 합니다.
    ///
    /// - `invalid digit found in string`, `can not parse "x" to a u64` → `NumberFormat`
    /// - `unknown variant ...` → `IllegalArgument`
    /// - 그 외 → `Other`
    pub fn from_message(message: &str) -> Self {
        if is_numeric_parse_message(message) {
            ConversionError::NumberFormat(message.to_string())
        } else if message.contains("unknown variant") {
            ConversionError::IllegalArgument(message.to_string())
        } else {
            ConversionError::Other(message.to_string())
        }
    }
}

const NUMERIC_TYPES: [&str; 14] = [
    "i8", "i16", "i32", "i64", "i128", "isize", "u8", "u16", "u32", "u64", "u128", "usize", "f32",
    "f64",
];

fn is_numeric_parse_message(message: &str) -> bool {
    if message.contains("invalid digit")
        || message.contains("number too large")
        || message.contains("number too small")
        || message.contains("invalid float literal")
    {
        return true;
    }

    message
        .rsplit_once("to a ")
        .map(|(_, target)| NUMERIC_TYPES.contains(&target.trim()))
        .unwrap_or(false)
}

/// 역직렬화 대상 타입
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TargetType {
    /// 열거형 대상과 그 유효한 상수 이름 목록 (선언 순서)
    Enum(Vec<String>),
    Other(String),
}

impl fmt::Display for TargetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TargetType::Enum(variants) => write!(f, "enum [{}]", variants.join(", ")),
            TargetType::Other(name) => f.write_str(name),
        }
    }
}

/// 요청 본문의 값이 대상 필드 타입으로 변환될 수 없는 경우
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Cannot deserialize value `{value}` into {target}")]
pub struct InvalidFormat {
    pub value: String,
    pub target: TargetType,
}

impl InvalidFormat {
    /// serde의 "unknown variant" 메시지에서 잘못된 값과 유효한 상수 목록을 추출합니다.
    ///
    /// ```text
    /// unknown variant `FOO`, expected one of `A`, `B`, `C` at line 1 column 14
    /// unknown variant `FOO`, expected `A` or `B`
    /// ```
    ///
    /// 열거형 관련 메시지가 아니면 `None`을 반환합니다.
    pub fn from_serde_message(message: &str) -> Option<Self> {
        let rest = message.split_once("unknown variant `")?.1;
        let (value, rest) = rest.split_once('`')?;
        let expected = rest.split_once("expected")?.1;

        let variants: Vec<String> = expected
            .split('`')
            .skip(1)
            .step_by(2)
            .map(str::to_string)
            .collect();

        Some(Self {
            value: value.to_string(),
            target: TargetType::Enum(variants),
        })
    }
}

/// 애플리케이션 전역 에러 타입
///
/// 요청 처리 어디에서든 발생한 에러는 이 열거형 중 하나로 표현되어
/// [`crate::exceptions::ExceptionController`]로 전달됩니다.
/// 각 변형은 하나의 에러 형태에 대응하며, 중첩 원인은 `#[source]` 필드로 보존되어
/// 진단 트레이스 렌더링에 사용됩니다.
#[derive(Error, Debug)]
pub enum AppError {
    /// 비즈니스 규칙 위반 (도메인 에러)
    #[error(transparent)]
    Service(#[from] ServiceException),

    /// 필수 쿼리 파라미터 누락
    #[error("Required request parameter '{name}' is not present")]
    MissingParameter { name: String },

    /// 필수 요청 헤더 누락
    #[error("Required request header '{name}' is not present")]
    MissingHeader { name: String },

    /// 파라미터 제약 조건 위반
    #[error("{message}")]
    ConstraintViolation {
        message: String,
        violations: Vec<Violation>,
    },

    /// 파라미터 타입 변환 실패
    #[error("Failed to convert value of parameter '{name}'")]
    TypeMismatch {
        name: String,
        #[source]
        cause: Option<ConversionError>,
    },

    /// 읽을 수 없는 요청 본문
    #[error("{message}")]
    MessageNotReadable {
        message: String,
        #[source]
        cause: Option<InvalidFormat>,
    },

    /// 요청 본문 필드 검증 실패
    #[error("Validation failed for fields: {}", fields.join(", "))]
    ArgumentNotValid { fields: Vec<String> },

    #[error("{0}")]
    IllegalArgument(String),

    /// 영속성 계층에서 식별자에 해당하는 엔티티를 찾지 못함
    #[error("No row with the given identifier exists: [{entity}#{id}]")]
    ObjectNotFound { entity: String, id: String },

    /// 영속성 계층의 엔티티 조회 실패
    #[error("Unable to find {entity} with id {id}")]
    ObjectRetrievalFailure { entity: String, id: String },

    #[error("{0}")]
    Timeout(String),

    #[error("Transaction timed out: {0}")]
    TransactionTimedOut(String),

    /// 영속성 시스템 장애
    #[error("{message}")]
    PersistenceSystem {
        message: String,
        #[source]
        source: Option<Box<dyn StdError + Send + Sync>>,
    },

    /// 지원하지 않는 HTTP 메서드
    #[error("Request method '{method}' is not supported")]
    MethodNotSupported {
        method: String,
        supported: Vec<String>,
    },

    /// 처리되지 않은 숫자 파싱 실패
    #[error("Number format error: {0}")]
    NumberFormat(#[from] ParseIntError),

    /// 예상하지 못한 시스템 오류
    #[error("{message}")]
    Internal {
        message: String,
        #[source]
        source: Option<Box<dyn StdError + Send + Sync>>,
    },
}

impl AppError {
    pub fn internal(message: impl Into<String>) -> Self {
        AppError::Internal {
            message: message.into(),
            source: None,
        }
    }

    /// 임의의 에러를 원인으로 보존하는 `Internal` 에러를 생성합니다.
    pub fn unexpected<E>(message: impl Into<String>, source: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        AppError::Internal {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    pub fn persistence<E>(message: impl Into<String>, source: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        AppError::PersistenceSystem {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// 진단 트레이스의 첫 줄에 사용되는 변형 이름
    pub fn kind(&self) -> &'static str {
        match self {
            AppError::Service(_) => "ServiceException",
            AppError::MissingParameter { .. } => "MissingParameter",
            AppError::MissingHeader { .. } => "MissingHeader",
            AppError::ConstraintViolation { .. } => "ConstraintViolation",
            AppError::TypeMismatch { .. } => "TypeMismatch",
            AppError::MessageNotReadable { .. } => "MessageNotReadable",
            AppError::ArgumentNotValid { .. } => "ArgumentNotValid",
            AppError::IllegalArgument(_) => "IllegalArgument",
            AppError::ObjectNotFound { .. } => "ObjectNotFound",
            AppError::ObjectRetrievalFailure { .. } => "ObjectRetrievalFailure",
            AppError::Timeout(_) => "Timeout",
            AppError::TransactionTimedOut(_) => "TransactionTimedOut",
            AppError::PersistenceSystem { .. } => "PersistenceSystem",
            AppError::MethodNotSupported { .. } => "MethodNotSupported",
            AppError::NumberFormat(_) => "NumberFormat",
            AppError::Internal { .. } => "Internal",
        }
    }

    pub fn is_service(&self) -> bool {
        matches!(self, AppError::Service(_))
    }
}

impl actix_web::ResponseError for AppError {
    /// 미들웨어가 응답을 교체하기 전의 대략적인 상태 코드
    ///
    /// 최종 상태 코드는 메시지 카탈로그의 `STATUS` 항목으로 결정됩니다.
    /// 여기서는 actix가 에러를 응답에 첨부하도록 4xx/5xx 값만 보장합니다.
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Service(_)
            | AppError::MissingParameter { .. }
            | AppError::MissingHeader { .. }
            | AppError::ConstraintViolation { .. }
            | AppError::TypeMismatch { .. }
            | AppError::MessageNotReadable { .. }
            | AppError::ArgumentNotValid { .. }
            | AppError::IllegalArgument(_) => StatusCode::BAD_REQUEST,
            AppError::ObjectNotFound { .. } | AppError::ObjectRetrievalFailure { .. } => {
                StatusCode::NOT_FOUND
            }
            AppError::MethodNotSupported { .. } => StatusCode::METHOD_NOT_ALLOWED,
            AppError::Timeout(_)
            | AppError::TransactionTimedOut(_)
            | AppError::PersistenceSystem { .. } => StatusCode::GATEWAY_TIMEOUT,
            AppError::NumberFormat(_) | AppError::Internal { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_response(&self) -> actix_web::HttpResponse {
        actix_web::HttpResponse::build(self.status_code()).json(serde_json::json!({
            "status": self.status_code().as_u16(),
            "message": self.to_string()
        }))
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;
