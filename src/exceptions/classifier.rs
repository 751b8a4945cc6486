//! 에러 분류기
//!
//! 발생한 [`AppError`]의 형태를 보고 적용할 처리 규칙을 선택하여
//! 카탈로그 코드, 심각도, 메시지 파라미터를 결정합니다.
//! 규칙은 아래 우선순위로 평가되며 첫 번째로 일치한 규칙만 적용됩니다.
//!
//! 1. 도메인 에러 → 에러가 가진 코드/파라미터 그대로, `Warn`
//! 2. 파라미터 누락/검증/변환 실패 → `PARAMETER_*`, `Warn`
//! 3. 엔티티 없음 → `ENTITY_NOT_FOUND` + `[id, 엔티티]`, `Warn`
//! 4. 타임아웃/영속성 시스템 장애 → `TIMEOUT`, `Error`
//! 5. 지원하지 않는 메서드 → `UNSUPPORTED_METHOD`, `Warn`
//! 6. 처리되지 않은 숫자 파싱 실패 → `INTERNAL_ERROR`, `Error`
//! 7. 그 외 → `INTERNAL_ERROR`, `Error`

use crate::core::errors::{AppError, ConversionError, TargetType};

use super::error_code::ErrorCode;
use super::severity::Severity;

/// 분류 결과
///
/// 요청 하나의 생명주기 동안만 존재하며, 원본 에러는 트레이스 추출을 위해서만 참조합니다.
#[derive(Debug)]
pub struct ClassifiedError<'a> {
    pub code: ErrorCode,
    pub severity: Severity,
    /// `None`이면 파라미터 없는 메시지 템플릿을 조회합니다.
    pub params: Option<Vec<String>>,
    pub raw: &'a AppError,
}

/// 분류기가 선택한 응답 생성 경로
#[derive(Debug)]
pub enum Classification<'a> {
    /// 메시지 카탈로그 기반의 일반 응답
    Catalog(ClassifiedError<'a>),
    /// 열거형이 아닌 본문 형식 오류: 카탈로그를 거치지 않는 raw 400 응답
    Unreadable { message: String, raw: &'a AppError },
}

/// 에러 형태 → 처리 규칙 디스패치 테이블
#[derive(Debug, Clone, Copy, Default)]
pub struct ErrorClassifier;

impl ErrorClassifier {
    pub fn new() -> Self {
        Self
    }

    /// 에러를 분류합니다. 같은 에러에 대해 항상 같은 결과를 반환합니다.
    pub fn classify<'a>(&self, error: &'a AppError) -> Classification<'a> {
        let warn = move |code: ErrorCode, params: Option<Vec<String>>| {
            Classification::Catalog(ClassifiedError {
                code,
                severity: Severity::Warn,
                params,
                raw: error,
            })
        };
        let fail = move |code: ErrorCode| {
            Classification::Catalog(ClassifiedError {
                code,
                severity: Severity::Error,
                params: None,
                raw: error,
            })
        };

        match error {
            AppError::Service(exception) => warn(
                ErrorCode::new(exception.code()),
                Some(exception.params().to_vec()),
            ),

            AppError::MissingParameter { name } | AppError::MissingHeader { name } => {
                warn(ErrorCode::PARAMETER_NOT_INFORMED, Some(vec![name.clone()]))
            }

            AppError::ConstraintViolation {
                message,
                violations,
            } => {
                let detail = violations
                    .first()
                    .map(|violation| violation.message.clone())
                    .unwrap_or_else(|| message.clone());
                warn(ErrorCode::PARAMETER_LIMIT_DIGIT, Some(vec![detail]))
            }

            AppError::TypeMismatch { name, cause } => match cause {
                Some(ConversionError::NumberFormat(_)) => {
                    warn(ErrorCode::PARAMETER_NOT_NUMERIC, Some(vec![name.clone()]))
                }
                Some(illegal @ ConversionError::IllegalArgument(_)) => warn(
                    ErrorCode::PARAMETER_CONVERTED_NOT_EXISTS,
                    Some(vec![illegal.to_string()]),
                ),
                _ => warn(ErrorCode::PARAMETER_NOT_INFORMED, Some(vec![name.clone()])),
            },

            AppError::MessageNotReadable { message, cause } => match cause {
                Some(format) => match &format.target {
                    TargetType::Enum(variants) => warn(
                        ErrorCode::PARAMETER_NOT_FOUND,
                        Some(vec![format.value.clone(), variants.join(", ")]),
                    ),
                    TargetType::Other(_) => Classification::Unreadable {
                        message: message.clone(),
                        raw: error,
                    },
                },
                None => Classification::Unreadable {
                    message: message.clone(),
                    raw: error,
                },
            },

            AppError::ArgumentNotValid { fields } => {
                warn(ErrorCode::PARAMETER_REQUIRED, Some(vec![fields.join(", ")]))
            }

            AppError::IllegalArgument(message) => {
                warn(ErrorCode::PARAMETER_NOT_INFORMED, Some(vec![message.clone()]))
            }

            AppError::ObjectNotFound { entity, id }
            | AppError::ObjectRetrievalFailure { entity, id } => warn(
                ErrorCode::ENTITY_NOT_FOUND,
                Some(vec![id.clone(), entity.clone()]),
            ),

            AppError::Timeout(_)
            | AppError::TransactionTimedOut(_)
            | AppError::PersistenceSystem { .. } => fail(ErrorCode::TIMEOUT),

            AppError::MethodNotSupported { .. } => warn(ErrorCode::UNSUPPORTED_METHOD, None),

            AppError::NumberFormat(_) => fail(ErrorCode::INTERNAL_ERROR),

            AppError::Internal { .. } => fail(ErrorCode::INTERNAL_ERROR),
        }
    }
}
