//! `validator` 검증 실패 → AppError 변환
//!
//! 같은 `ValidationErrors`라도 어디서 검증했는지에 따라 다른 에러 형태가 됩니다.
//!
//! - 요청 본문 → `ArgumentNotValid` (실패한 필드 이름 목록)
//! - 쿼리/경로 파라미터 → `ConstraintViolation` (위반 메시지 목록)

use validator::{Validate, ValidationErrors};

use crate::core::errors::{AppError, Violation};

/// 요청 본문 검증 실패를 변환합니다. 필드 이름은 정렬됩니다.
pub fn body_validation_error(errors: &ValidationErrors) -> AppError {
    let mut fields: Vec<String> = errors.errors().keys().map(|field| field.to_string()).collect();
    fields.sort();

    AppError::ArgumentNotValid { fields }
}

/// 파라미터 제약 조건 위반을 변환합니다.
///
/// 위반 메시지는 검증 규칙의 `message`를 사용하며, 없으면 `필드: 규칙 코드` 형식이 됩니다.
pub fn param_validation_error(errors: &ValidationErrors) -> AppError {
    let mut violations: Vec<Violation> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, field_errors)| {
            let field = field.to_string();
            field_errors.iter().map(move |error| Violation {
                field: field.clone(),
                message: error
                    .message
                    .as_ref()
                    .map(|message| message.to_string())
                    .unwrap_or_else(|| format!("{}: {}", field, error.code)),
            })
        })
        .collect();
    violations.sort_by(|a, b| a.field.cmp(&b.field));

    let message = violations
        .iter()
        .map(|violation| format!("{}: {}", violation.field, violation.message))
        .collect::<Vec<_>>()
        .join(", ");

    AppError::ConstraintViolation {
        message,
        violations,
    }
}

/// 검증 결과를 AppError로 바로 변환하는 확장 trait
///
/// # Examples
///
/// ```rust,ignore
/// payload.validate_body()?;   // 본문
/// query.validate_params()?;   // 쿼리 파라미터
/// ```
pub trait ValidateExt: Validate {
    fn validate_body(&self) -> Result<(), AppError> {
        self.validate().map_err(|e| body_validation_error(&e))
    }

    fn validate_params(&self) -> Result<(), AppError> {
        self.validate().map_err(|e| param_validation_error(&e))
    }
}

impl<T: Validate> ValidateExt for T {}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Validate)]
    struct Signup {
        #[validate(length(min = 1, max = 10))]
        name: String,
        #[validate(email)]
        email: String,
    }

    #[derive(Debug, Validate)]
    struct Paging {
        #[validate(range(min = 1, max = 100, message = "limit must be between 1 and 100"))]
        limit: u32,
    }

    #[test]
    fn test_body_errors_list_sorted_fields() {
        let signup = Signup {
            name: String::new(),
            email: "not-an-email".to_string(),
        };

        let error = signup.validate_body().unwrap_err();

        assert!(matches!(
            error,
            AppError::ArgumentNotValid { ref fields } if fields == &["email", "name"]
        ));
    }

    #[test]
    fn test_valid_body_passes() {
        let signup = Signup {
            name: "ann".to_string(),
            email: "ann@example.com".to_string(),
        };

        assert!(signup.validate_body().is_ok());
    }

    #[test]
    fn test_param_errors_use_rule_message() {
        let paging = Paging { limit: 500 };

        match paging.validate_params().unwrap_err() {
            AppError::ConstraintViolation {
                message,
                violations,
            } => {
                assert_eq!(violations.len(), 1);
                assert_eq!(violations[0].field, "limit");
                assert_eq!(violations[0].message, "limit must be between 1 and 100");
                assert_eq!(message, "limit: limit must be between 1 and 100");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_param_errors_without_message_use_code() {
        let signup = Signup {
            name: "a very long name".to_string(),
            email: "ann@example.com".to_string(),
        };

        match signup.validate_params().unwrap_err() {
            AppError::ConstraintViolation { violations, .. } => {
                assert_eq!(violations[0].message, "name: length");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }
}
