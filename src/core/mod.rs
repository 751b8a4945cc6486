//! # Core Module
//!
//! 서비스 전역에서 공유하는 핵심 타입을 제공합니다.
//!
//! ### [`errors`] - 요청 처리 에러 분류 체계
//! - **AppError**: 요청 처리 중 발생 가능한 모든 에러 형태의 닫힌 열거형
//! - **ServiceException**: 비즈니스 규칙이 발생시키는 도메인 에러 (코드 + 파라미터)
//! - **중첩 원인**: `ConversionError`, `InvalidFormat` 등 `#[source]` 체인
//!
//! ## Spring Framework와의 비교
//!
//! | Spring | 이 서비스 |
//! |--------|-----------|
//! | 예외 클래스 계층 | `AppError` 열거형 변형 |
//! | `getCause()` + `instanceof` | `#[source]` 필드 + `match` |
//! | `@ControllerAdvice` | [`crate::exceptions::ExceptionController`] |
//! | `ServiceException.get(code, params...)` | `ServiceException::new(code, params)` |

pub mod errors;

pub use errors::*;
