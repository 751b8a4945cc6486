//! 프레임워크 에러 어댑터
//!
//! actix 추출기와 `validator`가 만드는 에러를 [`AppError`](crate::core::errors::AppError)
//! 형태로 변환하여 예외 처리 계층이 하나의 에러 타입만 다루도록 합니다.

pub mod payload;
pub mod validation;

pub use payload::{
    from_framework_error, json_config, json_error_handler, path_config, path_error_handler,
    query_config, query_error_handler, typed_query_config,
};
pub use validation::{ValidateExt, body_validation_error, param_validation_error};
