//! 진단 트레이스 렌더링과 길이 제한
//!
//! 에러 체인을 텍스트로 렌더링하고, 설정된 최대 길이를 넘으면 잘라낸 뒤
//! [`TRUNCATION_MARKER`]를 덧붙입니다. 도메인 에러(`ServiceException`)는
//! 내부 정보를 노출하지 않도록 트레이스를 생성하지 않습니다.
//!
//! ```text
//! TypeMismatch: Failed to convert value of parameter 'age'
//! Caused by: For input string: "abc"
//! ```

use std::error::Error as StdError;

use crate::core::errors::AppError;

/// 잘린 트레이스 끝에 붙는 표시
pub const TRUNCATION_MARKER: &str = "...";

/// 에러와 그 원인 체인 전체를 텍스트로 렌더링합니다.
pub fn render_trace(error: &AppError) -> String {
    let mut trace = format!("{}: {}", error.kind(), error);

    let mut source: Option<&dyn StdError> = error.source();
    while let Some(cause) = source {
        trace.push_str("\nCaused by: ");
        trace.push_str(&cause.to_string());
        source = cause.source();
    }

    trace
}

/// 트레이스를 최대 `limit` 문자로 제한합니다.
///
/// 길이는 바이트가 아닌 문자 단위로 계산합니다.
/// 길이가 `limit` 이하이면 그대로 반환하고, 초과하면 `limit` 문자까지 자른 뒤
/// 표시를 덧붙입니다.
pub fn truncate_trace(trace: &str, limit: usize) -> String {
    match trace.char_indices().nth(limit) {
        Some((cut, _)) => format!("{}{}", &trace[..cut], TRUNCATION_MARKER),
        None => trace.to_string(),
    }
}

/// 응답에 포함할 스택 트레이스를 캡처합니다.
///
/// 도메인 에러는 `None`, 그 외에는 (빈 문자열일 수 있는) 제한된 트레이스를 반환합니다.
pub fn capture_stack_trace(error: &AppError, limit: usize) -> Option<String> {
    if error.is_service() {
        return None;
    }

    Some(truncate_trace(&render_trace(error), limit))
}
