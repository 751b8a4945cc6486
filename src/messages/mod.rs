//! # Message Catalog Module
//!
//! 에러 코드와 메시지 타입(`STATUS`, `MESSAGE`, `CODE`)으로 구성된 키를
//! 지역화된 문자열로 변환하는 메시지 카탈로그 클라이언트를 정의합니다.
//! Spring의 `MessageSource`에 해당하며, 예외 처리 계층은 이 trait만 의존합니다.
//!
//! ## 키 규칙
//!
//! ```text
//! key = <ErrorCode> + <MessageType>
//!
//! ENTITY_NOT_FOUNDSTATUS  = 404
//! ENTITY_NOT_FOUNDMESSAGE = {1} with id {0} was not found
//! ENTITY_NOT_FOUNDCODE    = E-ENT-001
//! ```
//!
//! ## 모듈 구성
//!
//! - [`properties_catalog`] - `.properties` 파일 기반 구현체

pub mod properties_catalog;

pub use properties_catalog::PropertiesCatalog;

use thiserror::Error;

/// 메시지 카탈로그 조회 실패
///
/// 선언된 코드에 대한 카탈로그 항목이 없거나 상태 값이 잘못된 경우로,
/// 설정 결함이므로 숨기지 않고 호출자에게 전파됩니다.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("No message found under key '{0}'")]
    MissingKey(String),

    #[error("Invalid HTTP status '{value}' under key '{key}'")]
    InvalidStatus { key: String, value: String },

    #[error("Failed to load message catalog from {path}: {reason}")]
    Load { path: String, reason: String },
}

/// 메시지 카탈로그 클라이언트
///
/// 여러 요청에서 동시에 읽기 전용으로 사용되므로 `Send + Sync`여야 합니다.
pub trait MessageCatalog: Send + Sync {
    /// 파라미터 치환 없이 키에 해당하는 값을 조회합니다.
    fn get(&self, key: &str) -> Result<String, CatalogError>;

    /// 키에 해당하는 템플릿을 조회하고 `{n}` 자리에 `params[n]`을 치환합니다.
    fn get_with_params(&self, key: &str, params: &[String]) -> Result<String, CatalogError>;
}

/// 템플릿의 위치 기반 플레이스홀더(`{0}`, `{1}`, ...)를 파라미터로 치환합니다.
///
/// 대응하는 파라미터가 없거나 숫자가 아닌 중괄호 구문은 그대로 남깁니다.
///
/// # Examples
///
/// ```rust
/// use restapi_exception_service::messages::format_message;
///
/// let params = vec!["42".to_string(), "User".to_string()];
/// assert_eq!(format_message("{1} {0} not found", &params), "User 42 not found");
/// assert_eq!(format_message("missing {2}", &params), "missing {2}");
/// ```
pub fn format_message(template: &str, params: &[String]) -> String {
    let mut formatted = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        formatted.push_str(&rest[..open]);
        let after_open = &rest[open + 1..];

        let substituted = after_open.find('}').and_then(|close| {
            after_open[..close]
                .trim()
                .parse::<usize>()
                .ok()
                .and_then(|index| params.get(index))
                .map(|param| (param, close))
        });

        match substituted {
            Some((param, close)) => {
                formatted.push_str(param);
                rest = &after_open[close + 1..];
            }
            None => {
                formatted.push('{');
                rest = after_open;
            }
        }
    }

    formatted.push_str(rest);
    formatted
}
