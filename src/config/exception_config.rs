//! 예외 응답 설정 관리 모듈
//!
//! 에러 응답에 포함될 스택 트레이스의 최대 길이와 `moreInfo` 참조 문자열,
//! 메시지 카탈로그 파일 위치를 관리합니다.
//! Spring의 `@Value("${response.stacktrace.size}")` 주입과 동일한 역할이지만,
//! 전역 상태 대신 시작 시점에 한 번 생성된 구조체를 명시적으로 전달합니다.

use std::env;
use std::path::PathBuf;

use log::error;

/// 스택 트레이스 최대 길이 기본값 (문자 수)
pub const DEFAULT_STACK_TRACE_LIMIT: usize = 1000;

/// `moreInfo` 필드 기본값
pub const DEFAULT_MORE_INFO: &str = "/api/v1/docs/errors";

/// 에러 응답 생성 설정
///
/// 프로세스 시작 시 한 번 로드되며 이후 변경되지 않습니다.
/// [`crate::exceptions::ResponseBuilder`]가 생성 시점에 소유합니다.
///
/// # Environment Variables
///
/// - `RESPONSE_STACKTRACE_SIZE`: 응답에 포함할 스택 트레이스 최대 문자 수 (기본값: 1000)
/// - `RESPONSE_MORE_INFO`: 모든 에러 응답의 `moreInfo` 값 (기본값: `/api/v1/docs/errors`)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExceptionConfig {
    stack_trace_limit: usize,
    more_info: String,
}

impl ExceptionConfig {
    pub fn new(stack_trace_limit: usize, more_info: impl Into<String>) -> Self {
        Self {
            stack_trace_limit,
            more_info: more_info.into(),
        }
    }

    /// 프로세스 환경 변수에서 설정을 로드합니다.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// 주어진 조회 함수로 설정을 로드합니다.
    ///
    /// 숫자 형식이 잘못된 값은 에러 로그를 남기고 기본값을 사용합니다.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// let config = ExceptionConfig::from_lookup(|key| match key {
    ///     "RESPONSE_STACKTRACE_SIZE" => Some("200".to_string()),
    ///     _ => None,
    /// });
    /// assert_eq!(config.stack_trace_limit(), 200);
    /// ```
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let stack_trace_limit = match lookup("RESPONSE_STACKTRACE_SIZE") {
            Some(value) => value.trim().parse::<usize>().unwrap_or_else(|e| {
                error!(
                    "RESPONSE_STACKTRACE_SIZE 파싱 실패: {}. 기본값 {} 사용",
                    e, DEFAULT_STACK_TRACE_LIMIT
                );
                DEFAULT_STACK_TRACE_LIMIT
            }),
            None => DEFAULT_STACK_TRACE_LIMIT,
        };

        let more_info = lookup("RESPONSE_MORE_INFO")
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_MORE_INFO.to_string());

        Self::new(stack_trace_limit, more_info)
    }

    /// 응답에 포함할 스택 트레이스의 최대 문자 수
    pub fn stack_trace_limit(&self) -> usize {
        self.stack_trace_limit
    }

    pub fn more_info(&self) -> &str {
        &self.more_info
    }
}

impl Default for ExceptionConfig {
    fn default() -> Self {
        Self::new(DEFAULT_STACK_TRACE_LIMIT, DEFAULT_MORE_INFO)
    }
}

/// 메시지 카탈로그 파일 설정
pub struct MessagesConfig;

impl MessagesConfig {
    /// 번들된 카탈로그 대신 사용할 properties 파일 경로
    ///
    /// # Environment Variables
    ///
    /// - `MESSAGES_PATH`: 설정되지 않으면 `None` (번들 카탈로그 사용)
    pub fn path() -> Option<PathBuf> {
        Self::path_from(|key| env::var(key).ok())
    }

    pub fn path_from<F>(lookup: F) -> Option<PathBuf>
    where
        F: Fn(&str) -> Option<String>,
    {
        lookup("MESSAGES_PATH")
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
            .map(PathBuf::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_exception_config_defaults() {
        let config = ExceptionConfig::from_lookup(|_| None);

        assert_eq!(config.stack_trace_limit(), DEFAULT_STACK_TRACE_LIMIT);
        assert_eq!(config.more_info(), DEFAULT_MORE_INFO);
        assert_eq!(config, ExceptionConfig::default());
    }

    #[test]
    fn test_exception_config_reads_values() {
        let config = ExceptionConfig::from_lookup(lookup_from(&[
            ("RESPONSE_STACKTRACE_SIZE", " 250 "),
            ("RESPONSE_MORE_INFO", "https://docs.example.com/errors"),
        ]));

        assert_eq!(config.stack_trace_limit(), 250);
        assert_eq!(config.more_info(), "https://docs.example.com/errors");
    }

    #[test]
    fn test_exception_config_falls_back_on_malformed_limit() {
        let config =
            ExceptionConfig::from_lookup(lookup_from(&[("RESPONSE_STACKTRACE_SIZE", "lots")]));

        assert_eq!(config.stack_trace_limit(), DEFAULT_STACK_TRACE_LIMIT);
    }

    #[test]
    fn test_messages_path() {
        assert_eq!(MessagesConfig::path_from(|_| None), None);
        assert_eq!(
            MessagesConfig::path_from(lookup_from(&[("MESSAGES_PATH", "  ")])),
            None
        );
        assert_eq!(
            MessagesConfig::path_from(lookup_from(&[("MESSAGES_PATH", "conf/messages.properties")])),
            Some(PathBuf::from("conf/messages.properties"))
        );
    }
}
