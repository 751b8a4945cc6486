//! actix 추출기 에러 → AppError 변환
//!
//! `web::Json`, `web::Query`, `web::Path` 추출에 실패하면 actix는 각각
//! `JsonPayloadError`, `QueryPayloadError`, `PathError`를 만듭니다.
//! 이 모듈의 에러 핸들러는 이를 분류 가능한 [`AppError`] 형태로 바꿉니다.
//!
//! | 추출기 | 실패 | AppError |
//! |--------|------|----------|
//! | Json | 열거형 상수 불일치 | `MessageNotReadable` + `InvalidFormat(Enum)` |
//! | Json | 그 외 파싱/형식 오류 | `MessageNotReadable` (원인 없음) |
//! | Query | 필수 필드 누락 | `MissingParameter` |
//! | Query, Path | 값 변환 실패 | `TypeMismatch` + `ConversionError` |
//!
//! serde의 쿼리 에러 메시지에는 필드 이름이 없습니다. 추출 대상 타입을 아는
//! [`typed_query_config`]를 리소스에 등록하면 실패한 파라미터를 정확히 찾고,
//! 앱 전역의 [`query_config`]는 값 기반 추정으로 대신합니다.

use actix_web::error::{JsonPayloadError, PathError, QueryPayloadError};
use actix_web::{HttpRequest, web};
use serde::de::DeserializeOwned;

use crate::core::errors::{AppError, ConversionError, InvalidFormat};

/// `web::JsonConfig::error_handler`에 등록하는 핸들러
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    log::debug!("요청 본문 추출 실패: {}", err);
    body_error(&err).into()
}

/// `web::QueryConfig::error_handler`에 등록하는 핸들러
pub fn query_error_handler(err: QueryPayloadError, req: &HttpRequest) -> actix_web::Error {
    log::debug!("쿼리 파라미터 추출 실패: {}", err);
    query_error(&err, req.query_string()).into()
}

/// `web::PathConfig::error_handler`에 등록하는 핸들러
pub fn path_error_handler(err: PathError, req: &HttpRequest) -> actix_web::Error {
    log::debug!("경로 변수 추출 실패: {}", err);
    let segments: Vec<(String, String)> = req
        .match_info()
        .iter()
        .map(|(name, value)| (name.to_string(), value.to_string()))
        .collect();
    path_error(&err, &segments).into()
}

/// 에러 핸들러가 등록된 추출기 설정
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(json_error_handler)
}

pub fn query_config() -> web::QueryConfig {
    web::QueryConfig::default().error_handler(query_error_handler)
}

/// 추출 대상 타입 `T`를 아는 쿼리 설정
///
/// 리소스 단위 `app_data`로 등록하면 앱 전역 [`query_config`]보다 우선합니다.
pub fn typed_query_config<T>() -> web::QueryConfig
where
    T: DeserializeOwned + 'static,
{
    web::QueryConfig::default().error_handler(|err, req| {
        log::debug!("쿼리 파라미터 추출 실패: {}", err);
        typed_query_error::<T>(&err, req.query_string()).into()
    })
}

pub fn path_config() -> web::PathConfig {
    web::PathConfig::default().error_handler(path_error_handler)
}

/// 요청 본문 추출 실패를 `MessageNotReadable`로 변환합니다.
pub fn body_error(err: &JsonPayloadError) -> AppError {
    match err {
        JsonPayloadError::Deserialize(source) => {
            let message = format!("JSON parse error: {}", source);
            AppError::MessageNotReadable {
                cause: InvalidFormat::from_serde_message(&message),
                message,
            }
        }
        other => AppError::MessageNotReadable {
            message: other.to_string(),
            cause: None,
        },
    }
}

/// 쿼리 파라미터 추출 실패를 변환합니다.
///
/// 누락된 필드는 `MissingParameter`, 그 외 변환 실패는 `TypeMismatch`가 됩니다.
/// serde 메시지에 파라미터 이름이 없으므로 원본 쿼리 문자열에서 문제의 파라미터를 찾습니다.
pub fn query_error(err: &QueryPayloadError, query: &str) -> AppError {
    let message = query_message(err);

    if let Some(name) = backticked_after(&message, "missing field `") {
        return AppError::MissingParameter { name };
    }

    AppError::TypeMismatch {
        name: offending_query_parameter(query, &message),
        cause: Some(ConversionError::from_message(&message)),
    }
}

/// 추출 대상 타입 `T`로 실패한 파라미터를 찾아 쿼리 추출 실패를 변환합니다.
///
/// 쿼리 쌍을 하나씩 빼고 다시 역직렬화하여, 같은 변환 에러가 사라지게 만드는
/// 첫 번째 쌍을 실패한 파라미터로 봅니다. 찾지 못하면 [`query_error`]의 추정을 씁니다.
pub fn typed_query_error<T: DeserializeOwned>(err: &QueryPayloadError, query: &str) -> AppError {
    match query_error(err, query) {
        AppError::TypeMismatch { name, cause } => AppError::TypeMismatch {
            name: failing_query_pair::<T>(query, &query_message(err)).unwrap_or(name),
            cause,
        },
        other => other,
    }
}

/// 경로 변수 추출 실패를 `TypeMismatch`로 변환합니다.
///
/// `segments`는 라우트에 매칭된 `(이름, 값)` 목록입니다.
pub fn path_error(err: &PathError, segments: &[(String, String)]) -> AppError {
    let message = match err {
        PathError::Deserialize(source) => source.to_string(),
        other => other.to_string(),
    };

    let name = segments
        .iter()
        .find(|(_, value)| message.contains(&format!("\"{}\"", value)))
        .or_else(|| segments.first())
        .map(|(name, _)| name.clone())
        .unwrap_or_else(|| "path".to_string());

    AppError::TypeMismatch {
        name,
        cause: Some(ConversionError::from_message(&message)),
    }
}

/// 에러 핸들러를 거치지 않은 프레임워크 에러를 변환합니다.
///
/// 알려진 추출기 에러가 아니면 `Internal`로 취급합니다.
pub fn from_framework_error(error: &actix_web::Error) -> AppError {
    if let Some(err) = error.as_error::<JsonPayloadError>() {
        return body_error(err);
    }
    if let Some(err) = error.as_error::<QueryPayloadError>() {
        return query_error(err, "");
    }
    if let Some(err) = error.as_error::<PathError>() {
        return path_error(err, &[]);
    }

    AppError::internal(error.to_string())
}

fn query_message(err: &QueryPayloadError) -> String {
    match err {
        QueryPayloadError::Deserialize(source) => source.to_string(),
        other => other.to_string(),
    }
}

fn failing_query_pair<T: DeserializeOwned>(query: &str, message: &str) -> Option<String> {
    let segments: Vec<&str> = query.split('&').filter(|s| !s.is_empty()).collect();

    (0..segments.len()).find_map(|skip| {
        let rest = segments
            .iter()
            .enumerate()
            .filter(|(index, _)| *index != skip)
            .map(|(_, segment)| *segment)
            .collect::<Vec<_>>()
            .join("&");

        let still_failing = match web::Query::<T>::from_query(&rest) {
            Ok(_) => false,
            Err(err) => query_message(&err) == message,
        };
        if still_failing {
            return None;
        }

        web::Query::<Vec<(String, String)>>::from_query(segments[skip])
            .ok()
            .and_then(|pairs| pairs.into_inner().into_iter().next())
            .map(|(name, _)| name)
    })
}

fn backticked_after(message: &str, prefix: &str) -> Option<String> {
    let rest = message.split_once(prefix)?.1;
    rest.split_once('`').map(|(name, _)| name.to_string())
}

fn offending_query_parameter(query: &str, message: &str) -> String {
    let pairs = web::Query::<Vec<(String, String)>>::from_query(query)
        .map(web::Query::into_inner)
        .unwrap_or_default();

    let by_value = InvalidFormat::from_serde_message(message)
        .and_then(|format| pairs.iter().find(|(_, value)| *value == format.value))
        .or_else(|| match ConversionError::from_message(message) {
            ConversionError::NumberFormat(_) => {
                let mut non_numeric = pairs
                    .iter()
                    .filter(|(_, value)| value.trim().parse::<f64>().is_err());
                match (non_numeric.next(), non_numeric.next()) {
                    (Some(pair), None) => Some(pair),
                    _ => None,
                }
            }
            _ => None,
        });

    match (by_value, pairs.as_slice()) {
        (Some((name, _)), _) => name.clone(),
        (None, [(name, _)]) => name.clone(),
        (None, _) => pairs
            .iter()
            .map(|(name, _)| name.as_str())
            .collect::<Vec<_>>()
            .join(", "),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::errors::TargetType;
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    #[serde(rename_all = "SCREAMING_SNAKE_CASE")]
    enum Level {
        Low,
        High,
    }

    #[derive(Debug, Deserialize)]
    #[allow(dead_code)]
    struct Body {
        level: Level,
        count: u32,
    }

    #[derive(Debug, Deserialize)]
    #[allow(dead_code)]
    struct Search {
        name: String,
        level: Option<Level>,
    }

    #[derive(Debug, Deserialize)]
    #[allow(dead_code)]
    struct Profile {
        name: String,
        age: u32,
    }

    fn profile_failure(query: &str) -> QueryPayloadError {
        match web::Query::<Profile>::from_query(query) {
            Err(err) => err,
            Ok(profile) => panic!("query should not deserialize: {:?}", profile.into_inner()),
        }
    }

    fn json_failure(body: &str) -> JsonPayloadError {
        let source = serde_json::from_str::<Body>(body).unwrap_err();
        JsonPayloadError::Deserialize(source)
    }

    fn query_failure(query: &str) -> QueryPayloadError {
        match web::Query::<Search>::from_query(query) {
            Err(err) => err,
            Ok(search) => panic!("query should not deserialize: {:?}", search.into_inner()),
        }
    }

    #[test]
    fn test_body_with_unknown_enum_constant() {
        let error = body_error(&json_failure(r#"{"level":"MEDIUM","count":1}"#));

        match error {
            AppError::MessageNotReadable {
                cause: Some(format),
                ..
            } => {
                assert_eq!(format.value, "MEDIUM");
                assert_eq!(
                    format.target,
                    TargetType::Enum(vec!["LOW".to_string(), "HIGH".to_string()])
                );
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_malformed_body_has_no_cause() {
        let error = body_error(&json_failure(r#"{"level":"LOW","count":"#));

        assert!(matches!(
            error,
            AppError::MessageNotReadable { cause: None, ref message } if message.starts_with("JSON parse error")
        ));
    }

    #[test]
    fn test_scalar_type_error_has_no_cause() {
        let error = body_error(&json_failure(r#"{"level":"LOW","count":"many"}"#));

        assert!(matches!(
            error,
            AppError::MessageNotReadable { cause: None, .. }
        ));
    }

    #[test]
    fn test_missing_query_field() {
        let error = query_error(&query_failure("level=LOW"), "level=LOW");

        assert!(matches!(
            error,
            AppError::MissingParameter { ref name } if name == "name"
        ));
    }

    #[test]
    fn test_unknown_query_enum_constant() {
        let query = "name=ann&level=MEDIUM";
        let error = query_error(&query_failure(query), query);

        match error {
            AppError::TypeMismatch {
                name,
                cause: Some(ConversionError::IllegalArgument(message)),
            } => {
                assert_eq!(name, "level");
                assert!(message.contains("MEDIUM"));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_typed_query_names_numeric_parameter() {
        for query in ["name=ann&age=abc", "age=abc&name=ann"] {
            let error = typed_query_error::<Profile>(&profile_failure(query), query);

            assert!(
                matches!(
                    error,
                    AppError::TypeMismatch { ref name, cause: Some(ConversionError::NumberFormat(_)) } if name == "age"
                ),
                "unexpected error for {}: {:?}",
                query,
                error
            );
        }
    }

    #[test]
    fn test_typed_query_keeps_missing_parameter() {
        let error = typed_query_error::<Profile>(&profile_failure("name=ann"), "name=ann");

        assert!(matches!(
            error,
            AppError::MissingParameter { ref name } if name == "age"
        ));
    }

    #[test]
    fn test_untyped_query_picks_only_non_numeric_value() {
        let query = "age=abc&page=2";
        let error = query_error(&profile_failure(query), query);

        assert!(matches!(
            error,
            AppError::TypeMismatch { ref name, .. } if name == "age"
        ));
    }

    #[test]
    fn test_path_numeric_conversion_failure() {
        let source: serde::de::value::Error =
            serde::de::Error::custom("can not parse \"abc\" to a u64");
        let segments = vec![("id".to_string(), "abc".to_string())];

        let error = path_error(&PathError::Deserialize(source), &segments);

        assert!(matches!(
            error,
            AppError::TypeMismatch { ref name, cause: Some(ConversionError::NumberFormat(_)) } if name == "id"
        ));
    }

    #[test]
    fn test_unknown_framework_error_is_internal() {
        let error = actix_web::error::ErrorBadGateway("upstream closed");

        assert!(matches!(
            from_framework_error(&error),
            AppError::Internal { ref message, .. } if message == "upstream closed"
        ));
    }

    #[test]
    fn test_framework_json_error_is_recognized() {
        let error: actix_web::Error = json_failure(r#"{"level":"MEDIUM","count":1}"#).into();

        assert!(matches!(
            from_framework_error(&error),
            AppError::MessageNotReadable { cause: Some(_), .. }
        ));
    }
}
