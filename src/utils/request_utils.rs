use actix_web::HttpRequest;

use crate::core::errors::{AppError, AppResult};

/// 필수 요청 헤더 값을 앞뒤 공백을 제거하여 반환합니다.
///
/// # Errors
///
/// * `AppError::MissingHeader` - 헤더가 없거나 공백뿐인 경우
/// * `AppError::IllegalArgument` - 헤더 값이 ASCII 문자열이 아닌 경우
pub fn required_header(req: &HttpRequest, name: &str) -> AppResult<String> {
    let Some(value) = req.headers().get(name) else {
        return Err(AppError::MissingHeader {
            name: name.to_string(),
        });
    };

    let value = value
        .to_str()
        .map_err(|_| AppError::IllegalArgument(format!("Header {} must be visible ASCII", name)))?
        .trim();

    if value.is_empty() {
        return Err(AppError::MissingHeader {
            name: name.to_string(),
        });
    }

    Ok(value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::TestRequest;

    #[test]
    fn test_present_header_is_trimmed() {
        let req = TestRequest::default()
            .insert_header(("X-Requested-By", "  admin "))
            .to_http_request();

        assert_eq!(required_header(&req, "X-Requested-By").unwrap(), "admin");
    }

    #[test]
    fn test_missing_or_blank_header() {
        let missing = TestRequest::default().to_http_request();
        let blank = TestRequest::default()
            .insert_header(("X-Requested-By", "   "))
            .to_http_request();

        for req in [&missing, &blank] {
            assert!(matches!(
                required_header(req, "X-Requested-By"),
                Err(AppError::MissingHeader { ref name }) if name == "X-Requested-By"
            ));
        }
    }
}
