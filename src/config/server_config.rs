//! 서버 및 요청 제한 설정 관리 모듈

use std::env;

use log::error;

/// 서버 바인딩 설정
pub struct ServerConfig;

impl ServerConfig {
    /// 서버가 바인딩할 포트를 반환합니다.
    ///
    /// # Environment Variables
    ///
    /// - `PORT`: 커스텀 포트 설정 (기본값: 8080)
    pub fn port() -> u16 {
        env::var("PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse()
            .unwrap_or(8080)
    }

    /// 서버가 바인딩할 호스트 주소를 반환합니다.
    ///
    /// # Environment Variables
    ///
    /// - `HOST`: 커스텀 호스트 설정 (기본값: "127.0.0.1")
    pub fn host() -> String {
        env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string())
    }

    pub fn bind_address() -> String {
        format!("{}:{}", Self::host(), Self::port())
    }
}

/// Rate Limiting 설정
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RateLimitConfig {
    pub per_second: u64,
    pub burst_size: u32,
}

impl RateLimitConfig {
    /// 환경 변수에서 Rate Limiting 설정을 로드합니다.
    ///
    /// * `RATE_LIMIT_PER_SECOND` - 초당 허용 요청 수 (기본값: 100)
    /// * `RATE_LIMIT_BURST_SIZE` - 버스트 허용량 (기본값: 200)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let per_second = lookup("RATE_LIMIT_PER_SECOND")
            .unwrap_or_else(|| "100".to_string())
            .parse::<u64>()
            .unwrap_or_else(|e| {
                error!("RATE_LIMIT_PER_SECOND 파싱 실패: {}. 기본값 100 사용", e);
                100
            });

        let burst_size = lookup("RATE_LIMIT_BURST_SIZE")
            .unwrap_or_else(|| "200".to_string())
            .parse::<u32>()
            .unwrap_or_else(|e| {
                error!("RATE_LIMIT_BURST_SIZE 파싱 실패: {}. 기본값 200 사용", e);
                200
            });

        Self {
            per_second,
            burst_size,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_config_defaults() {
        if env::var("PORT").is_err() {
            assert_eq!(ServerConfig::port(), 8080);
        }

        if env::var("HOST").is_err() {
            assert_eq!(ServerConfig::host(), "127.0.0.1");
        }
    }

    #[test]
    fn test_rate_limit_defaults_and_fallback() {
        let defaults = RateLimitConfig::from_lookup(|_| None);
        assert_eq!(
            defaults,
            RateLimitConfig {
                per_second: 100,
                burst_size: 200
            }
        );

        let malformed = RateLimitConfig::from_lookup(|key| match key {
            "RATE_LIMIT_PER_SECOND" => Some("fast".to_string()),
            "RATE_LIMIT_BURST_SIZE" => Some("40".to_string()),
            _ => None,
        });
        assert_eq!(malformed.per_second, 100);
        assert_eq!(malformed.burst_size, 40);
    }
}
