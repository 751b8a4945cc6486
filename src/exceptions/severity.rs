//! 에러 심각도

use log::Level;

/// 처리된 에러의 심각도
///
/// - `Warn`: 클라이언트 원인 (4xx)
/// - `Error`: 서버/인프라 원인 (5xx 또는 예상하지 못한 오류)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    Warn,
    Error,
}

impl Severity {
    /// 구조화된 응답 로그를 기록할 로그 레벨
    pub fn level(&self) -> Level {
        match self {
            Severity::Warn => Level::Warn,
            Severity::Error => Level::Error,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_levels() {
        assert_eq!(Severity::Warn.level(), Level::Warn);
        assert_eq!(Severity::Error.level(), Level::Error);
    }
}
