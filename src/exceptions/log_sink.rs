//! 에러 로그 출력 대상
//!
//! 컨트롤러는 로그를 [`ErrorLogSink`]로만 기록하므로 테스트에서는
//! 기록된 레벨과 내용을 그대로 검사할 수 있습니다.

use log::Level;

/// 예외 처리 로그 대상
pub const LOG_TARGET: &str = "ExceptionController";

/// 심각도별 로그 한 줄을 받는 출력 대상
pub trait ErrorLogSink: Send + Sync {
    fn emit(&self, level: Level, line: &str);
}

/// `log` 파사드로 전달하는 기본 출력 대상
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

impl ErrorLogSink for LogSink {
    fn emit(&self, level: Level, line: &str) {
        log::log!(target: LOG_TARGET, level, "{}", line);
    }
}

#[cfg(test)]
pub(crate) use recording::RecordingSink;
