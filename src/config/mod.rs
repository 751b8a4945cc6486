//! # Configuration Module
//!
//! 서비스 설정을 중앙에서 관리하는 모듈입니다.
//! Spring의 `@Configuration` / `@Value`와 유사하게 환경 변수 기반 설정값을 제공합니다.
//!
//! ## 모듈 구성
//!
//! - [`exception_config`] - 에러 응답 설정 (스택 트레이스 길이, moreInfo, 메시지 카탈로그 경로)
//! - [`server_config`] - 서버 바인딩, Rate Limiting 설정
//!
//! ## 환경 변수 설정 가이드
//!
//! ```bash
//! # 에러 응답
//! export RESPONSE_STACKTRACE_SIZE="1000"
//! export RESPONSE_MORE_INFO="/api/v1/docs/errors"
//! export MESSAGES_PATH="config/messages.properties"   # 선택
//!
//! # 서버
//! export HOST="127.0.0.1"
//! export PORT="8080"
//! export RATE_LIMIT_PER_SECOND="100"
//! export RATE_LIMIT_BURST_SIZE="200"
//! ```
//!
//! ## Spring과의 비교
//!
//! | Spring | Rust (이 프로젝트) |
//! |--------|-------------------|
//! | `@Value("${response.stacktrace.size}")` | `ExceptionConfig::stack_trace_limit()` |
//! | `messages.properties` | `MESSAGES_PATH` 또는 번들 카탈로그 |
//! | `application.yml` | `.env` 파일 |

pub mod exception_config;
pub mod server_config;

pub use exception_config::*;
pub use server_config::*;
