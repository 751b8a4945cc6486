//! # Domain Layer Module
//!
//! 예외 처리 계층이 다루는 모든 에러 형태를 실제 요청 흐름에서 발생시키는
//! 사용자 리소스의 도메인 모델입니다.
//!
//! ```text
//! Domain Layer (이 모듈)
//! ├── Entities      - 핵심 비즈니스 객체
//! └── DTOs          - 데이터 전송 객체 (Request/Response)
//!      │
//!      ▼
//! Application Layer (Services)
//!      │
//!      ▼
//! Infrastructure Layer (Repositories)
//! ```
//!
//! | Spring | 이 시스템 | 역할 |
//! |--------|-----------|------|
//! | `@Entity` | [`entities`] | 비즈니스 핵심 객체 |
//! | `@RequestBody` / `@ResponseBody` | [`dto`] | API 계약 정의 |
//! | `@Valid` | `validator` | 데이터 유효성 검사 |

pub mod dto;
pub mod entities;
