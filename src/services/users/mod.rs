//! 사용자 관리 서비스 모듈
//!
//! - [`user_br`] - 사용자 비즈니스 규칙 (존재/중복 검사)
//! - [`user_service`] - 조회, 검색, 생성, 삭제

pub mod user_br;
pub mod user_service;

pub use user_br::AppUserBr;
pub use user_service::UserService;
