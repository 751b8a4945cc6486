//! 사용자 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! [`AppUserRepository`](user_repo::AppUserRepository) trait과
//! 메모리 기반 구현체 [`InMemoryAppUserRepository`](user_repo::InMemoryAppUserRepository)를 제공합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::repositories::users::user_repo::{AppUserRepository, InMemoryAppUserRepository};
//!
//! let repository = InMemoryAppUserRepository::new();
//! let user = repository.find_by_id(1).await?;
//! ```

pub mod user_repo;

pub use user_repo::{AppUserRepository, InMemoryAppUserRepository};
