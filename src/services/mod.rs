//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! 서비스는 저장소 trait 객체를 생성자로 주입받으며, 핸들러에는 `web::Data`로 공유됩니다.
//! 비즈니스 규칙 위반은 `ServiceException`으로, 저장소 실패는 `RepositoryError`로 표현되어
//! 모두 `AppError`로 전파됩니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use crate::repositories::users::InMemoryAppUserRepository;
//! use crate::services::users::UserService;
//!
//! let service = UserService::new(Arc::new(InMemoryAppUserRepository::new()));
//! let user = service.get_user(1).await?;
//! ```

pub mod users;
