//! # Repository Layer
//!
//! 데이터 액세스 계층입니다. 저장소별 실패는 [`RepositoryError`]로 표현되고,
//! `?` 연산자를 통해 예외 처리 계층이 분류할 수 있는 `AppError`로 변환됩니다.
//!
//! | RepositoryError | AppError | 에러 코드 |
//! |-----------------|----------|-----------|
//! | `NotFound` | `ObjectNotFound` | `ENTITY_NOT_FOUND` |
//! | `Duplicate` | `Service` | `ENTITY_ALREADY_EXISTS` |
//! | `Timeout` | `Timeout` | `TIMEOUT` |
//! | `Unavailable` | `PersistenceSystem` | `TIMEOUT` |

pub mod users;

use thiserror::Error;

use crate::core::errors::{AppError, ServiceException};
use crate::exceptions::ErrorCode;

/// 저장소 계층 에러
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("{entity} with id {id} does not exist")]
    NotFound { entity: String, id: String },

    /// 유일해야 하는 값이 이미 저장되어 있음 (`key` 예: `"Name ann"`)
    #[error("{entity} already exists with {key}")]
    Duplicate { entity: String, key: String },

    #[error("Repository operation timed out: {0}")]
    Timeout(String),

    #[error("Repository unavailable: {0}")]
    Unavailable(String),
}

impl From<RepositoryError> for AppError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound { entity, id } => AppError::ObjectNotFound { entity, id },
            RepositoryError::Duplicate { entity, key } => {
                ServiceException::new(ErrorCode::ENTITY_ALREADY_EXISTS.as_str(), [entity, key])
                    .into()
            }
            RepositoryError::Timeout(operation) => AppError::Timeout(format!(
                "Repository operation timed out: {}",
                operation
            )),
            unavailable @ RepositoryError::Unavailable(_) => {
                AppError::persistence("Could not access the user store", unavailable)
            }
        }
    }
}
