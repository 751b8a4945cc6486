use std::fmt::Display;
use std::sync::Arc;

use crate::core::errors::{AppResult, ServiceException};
use crate::exceptions::ErrorCode;
use crate::repositories::users::AppUserRepository;

const ENTITY: &str = "User";

/// 사용자 비즈니스 규칙
///
/// 규칙 위반은 카탈로그 코드와 메시지 파라미터를 가진 `ServiceException`으로 반환됩니다.
pub struct AppUserBr {
    repository: Arc<dyn AppUserRepository>,
}

impl AppUserBr {
    pub fn new(repository: Arc<dyn AppUserRepository>) -> Self {
        Self { repository }
    }

    /// 엔티티가 존재하면 그대로 반환합니다.
    ///
    /// # Errors
    ///
    /// `ENTITY_NOT_FOUND` 코드, 파라미터 `[id, "User"]`
    pub fn validate_entity_exists<T>(entity: Option<T>, id: impl Display) -> AppResult<T> {
        entity.ok_or_else(|| {
            ServiceException::new(
                ErrorCode::ENTITY_NOT_FOUND.as_str(),
                [id.to_string(), ENTITY.to_string()],
            )
            .into()
        })
    }

    /// 같은 이름의 사용자가 이미 있는지 검사합니다.
    ///
    /// # Errors
    ///
    /// * `ENTITY_ALREADY_EXISTS` 코드, 파라미터 `["User", "Name <name>"]`
    /// * 저장소 조회 실패
    pub async fn validate_name_exists(&self, name: &str) -> AppResult<()> {
        if self.repository.find_by_name(name).await?.is_some() {
            return Err(ServiceException::new(
                ErrorCode::ENTITY_ALREADY_EXISTS.as_str(),
                [ENTITY.to_string(), format!("Name {}", name)],
            )
            .into());
        }

        Ok(())
    }
}
