use std::sync::Arc;

use crate::core::errors::AppResult;
use crate::domain::dto::users::request::{CreateUserRequest, UserSearchQuery};
use crate::domain::dto::users::response::UserResponse;
use crate::repositories::users::AppUserRepository;
use crate::services::users::AppUserBr;

pub struct UserService {
    repository: Arc<dyn AppUserRepository>,
    rules: AppUserBr,
}

impl UserService {
    pub fn new(repository: Arc<dyn AppUserRepository>) -> Self {
        Self {
            rules: AppUserBr::new(repository.clone()),
            repository,
        }
    }

    pub async fn get_user(&self, id: u64) -> AppResult<UserResponse> {
        let user = self.repository.find_by_id(id).await?;
        let user = AppUserBr::validate_entity_exists(user, id)?;

        Ok(UserResponse::from(user))
    }

    pub async fn search_users(&self, query: UserSearchQuery) -> AppResult<Vec<UserResponse>> {
        let users = self.repository.search(&query.name, query.status).await?;
        let limit = query.limit.map_or(usize::MAX, |limit| limit as usize);

        Ok(users
            .into_iter()
            .take(limit)
            .map(UserResponse::from)
            .collect())
    }

    pub async fn create_user(&self, request: CreateUserRequest) -> AppResult<UserResponse> {
        self.rules.validate_name_exists(&request.name).await?;

        let user = self
            .repository
            .save(request.name, request.email, request.status)
            .await?;
        log::info!("사용자 생성: id={}, name={}", user.id, user.name);

        Ok(UserResponse::from(user))
    }

    /// 사용자를 삭제합니다. 없는 사용자면 저장소의 `NotFound`가 전파됩니다.
    pub async fn delete_user(&self, id: u64, requested_by: &str) -> AppResult<()> {
        self.repository.delete(id).await?;
        log::info!("사용자 삭제: id={}, requested_by={}", id, requested_by);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::errors::AppError;
    use crate::domain::entities::users::UserStatus;
    use crate::repositories::users::InMemoryAppUserRepository;

    fn service() -> UserService {
        UserService::new(Arc::new(InMemoryAppUserRepository::new()))
    }

    fn create_request(name: &str) -> CreateUserRequest {
        CreateUserRequest {
            name: name.to_string(),
            email: format!("{}@example.com", name),
            status: UserStatus::Active,
        }
    }

    #[actix_web::test]
    async fn test_create_then_get() {
        let service = service();

        let created = service.create_user(create_request("ann")).await.unwrap();
        let found = service.get_user(created.id).await.unwrap();

        assert_eq!(created, found);
    }

    #[actix_web::test]
    async fn test_duplicate_name_is_rejected() {
        let service = service();
        service.create_user(create_request("ann")).await.unwrap();

        let error = service.create_user(create_request("ann")).await.unwrap_err();
        assert!(matches!(
            error,
            AppError::Service(ref exception) if exception.code() == "ENTITY_ALREADY_EXISTS"
        ));
    }

    #[actix_web::test]
    async fn test_get_missing_user() {
        let error = service().get_user(7).await.unwrap_err();

        assert!(matches!(
            error,
            AppError::Service(ref exception) if exception.params() == ["7", "User"]
        ));
    }

    #[actix_web::test]
    async fn test_delete_missing_user_is_object_not_found() {
        let error = service().delete_user(7, "admin").await.unwrap_err();

        assert!(matches!(error, AppError::ObjectNotFound { .. }));
    }

    #[actix_web::test]
    async fn test_search_by_name() {
        let service = service();
        service.create_user(create_request("ann")).await.unwrap();
        service.create_user(create_request("bob")).await.unwrap();

        let users = service
            .search_users(UserSearchQuery {
                name: "bo".to_string(),
                status: None,
                limit: None,
            })
            .await
            .unwrap();

        assert_eq!(users.len(), 1);
        assert_eq!(users[0].name, "bob");
    }

    #[actix_web::test]
    async fn test_search_respects_limit() {
        let service = service();
        for name in ["ann", "anna", "annie"] {
            service.create_user(create_request(name)).await.unwrap();
        }

        let users = service
            .search_users(UserSearchQuery {
                name: "ann".to_string(),
                status: None,
                limit: Some(2),
            })
            .await
            .unwrap();

        let names: Vec<&str> = users.iter().map(|user| user.name.as_str()).collect();
        assert_eq!(names, ["ann", "anna"]);
    }
}
