use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;

use crate::domain::entities::users::{AppUser, UserStatus};
use crate::repositories::RepositoryError;

const ENTITY: &str = "User";

/// 사용자 저장소 인터페이스
#[async_trait]
pub trait AppUserRepository: Send + Sync {
    async fn find_by_id(&self, id: u64) -> Result<Option<AppUser>, RepositoryError>;

    async fn find_by_name(&self, name: &str) -> Result<Option<AppUser>, RepositoryError>;

    /// 이름에 `name`이 포함된 사용자를 id 순으로 반환합니다.
    async fn search(
        &self,
        name: &str,
        status: Option<UserStatus>,
    ) -> Result<Vec<AppUser>, RepositoryError>;

    /// 새 사용자를 저장합니다. 같은 이름이 있으면 `RepositoryError::Duplicate`를 반환합니다.
    async fn save(
        &self,
        name: String,
        email: String,
        status: UserStatus,
    ) -> Result<AppUser, RepositoryError>;

    /// 사용자를 삭제합니다. 없는 id면 `RepositoryError::NotFound`를 반환합니다.
    async fn delete(&self, id: u64) -> Result<(), RepositoryError>;
}

/// `RwLock<HashMap>` 기반 사용자 저장소
#[derive(Debug)]
pub struct InMemoryAppUserRepository {
    users: RwLock<HashMap<u64, AppUser>>,
    next_id: AtomicU64,
}

impl InMemoryAppUserRepository {
    pub fn new() -> Self {
        Self {
            users: RwLock::new(HashMap::new()),
            next_id: AtomicU64::new(1),
        }
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, HashMap<u64, AppUser>>, RepositoryError> {
        self.users
            .read()
            .map_err(|e| RepositoryError::Unavailable(e.to_string()))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, HashMap<u64, AppUser>>, RepositoryError> {
        self.users
            .write()
            .map_err(|e| RepositoryError::Unavailable(e.to_string()))
    }
}

impl Default for InMemoryAppUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AppUserRepository for InMemoryAppUserRepository {
    async fn find_by_id(&self, id: u64) -> Result<Option<AppUser>, RepositoryError> {
        Ok(self.read()?.get(&id).cloned())
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<AppUser>, RepositoryError> {
        Ok(self.read()?.values().find(|user| user.name == name).cloned())
    }

    async fn search(
        &self,
        name: &str,
        status: Option<UserStatus>,
    ) -> Result<Vec<AppUser>, RepositoryError> {
        let mut users: Vec<AppUser> = self
            .read()?
            .values()
            .filter(|user| user.name.contains(name))
            .filter(|user| status.is_none_or(|status| user.status == status))
            .cloned()
            .collect();
        users.sort_by_key(|user| user.id);

        Ok(users)
    }

    async fn save(
        &self,
        name: String,
        email: String,
        status: UserStatus,
    ) -> Result<AppUser, RepositoryError> {
        let mut users = self.write()?;
        // 이름 중복 검사와 삽입은 같은 쓰기 잠금 안에서 수행
        if users.values().any(|user| user.name == name) {
            return Err(RepositoryError::Duplicate {
                entity: ENTITY.to_string(),
                key: format!("Name {}", name),
            });
        }

        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let user = AppUser::new(id, name, email, status);
        users.insert(id, user.clone());

        log::debug!("사용자 저장: id={}", id);
        Ok(user)
    }

    async fn delete(&self, id: u64) -> Result<(), RepositoryError> {
        self.write()?
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| RepositoryError::NotFound {
                entity: ENTITY.to_string(),
                id: id.to_string(),
            })
    }
}
