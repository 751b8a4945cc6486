use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 사용자 상태
///
/// JSON과 쿼리 문자열에서는 `ACTIVE`, `INACTIVE`, `BLOCKED`로 표현됩니다.
/// 그 외 값은 역직렬화 단계에서 "unknown variant" 에러가 됩니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserStatus {
    #[default]
    Active,
    Inactive,
    Blocked,
}

/// 사용자 엔티티
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppUser {
    pub id: u64,
    pub name: String,
    pub email: String,
    pub status: UserStatus,
    pub created_at: DateTime<Utc>,
}

impl AppUser {
    pub fn new(id: u64, name: String, email: String, status: UserStatus) -> Self {
        Self {
            id,
            name,
            email,
            status,
            created_at: Utc::now(),
        }
    }

    pub fn is_active(&self) -> bool {
        self.status == UserStatus::Active
    }
}
