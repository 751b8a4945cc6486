use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entities::users::{AppUser, UserStatus};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: u64,
    pub name: String,
    pub email: String,
    pub status: UserStatus,
    pub created_at: DateTime<Utc>,
}

impl From<AppUser> for UserResponse {
    fn from(user: AppUser) -> Self {
        let AppUser {
            id,
            name,
            email,
            status,
            created_at,
        } = user;

        Self {
            id,
            name,
            email,
            status,
            created_at,
        }
    }
}
