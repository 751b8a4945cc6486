use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::users::UserStatus;

/// 사용자 생성 요청
///
/// ```json
/// { "name": "ann", "email": "ann@example.com", "status": "ACTIVE" }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateUserRequest {
    #[validate(length(min = 1, max = 50, message = "name must have between 1 and 50 characters"))]
    pub name: String,

    #[validate(email(message = "email must be a valid address"))]
    pub email: String,

    #[serde(default)]
    pub status: UserStatus,
}
