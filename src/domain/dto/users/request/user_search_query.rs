use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::users::UserStatus;

/// 사용자 검색 쿼리 파라미터
///
/// `GET /api/v1/users?name=ann&status=ACTIVE&limit=20`
///
/// `name`은 필수이며, 누락되면 추출 단계에서 `MissingParameter`가 됩니다.
/// `limit`이 숫자가 아니면 `TypeMismatch`가 됩니다.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UserSearchQuery {
    #[validate(length(min = 1, max = 50, message = "name must have between 1 and 50 characters"))]
    pub name: String,

    pub status: Option<UserStatus>,

    #[validate(range(min = 1, max = 100, message = "limit must be between 1 and 100"))]
    pub limit: Option<u32>,
}
