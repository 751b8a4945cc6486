pub mod create_user_request;
pub mod user_search_query;

pub use create_user_request::CreateUserRequest;
pub use user_search_query::UserSearchQuery;
