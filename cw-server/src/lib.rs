pub mod api;
pub mod app_state;
pub mod error;
pub mod health;
pub mod logger;
pub mod routes;

pub use api::{
    error::ApiError,
    error::Result as ApiResult,
    extractors::auth::{AdminClaims, AuthClaims},
    users::{
        auth_response::AuthResponse,
        list_users_query::ListUsersQuery,
        login_request::LoginRequest,
        signup_request::SignupRequest,
        update_user_request::UpdateUserRequest,
        user_dto::UserDto,
        user_service::UserService,
        users::{delete_user, get_user, list_users, login, signup, update_user},
    },
};

pub use crate::app_state::AppState;
pub use crate::routes::build_router;
